#![allow(dead_code)]

use std::io;
use std::sync::Mutex;

use async_trait::async_trait;
use webdav_client::{HttpTransport, UploadSource, WebdavClient, WebdavRequest};

pub const BASE_URL: &str = "http://example.com/dav";

/// Transport that keeps every request and answers with its index.
#[derive(Default)]
pub struct RecordingTransport {
    requests: Mutex<Vec<WebdavRequest>>,
}

impl RecordingTransport {
    pub fn requests(&self) -> Vec<WebdavRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn last(&self) -> WebdavRequest {
        self.requests
            .lock()
            .unwrap()
            .last()
            .cloned()
            .expect("no request was sent")
    }
}

#[async_trait]
impl HttpTransport for RecordingTransport {
    type Response = usize;

    async fn request(&self, request: WebdavRequest) -> anyhow::Result<usize> {
        let mut requests = self.requests.lock().unwrap();
        requests.push(request);
        Ok(requests.len() - 1)
    }
}

pub fn client() -> WebdavClient<RecordingTransport> {
    WebdavClient::parse(RecordingTransport::default(), BASE_URL).unwrap()
}

pub fn header_pairs(request: &WebdavRequest) -> Vec<(&str, &str)> {
    request
        .headers
        .iter()
        .map(|h| (h.name.as_str(), h.value.as_str()))
        .collect()
}

/// In-memory upload source that counts how often it was opened.
pub struct MemoryFile {
    pub name: String,
    pub content: Vec<u8>,
    pub open: bool,
    pub open_calls: usize,
    /// Extra bytes `read` hands out past the reported size.
    pub trailing: Vec<u8>,
}

impl MemoryFile {
    pub fn new(name: &str, content: &[u8]) -> Self {
        Self {
            name: name.to_string(),
            content: content.to_vec(),
            open: false,
            open_calls: 0,
            trailing: Vec::new(),
        }
    }
}

#[async_trait]
impl UploadSource for MemoryFile {
    fn filename(&self) -> String {
        self.name.clone()
    }

    fn is_open(&self) -> bool {
        self.open
    }

    async fn open(&mut self) -> io::Result<()> {
        self.open = true;
        self.open_calls += 1;
        Ok(())
    }

    async fn size(&self) -> io::Result<u64> {
        Ok(self.content.len() as u64)
    }

    async fn read(&mut self, _len: u64) -> io::Result<Vec<u8>> {
        if !self.open {
            return Err(io::Error::new(io::ErrorKind::Other, "not open"));
        }
        let mut data = self.content.clone();
        data.extend_from_slice(&self.trailing);
        Ok(data)
    }
}
