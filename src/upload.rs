use std::io;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::fs::File;
use tokio::io::AsyncReadExt;

/// Something whose content can be sent with `PUT`.
///
/// The client only opens a source that is not open yet and never closes
/// it; the caller keeps ownership of the handle.
#[async_trait]
pub trait UploadSource: Send + Sync {
    /// Name used as the remote resource name when none is given.
    fn filename(&self) -> String;

    fn is_open(&self) -> bool;

    async fn open(&mut self) -> io::Result<()>;

    /// Current size in bytes.
    async fn size(&self) -> io::Result<u64>;

    /// Reads at most `len` bytes.
    async fn read(&mut self, len: u64) -> io::Result<Vec<u8>>;
}

/// A file on the local file system, opened read-only on demand.
#[derive(Debug)]
pub struct LocalFile {
    path: PathBuf,
    handle: Option<File>,
}

impl LocalFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            handle: None,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Drops the open handle, if any.
    pub fn close(&mut self) {
        self.handle = None;
    }
}

#[async_trait]
impl UploadSource for LocalFile {
    fn filename(&self) -> String {
        self.path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default()
    }

    fn is_open(&self) -> bool {
        self.handle.is_some()
    }

    async fn open(&mut self) -> io::Result<()> {
        self.handle = Some(File::open(&self.path).await?);
        Ok(())
    }

    async fn size(&self) -> io::Result<u64> {
        match &self.handle {
            Some(file) => Ok(file.metadata().await?.len()),
            None => Ok(tokio::fs::metadata(&self.path).await?.len()),
        }
    }

    async fn read(&mut self, len: u64) -> io::Result<Vec<u8>> {
        let file = self
            .handle
            .as_mut()
            .ok_or_else(|| io::Error::new(io::ErrorKind::Other, "file is not open"))?;

        let mut buf = Vec::new();
        file.take(len).read_to_end(&mut buf).await?;
        Ok(buf)
    }
}
