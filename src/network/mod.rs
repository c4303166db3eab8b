pub mod connection;
pub mod header;
pub mod transport;
pub mod webdav;

pub use connection::{Method, WebdavConnection};
pub use header::{Depth, Header};
pub use transport::{HttpTransport, ReqwestTransport, RequestPayload, WebdavRequest};
pub use webdav::WebdavClient;
