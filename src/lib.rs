pub mod config;
pub mod errors;
pub mod logger;
pub mod mime;
pub mod network;
pub mod upload;
pub mod utils;

pub use config::{get_config_path, Config};
pub use errors::{Result, WebdavError};
pub use mime::{ExtensionMimeTable, MimeLookup};
pub use network::{
    Depth, Header, HttpTransport, Method, ReqwestTransport, RequestPayload, WebdavClient,
    WebdavConnection, WebdavRequest,
};
pub use upload::{LocalFile, UploadSource};
