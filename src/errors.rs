use thiserror::Error;

pub type Result<T> = std::result::Result<T, WebdavError>;

#[derive(Debug, Error)]
pub enum WebdavError {
    /// The base URL, or a URL resolved from it, could not be parsed.
    #[error("invalid url `{url}`: {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    /// An operation that must name a resource was called without one.
    #[error("{operation} requires a resource uri")]
    MissingUri { operation: &'static str },

    /// A `.` or `..` segment would make URL parsing climb out of the base
    /// location.
    #[error("`{uri}` contains a dot segment")]
    DotSegment { uri: String },

    /// Whatever the HTTP transport raised, untouched.
    #[error(transparent)]
    Transport(#[from] anyhow::Error),

    #[error("upload source: {0}")]
    Io(#[from] std::io::Error),

    #[error("config error: {0}")]
    Config(String),
}

impl WebdavError {
    pub(crate) fn invalid_url(url: impl Into<String>, source: url::ParseError) -> Self {
        WebdavError::InvalidUrl {
            url: url.into(),
            source,
        }
    }
}
