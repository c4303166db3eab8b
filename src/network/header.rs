use std::fmt;

pub const DEPTH: &str = "Depth";
pub const OVERWRITE: &str = "Overwrite";
pub const DESTINATION: &str = "Destination";
pub const TIMEOUT: &str = "Timeout";
pub const LOCK_TOKEN: &str = "Lock-Token";
pub const CONTENT_TYPE: &str = "Content-Type";
pub const CONTENT_LENGTH: &str = "Content-Length";

/// A single request header. Requests carry them as a list, in insertion
/// order, without deduplication.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Header {
    pub name: String,
    pub value: String,
}

impl Header {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

impl fmt::Display for Header {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}: {}", self.name, self.value)
    }
}

/// Value of the `Depth` header.
///
/// `0` targets the resource only, `1` the resource and its immediate
/// members, `Infinity` the whole subtree. Any other token is sent as is;
/// the server decides whether it is acceptable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Depth {
    Zero,
    One,
    Infinity,
    Token(String),
}

impl Depth {
    pub fn as_str(&self) -> &str {
        match self {
            Depth::Zero => "0",
            Depth::One => "1",
            Depth::Infinity => "Infinity",
            Depth::Token(token) => token,
        }
    }
}

impl From<&str> for Depth {
    fn from(token: &str) -> Self {
        match token {
            "0" => Depth::Zero,
            "1" => Depth::One,
            "Infinity" => Depth::Infinity,
            other => Depth::Token(other.to_string()),
        }
    }
}

impl From<String> for Depth {
    fn from(token: String) -> Self {
        Depth::from(token.as_str())
    }
}

impl fmt::Display for Depth {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Renders the `Overwrite` flag as its wire token.
pub fn overwrite_token(overwrite: bool) -> &'static str {
    if overwrite {
        "T"
    } else {
        "F"
    }
}
