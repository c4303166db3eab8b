/// Percent-encodes a resource name so it can be appended to a URL.
///
/// Only RFC 3986 unreserved characters survive, so `/` is encoded too and
/// the result is always a single path segment.
pub fn encode_uri(uri: &str) -> String {
    urlencoding::encode(uri).into_owned()
}
