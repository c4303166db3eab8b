//! Content-Type lookup for uploads.

/// Maps a file name to the MIME type sent with `PUT`.
pub trait MimeLookup: Send + Sync {
    fn by_filename(&self, name: &str) -> String;
}

pub const DEFAULT_MIME_TYPE: &str = "application/octet-stream";

/// Known extensions and their MIME types.
const EXTENSIONS: &[(&str, &str)] = &[
    // Text
    ("txt", "text/plain"),
    ("text", "text/plain"),
    ("log", "text/plain"),
    ("conf", "text/plain"),
    ("ini", "text/plain"),
    ("md", "text/markdown"),
    ("csv", "text/csv"),
    ("tsv", "text/tab-separated-values"),
    ("ics", "text/calendar"),
    ("vcf", "text/vcard"),
    // Web
    ("html", "text/html"),
    ("htm", "text/html"),
    ("css", "text/css"),
    ("js", "text/javascript"),
    ("xml", "text/xml"),
    ("xsl", "text/xml"),
    ("xslt", "text/xml"),
    ("xhtml", "application/xhtml+xml"),
    ("json", "application/json"),
    // Images
    ("png", "image/png"),
    ("jpg", "image/jpeg"),
    ("jpeg", "image/jpeg"),
    ("gif", "image/gif"),
    ("bmp", "image/bmp"),
    ("webp", "image/webp"),
    ("svg", "image/svg+xml"),
    ("ico", "image/x-icon"),
    ("tif", "image/tiff"),
    ("tiff", "image/tiff"),
    // Audio / video
    ("mp3", "audio/mpeg"),
    ("wav", "audio/x-wav"),
    ("ogg", "audio/ogg"),
    ("mp4", "video/mp4"),
    ("mpg", "video/mpeg"),
    ("mpeg", "video/mpeg"),
    ("mov", "video/quicktime"),
    ("avi", "video/x-msvideo"),
    // Documents
    ("pdf", "application/pdf"),
    ("rtf", "application/rtf"),
    ("doc", "application/msword"),
    ("xls", "application/vnd.ms-excel"),
    ("ppt", "application/vnd.ms-powerpoint"),
    ("docx", "application/vnd.openxmlformats-officedocument.wordprocessingml.document"),
    ("xlsx", "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet"),
    ("pptx", "application/vnd.openxmlformats-officedocument.presentationml.presentation"),
    ("odt", "application/vnd.oasis.opendocument.text"),
    ("ods", "application/vnd.oasis.opendocument.spreadsheet"),
    // Archives
    ("zip", "application/zip"),
    ("gz", "application/x-gzip"),
    ("tgz", "application/x-gzip"),
    ("tar", "application/x-tar"),
    ("bz2", "application/x-bzip2"),
    ("7z", "application/x-7z-compressed"),
];

/// Extension based lookup. Case-insensitive; anything unknown, including
/// names without an extension, is `application/octet-stream`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExtensionMimeTable;

impl MimeLookup for ExtensionMimeTable {
    fn by_filename(&self, name: &str) -> String {
        let extension = match name.rsplit_once('.') {
            Some((stem, ext)) if !stem.is_empty() => ext.to_lowercase(),
            _ => return DEFAULT_MIME_TYPE.to_string(),
        };

        EXTENSIONS
            .iter()
            .find(|(known, _)| *known == extension)
            .map_or(DEFAULT_MIME_TYPE, |&(_, mime)| mime)
            .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_extensions() {
        let table = ExtensionMimeTable;
        assert_eq!(table.by_filename("a%20b.txt"), "text/plain");
        assert_eq!(table.by_filename("photo.JPG"), "image/jpeg");
        assert_eq!(table.by_filename("archive.tar.gz"), "application/x-gzip");
    }

    #[test]
    fn test_unknown_extensions() {
        let table = ExtensionMimeTable;
        assert_eq!(table.by_filename("data.unknown"), DEFAULT_MIME_TYPE);
        assert_eq!(table.by_filename("Makefile"), DEFAULT_MIME_TYPE);
        assert_eq!(table.by_filename(".profile"), DEFAULT_MIME_TYPE);
    }
}
