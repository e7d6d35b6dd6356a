use bytes::Bytes;

/// Media type used for upload payloads unless overridden.
pub const MEDIA_TYPE_UPLOAD: &str = "application/octet-stream";

/// A raw payload sent verbatim instead of being JSON-encoded, e.g. image
/// contents.
#[derive(Debug, Clone)]
pub struct File {
    pub content_type: String,
    pub bytes: Bytes,
}

impl File {
    pub fn new(bytes: impl Into<Bytes>) -> Self {
        Self {
            content_type: MEDIA_TYPE_UPLOAD.to_string(),
            bytes: bytes.into(),
        }
    }

    pub fn with_content_type(mut self, content_type: &str) -> Self {
        self.content_type = content_type.to_string();
        self
    }
}
