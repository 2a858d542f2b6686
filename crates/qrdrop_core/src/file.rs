use std::fmt;

use bytes::Bytes;

/// A file the user picked or dropped, ready to be uploaded.
///
/// Cloning is cheap: the payload is a reference-counted buffer.
#[derive(Clone, PartialEq, Eq)]
pub struct SelectedFile {
    pub name: String,
    pub size: u64,
    pub mime_type: String,
    pub payload: Bytes,
}

impl SelectedFile {
    /// Builds a file from its payload; `size` is taken from the payload length.
    pub fn new(name: impl Into<String>, mime_type: impl Into<String>, payload: Bytes) -> Self {
        Self {
            name: name.into(),
            size: payload.len() as u64,
            mime_type: mime_type.into(),
            payload,
        }
    }
}

impl fmt::Debug for SelectedFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SelectedFile")
            .field("name", &self.name)
            .field("size", &self.size)
            .field("mime_type", &self.mime_type)
            .field("payload_len", &self.payload.len())
            .finish()
    }
}
