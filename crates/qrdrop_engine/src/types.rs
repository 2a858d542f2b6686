use bytes::Bytes;

pub type UploadId = u64;
pub type TimerId = u64;

/// Everything needed to issue one upload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadRequest {
    pub upload_id: UploadId,
    pub file_name: String,
    pub mime_type: String,
    pub payload: Bytes,
}

/// Decoded body of a successful upload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadReceipt {
    pub download_url: String,
    pub qr_code: String,
    /// Name the server stored the file under, when it reports one.
    pub filename: Option<String>,
    pub file_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineEvent {
    UploadCompleted {
        upload_id: UploadId,
        result: Result<UploadReceipt, UploadError>,
    },
    TimerElapsed {
        timer_id: TimerId,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{kind}: {message}")]
pub struct UploadError {
    pub kind: FailureKind,
    pub message: String,
}

impl UploadError {
    pub(crate) fn new(kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FailureKind {
    /// The endpoint or the request could not be built.
    #[error("invalid request")]
    InvalidRequest,
    #[error("timeout")]
    Timeout,
    /// No response was received.
    #[error("network error")]
    Network,
    /// The server answered with `success: false`.
    #[error("rejected by server")]
    Rejected,
    /// The body was not the expected JSON shape.
    #[error("malformed response")]
    MalformedResponse,
}
