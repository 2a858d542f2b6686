//! qrdrop engine: upload IO and timers, run off the widget's thread.
mod engine;
mod response;
mod types;
mod upload;

pub use engine::{EngineEvents, EngineHandle};
pub use response::decode_upload_response;
pub use types::{
    EngineEvent, FailureKind, TimerId, UploadError, UploadId, UploadReceipt, UploadRequest,
};
pub use upload::{ReqwestUploader, UploadSettings, Uploader};
