use crate::{CopyGeneration, SelectedFile, UploadId};

/// Side effects requested by [`crate::update`]; the host executes them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Issue the single multipart upload for `file`.
    StartUpload { upload_id: UploadId, file: SelectedFile },
    /// Open the platform file-picker dialog.
    OpenFilePicker,
    /// Forget the picker's current value so the same file can be chosen again.
    ResetFilePicker,
    /// Put `text` on the clipboard.
    CopyToClipboard { text: String },
    /// Start the copy-label revert timer for `generation`.
    ScheduleCopyRevert { generation: CopyGeneration },
    /// Raise a blocking notification to the user.
    Notify { message: String },
}
