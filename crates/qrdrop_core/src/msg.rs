use crate::{CopyGeneration, InputChannel, SelectedFile, UploadId, UploadResult};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// A drag entered or moved over the drop target.
    DragEntered,
    /// The drag left the drop target.
    DragLeft,
    /// Files were dropped on the drop target or chosen in the picker.
    FilesOffered {
        channel: InputChannel,
        files: Vec<SelectedFile>,
    },
    /// User clicked the drop target itself.
    DropZoneClicked,
    /// User clicked the remove control on the selection summary.
    RemoveClicked,
    /// User clicked the submit control.
    SubmitClicked,
    /// The upload tagged `upload_id` finished, one way or the other.
    UploadSettled {
        upload_id: UploadId,
        result: UploadResult,
    },
    /// User clicked copy on the result panel.
    CopyClicked,
    /// The revert timer started by copy `generation` fired.
    CopyRevertElapsed { generation: CopyGeneration },
    /// User clicked start-over on the result panel.
    NewUploadClicked,
    /// Fallback for events with no transition.
    NoOp,
}
