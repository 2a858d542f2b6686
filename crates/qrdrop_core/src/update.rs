use crate::{first_candidate, AppState, Effect, InputChannel, Msg, UploadResult, ViewState};

/// Pure update function: applies a message to state and returns any effects.
///
/// This is the transition table of the widget. Messages that have no
/// transition from the current view state leave the state untouched.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::DragEntered => {
            // The drop zone is only on screen while idle.
            if state.view_state() == ViewState::Idle {
                state.set_drag_hover(true);
            }
            Vec::new()
        }
        Msg::DragLeft => {
            state.set_drag_hover(false);
            Vec::new()
        }
        Msg::FilesOffered { channel, files } => {
            if channel == InputChannel::DragDrop {
                state.set_drag_hover(false);
            }
            let accepted = state.select(first_candidate(files));
            if !accepted && channel == InputChannel::Picker {
                // The picker must not keep a value the widget refused, or
                // picking the same file again fires no change.
                vec![Effect::ResetFilePicker]
            } else {
                Vec::new()
            }
        }
        Msg::DropZoneClicked => {
            if state.view_state() == ViewState::Idle {
                vec![Effect::OpenFilePicker]
            } else {
                Vec::new()
            }
        }
        Msg::RemoveClicked => {
            if state.view_state() == ViewState::FileChosen && state.clear() {
                vec![Effect::ResetFilePicker]
            } else {
                Vec::new()
            }
        }
        Msg::SubmitClicked => match state.begin_upload() {
            Some((upload_id, file)) => vec![Effect::StartUpload { upload_id, file }],
            None => Vec::new(),
        },
        Msg::UploadSettled { upload_id, result } => {
            if !state.settle_upload(upload_id, &result) {
                return (state, Vec::new());
            }
            match result {
                UploadResult::Success { .. } => Vec::new(),
                UploadResult::Failure { message } => vec![Effect::Notify { message }],
            }
        }
        Msg::CopyClicked => match state.share_link() {
            Some(link) => {
                let text = link.download_url.clone();
                let generation = state.acknowledge_copy();
                vec![
                    Effect::CopyToClipboard { text },
                    Effect::ScheduleCopyRevert { generation },
                ]
            }
            None => Vec::new(),
        },
        Msg::CopyRevertElapsed { generation } => {
            state.revert_copy(generation);
            Vec::new()
        }
        Msg::NewUploadClicked => {
            if state.view_state() == ViewState::ResultReady && state.clear() {
                vec![Effect::ResetFilePicker]
            } else {
                Vec::new()
            }
        }
        Msg::NoOp => Vec::new(),
    };

    (state, effects)
}
