use crate::view_model::AppViewModel;
use crate::{format_size, SelectedFile};

pub type UploadId = u64;
pub type CopyGeneration = u64;

/// Which of the four panels is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewState {
    #[default]
    Idle,
    FileChosen,
    Uploading,
    ResultReady,
}

/// Link and scannable code returned by a successful upload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShareLink {
    pub qr_image_ref: String,
    pub download_url: String,
}

/// Outcome of one upload attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UploadResult {
    Success {
        qr_image_ref: String,
        download_url: String,
    },
    /// `message` is already phrased for the user.
    Failure { message: String },
}

// The held file and the result live inside the phase, so "a file is held iff
// FileChosen or Uploading" cannot be violated.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
enum Phase {
    #[default]
    Idle,
    FileChosen {
        file: SelectedFile,
    },
    Uploading {
        file: SelectedFile,
        upload_id: UploadId,
    },
    ResultReady {
        link: ShareLink,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppState {
    phase: Phase,
    drag_hover: bool,
    next_upload_id: UploadId,
    copy_generation: CopyGeneration,
    copy_acknowledged: Option<CopyGeneration>,
    dirty: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn view(&self) -> AppViewModel {
        let view_state = self.view_state();
        let (file_name, file_size) = match self.selected_file() {
            Some(file) => (Some(file.name.clone()), Some(format_size(file.size))),
            None => (None, None),
        };
        let (share_url, qr_image_ref) = match &self.phase {
            Phase::ResultReady { link } => (
                Some(link.download_url.clone()),
                Some(link.qr_image_ref.clone()),
            ),
            _ => (None, None),
        };

        AppViewModel {
            view_state,
            drag_hover: self.drag_hover,
            file_name,
            file_size,
            submit_enabled: view_state == ViewState::FileChosen,
            submit_visible: view_state != ViewState::Uploading,
            share_url,
            qr_image_ref,
            copy_acknowledged: self.copy_acknowledged.is_some(),
            dirty: self.dirty,
        }
    }

    pub fn view_state(&self) -> ViewState {
        match self.phase {
            Phase::Idle => ViewState::Idle,
            Phase::FileChosen { .. } => ViewState::FileChosen,
            Phase::Uploading { .. } => ViewState::Uploading,
            Phase::ResultReady { .. } => ViewState::ResultReady,
        }
    }

    pub fn selected_file(&self) -> Option<&SelectedFile> {
        match &self.phase {
            Phase::FileChosen { file } | Phase::Uploading { file, .. } => Some(file),
            Phase::Idle | Phase::ResultReady { .. } => None,
        }
    }

    pub fn share_link(&self) -> Option<&ShareLink> {
        match &self.phase {
            Phase::ResultReady { link } => Some(link),
            _ => None,
        }
    }

    /// Id of the upload currently in flight, if any.
    pub fn in_flight_upload(&self) -> Option<UploadId> {
        match self.phase {
            Phase::Uploading { upload_id, .. } => Some(upload_id),
            _ => None,
        }
    }

    pub fn is_drag_hover(&self) -> bool {
        self.drag_hover
    }

    pub fn is_copy_acknowledged(&self) -> bool {
        self.copy_acknowledged.is_some()
    }

    /// Returns whether state changed since the last call and resets the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    /// Holds `file`, replacing any previous selection or result.
    ///
    /// A missing file is ignored, and so is any selection while an upload is
    /// in flight. Returns whether the selection was taken.
    pub fn select(&mut self, file: Option<SelectedFile>) -> bool {
        let Some(file) = file else {
            return false;
        };
        if matches!(self.phase, Phase::Uploading { .. }) {
            return false;
        }
        self.phase = Phase::FileChosen { file };
        self.mark_dirty();
        true
    }

    /// Drops the held file (or result) and goes back to `Idle`.
    ///
    /// Clearing an `Idle` state changes nothing. Returns whether state changed.
    pub fn clear(&mut self) -> bool {
        if self.phase == Phase::Idle {
            return false;
        }
        self.phase = Phase::Idle;
        self.mark_dirty();
        true
    }

    pub(crate) fn set_drag_hover(&mut self, hover: bool) {
        if self.drag_hover != hover {
            self.drag_hover = hover;
            self.mark_dirty();
        }
    }

    /// Moves `FileChosen` to `Uploading` and returns the new attempt.
    pub(crate) fn begin_upload(&mut self) -> Option<(UploadId, SelectedFile)> {
        let file = match std::mem::take(&mut self.phase) {
            Phase::FileChosen { file } => file,
            other => {
                self.phase = other;
                return None;
            }
        };
        self.next_upload_id += 1;
        let upload_id = self.next_upload_id;
        self.phase = Phase::Uploading {
            file: file.clone(),
            upload_id,
        };
        self.mark_dirty();
        Some((upload_id, file))
    }

    /// Leaves `Uploading` for the attempt `upload_id`.
    ///
    /// Success moves to `ResultReady`; failure goes back to `FileChosen` with
    /// the same file. Returns `false` when `upload_id` is not in flight.
    pub(crate) fn settle_upload(&mut self, upload_id: UploadId, result: &UploadResult) -> bool {
        let file = match std::mem::take(&mut self.phase) {
            Phase::Uploading {
                file,
                upload_id: current,
            } if current == upload_id => file,
            other => {
                self.phase = other;
                return false;
            }
        };
        self.phase = match result {
            UploadResult::Success {
                qr_image_ref,
                download_url,
            } => Phase::ResultReady {
                link: ShareLink {
                    qr_image_ref: qr_image_ref.clone(),
                    download_url: download_url.clone(),
                },
            },
            UploadResult::Failure { .. } => Phase::FileChosen { file },
        };
        self.mark_dirty();
        true
    }

    /// Starts a new copy acknowledgement and returns its generation.
    pub(crate) fn acknowledge_copy(&mut self) -> CopyGeneration {
        self.copy_generation += 1;
        self.copy_acknowledged = Some(self.copy_generation);
        self.mark_dirty();
        self.copy_generation
    }

    /// Reverts the copy label if `generation` is still the latest copy.
    pub(crate) fn revert_copy(&mut self, generation: CopyGeneration) -> bool {
        if self.copy_acknowledged != Some(generation) {
            return false;
        }
        self.copy_acknowledged = None;
        self.mark_dirty();
        true
    }

    pub(crate) fn mark_dirty(&mut self) {
        self.dirty = true;
    }
}
