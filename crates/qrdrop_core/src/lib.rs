//! qrdrop core: pure selection/upload/result state machine and view-model helpers.
mod effect;
mod file;
mod input;
mod msg;
mod size;
mod state;
mod update;
mod view_model;

pub use effect::Effect;
pub use file::SelectedFile;
pub use input::{first_candidate, InputChannel};
pub use msg::Msg;
pub use size::format_size;
pub use state::{AppState, CopyGeneration, ShareLink, UploadId, UploadResult, ViewState};
pub use update::update;
pub use view_model::{AppViewModel, COPY_LABEL_ACKNOWLEDGED, COPY_LABEL_RESTING};
