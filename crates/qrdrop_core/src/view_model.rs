use crate::ViewState;

pub const COPY_LABEL_RESTING: &str = "Copy";
pub const COPY_LABEL_ACKNOWLEDGED: &str = "Copied!";

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppViewModel {
    pub view_state: ViewState,
    pub drag_hover: bool,
    pub file_name: Option<String>,
    /// Human-readable size of the held file.
    pub file_size: Option<String>,
    pub submit_enabled: bool,
    pub submit_visible: bool,
    pub share_url: Option<String>,
    pub qr_image_ref: Option<String>,
    pub copy_acknowledged: bool,
    pub dirty: bool,
}

impl AppViewModel {
    pub fn copy_label(&self) -> &'static str {
        if self.copy_acknowledged {
            COPY_LABEL_ACKNOWLEDGED
        } else {
            COPY_LABEL_RESTING
        }
    }
}
