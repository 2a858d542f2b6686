use std::time::Duration;

use qrdrop_engine::UploadSettings;

#[derive(Debug, Clone)]
pub struct WidgetSettings {
    pub upload: UploadSettings,
    /// How long the copy button shows its acknowledgement.
    pub copy_revert_delay: Duration,
}

impl Default for WidgetSettings {
    fn default() -> Self {
        Self {
            upload: UploadSettings::default(),
            copy_revert_delay: Duration::from_millis(2000),
        }
    }
}
