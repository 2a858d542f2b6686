//! Stable ids of the page elements the widget binds to.
use crate::platform::ElementId;

pub const DROP_ZONE: ElementId = ElementId::new("dropZone");
pub const FILE_INPUT: ElementId = ElementId::new("fileInput");
pub const FILE_SELECTED: ElementId = ElementId::new("fileSelected");
pub const FILE_NAME: ElementId = ElementId::new("selectedFileName");
pub const FILE_SIZE: ElementId = ElementId::new("selectedFileSize");
pub const REMOVE_FILE: ElementId = ElementId::new("removeFile");
pub const GENERATE_BTN: ElementId = ElementId::new("generateBtn");
pub const LOADING: ElementId = ElementId::new("loading");
pub const RESULT_SECTION: ElementId = ElementId::new("resultSection");
pub const QR_CODE: ElementId = ElementId::new("qrCode");
pub const SHARE_LINK: ElementId = ElementId::new("shareLink");
pub const COPY_BTN: ElementId = ElementId::new("copyBtn");
pub const NEW_UPLOAD_BTN: ElementId = ElementId::new("newUploadBtn");

pub const DRAG_OVER_CLASS: &str = "drag-over";
pub const COPIED_CLASS: &str = "copied";
