#![allow(dead_code)]

use std::collections::{BTreeMap, BTreeSet};
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use bytes::Bytes;
use qrdrop_app::render::PANELS;
use qrdrop_app::{DragScope, ElementId, ViewCommand, ViewSurface, Widget};
use qrdrop_core::SelectedFile;
use qrdrop_engine::{FailureKind, UploadError, UploadReceipt, UploadRequest, Uploader};

/// Surface that keeps the last applied value per element, like a page would.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    pub frames: Vec<Vec<ViewCommand>>,
    pub visible: BTreeMap<ElementId, bool>,
    pub enabled: BTreeMap<ElementId, bool>,
    pub text: BTreeMap<ElementId, String>,
    pub values: BTreeMap<ElementId, String>,
    pub images: BTreeMap<ElementId, Option<String>>,
    pub classes: BTreeSet<(ElementId, &'static str)>,
    pub suppressed: Vec<DragScope>,
    pub clipboard: Option<String>,
    pub notifications: Vec<String>,
    pub picker_opened: usize,
    pub picker_resets: usize,
}

impl RecordingSurface {
    pub fn visible_panels(&self) -> Vec<ElementId> {
        PANELS
            .iter()
            .map(|(_, panel)| *panel)
            .filter(|panel| self.visible.get(panel).copied().unwrap_or(false))
            .collect()
    }

    pub fn text_of(&self, element: ElementId) -> &str {
        self.text.get(&element).map(String::as_str).unwrap_or("")
    }

    pub fn value_of(&self, element: ElementId) -> &str {
        self.values.get(&element).map(String::as_str).unwrap_or("")
    }

    pub fn image_of(&self, element: ElementId) -> Option<&str> {
        self.images.get(&element).and_then(|src| src.as_deref())
    }

    pub fn has_class(&self, element: ElementId, class: &'static str) -> bool {
        self.classes.contains(&(element, class))
    }
}

impl ViewSurface for RecordingSurface {
    fn apply(&mut self, frame: &[ViewCommand]) {
        self.frames.push(frame.to_vec());
        for cmd in frame {
            match cmd.clone() {
                ViewCommand::SuppressDragDefaults { scope } => self.suppressed.push(scope),
                ViewCommand::SetVisible { element, visible } => {
                    self.visible.insert(element, visible);
                }
                ViewCommand::SetEnabled { element, enabled } => {
                    self.enabled.insert(element, enabled);
                }
                ViewCommand::SetText { element, text } => {
                    self.text.insert(element, text);
                }
                ViewCommand::SetInputValue { element, value } => {
                    self.values.insert(element, value);
                }
                ViewCommand::SetImageSource { element, source } => {
                    self.images.insert(element, source);
                }
                ViewCommand::SetClass {
                    element,
                    class,
                    present,
                } => {
                    if present {
                        self.classes.insert((element, class));
                    } else {
                        self.classes.remove(&(element, class));
                    }
                }
                ViewCommand::OpenFilePicker { .. } => self.picker_opened += 1,
                ViewCommand::ResetFilePicker { .. } => self.picker_resets += 1,
                ViewCommand::WriteClipboard { text } => self.clipboard = Some(text),
                ViewCommand::ShowNotification { message } => self.notifications.push(message),
            }
        }
    }
}

/// Answers from a script; `.exe` files are rejected, `net.fail` fails transport
/// and `panic.bin` makes the upload task panic.
#[derive(Default)]
pub struct ScriptedUploader {
    pub requests: Mutex<Vec<UploadRequest>>,
}

#[async_trait::async_trait]
impl Uploader for ScriptedUploader {
    async fn upload(&self, request: &UploadRequest) -> Result<UploadReceipt, UploadError> {
        self.requests.lock().unwrap().push(request.clone());
        if request.file_name.ends_with(".exe") {
            return Err(UploadError {
                kind: FailureKind::Rejected,
                message: "too large".to_string(),
            });
        }
        if request.file_name == "panic.bin" {
            panic!("scripted uploader panicked");
        }
        if request.file_name == "net.fail" {
            return Err(UploadError {
                kind: FailureKind::Network,
                message: "connection refused".to_string(),
            });
        }
        Ok(UploadReceipt {
            download_url: format!("https://x/{}", request.file_name),
            qr_code: format!("data:image/png;base64,{}", request.file_name),
            filename: Some(request.file_name.clone()),
            file_id: None,
        })
    }
}

pub fn scripted() -> Arc<ScriptedUploader> {
    Arc::new(ScriptedUploader::default())
}

pub fn file(name: &str, len: usize) -> SelectedFile {
    SelectedFile::new(name, "application/octet-stream", Bytes::from(vec![1u8; len]))
}

/// Pumps until `done` holds or five seconds pass.
pub fn pump_until<F>(widget: &mut Widget<RecordingSurface>, done: F) -> bool
where
    F: Fn(&Widget<RecordingSurface>) -> bool,
{
    let deadline = Instant::now() + Duration::from_secs(5);
    while Instant::now() < deadline {
        if done(widget) {
            return true;
        }
        widget.pump_blocking(Duration::from_millis(20));
    }
    done(widget)
}
