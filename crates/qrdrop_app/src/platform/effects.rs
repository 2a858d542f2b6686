use std::sync::{mpsc, Arc};
use std::thread;
use std::time::Duration;

use qrdrop_core::{Effect, Msg, UploadId, UploadResult};
use qrdrop_engine::{
    EngineEvent, EngineEvents, EngineHandle, FailureKind, UploadError, UploadReceipt,
    UploadRequest, Uploader,
};
use qrdrop_logging::{qrdrop_debug, qrdrop_error, qrdrop_info, qrdrop_warn};

use super::ui::constants::FILE_INPUT;
use super::{ViewCommand, WidgetSettings};

/// Notification text for failures the server did not explain.
pub const GENERIC_UPLOAD_FAILURE: &str = "An error occurred while uploading the file.";

/// Executes core effects: IO goes to the engine, page work comes back as
/// view commands. Engine results are fed back to the widget as messages.
pub struct EffectRunner {
    engine: EngineHandle,
    copy_revert_delay: Duration,
    msg_tx: mpsc::Sender<Msg>,
}

impl EffectRunner {
    pub fn new(settings: &WidgetSettings, msg_tx: mpsc::Sender<Msg>) -> Self {
        let (engine, events) = EngineHandle::new(settings.upload.clone());
        Self::start(engine, events, settings.copy_revert_delay, msg_tx)
    }

    pub fn with_uploader(
        uploader: Arc<dyn Uploader>,
        copy_revert_delay: Duration,
        msg_tx: mpsc::Sender<Msg>,
    ) -> Self {
        let (engine, events) = EngineHandle::with_uploader(uploader);
        Self::start(engine, events, copy_revert_delay, msg_tx)
    }

    fn start(
        engine: EngineHandle,
        events: EngineEvents,
        copy_revert_delay: Duration,
        msg_tx: mpsc::Sender<Msg>,
    ) -> Self {
        spawn_event_loop(events, msg_tx.clone());
        Self {
            engine,
            copy_revert_delay,
            msg_tx,
        }
    }

    /// Runs `effects` in order and returns the commands they need on the page.
    pub fn run(&self, effects: Vec<Effect>) -> Vec<ViewCommand> {
        let mut cmds = Vec::new();
        for effect in effects {
            match effect {
                Effect::StartUpload { upload_id, file } => {
                    qrdrop_info!(
                        "StartUpload upload_id={} name={} size={} mime={}",
                        upload_id,
                        file.name,
                        file.size,
                        file.mime_type
                    );
                    let request = UploadRequest {
                        upload_id,
                        file_name: file.name,
                        mime_type: file.mime_type,
                        payload: file.payload,
                    };
                    if let Err(err) = self.engine.upload(request) {
                        // Settle right away so the widget leaves `Uploading`.
                        let msg = Msg::UploadSettled {
                            upload_id,
                            result: map_upload_result(upload_id, Err(err)),
                        };
                        if self.msg_tx.send(msg).is_err() {
                            qrdrop_error!("upload {} could not be settled", upload_id);
                        }
                    }
                }
                Effect::ScheduleCopyRevert { generation } => {
                    qrdrop_debug!(
                        "copy revert {} in {:?}",
                        generation,
                        self.copy_revert_delay
                    );
                    self.engine.start_timer(generation, self.copy_revert_delay);
                }
                Effect::OpenFilePicker => {
                    cmds.push(ViewCommand::OpenFilePicker {
                        element: FILE_INPUT,
                    });
                }
                Effect::ResetFilePicker => {
                    cmds.push(ViewCommand::ResetFilePicker {
                        element: FILE_INPUT,
                    });
                }
                Effect::CopyToClipboard { text } => {
                    cmds.push(ViewCommand::WriteClipboard { text });
                }
                Effect::Notify { message } => {
                    cmds.push(ViewCommand::ShowNotification { message });
                }
            }
        }
        cmds
    }
}

fn spawn_event_loop(events: EngineEvents, msg_tx: mpsc::Sender<Msg>) {
    let spawned = thread::Builder::new()
        .name("qrdrop-effects".to_string())
        .spawn(move || {
            while let Some(event) = events.recv() {
                let msg = match event {
                    EngineEvent::UploadCompleted { upload_id, result } => Msg::UploadSettled {
                        upload_id,
                        result: map_upload_result(upload_id, result),
                    },
                    // Copy reverts are the only timers; the id is the copy generation.
                    EngineEvent::TimerElapsed { timer_id } => Msg::CopyRevertElapsed {
                        generation: timer_id,
                    },
                };
                if msg_tx.send(msg).is_err() {
                    break;
                }
            }
        });
    if let Err(err) = spawned {
        qrdrop_error!("failed to spawn effect event loop: {}", err);
    }
}

fn map_upload_result(
    upload_id: UploadId,
    result: Result<UploadReceipt, UploadError>,
) -> UploadResult {
    match result {
        Ok(receipt) => {
            qrdrop_info!(
                "upload {} succeeded: url={} stored_as={:?} file_id={:?}",
                upload_id,
                receipt.download_url,
                receipt.filename,
                receipt.file_id
            );
            UploadResult::Success {
                qr_image_ref: receipt.qr_code,
                download_url: receipt.download_url,
            }
        }
        Err(err) => {
            qrdrop_warn!("upload {} failed ({}): {}", upload_id, err.kind, err.message);
            let message = match err.kind {
                FailureKind::Rejected => format!("Error: {}", err.message),
                FailureKind::InvalidRequest
                | FailureKind::Timeout
                | FailureKind::Network
                | FailureKind::MalformedResponse => GENERIC_UPLOAD_FAILURE.to_string(),
            };
            UploadResult::Failure { message }
        }
    }
}
