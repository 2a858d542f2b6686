use std::sync::{mpsc, Arc};
use std::thread;
use std::time::Duration;

use qrdrop_logging::{qrdrop_debug, qrdrop_error, qrdrop_info};

use crate::upload::{ReqwestUploader, UploadSettings, Uploader};
use crate::{EngineEvent, FailureKind, TimerId, UploadError, UploadId, UploadRequest};

enum EngineCommand {
    Upload(UploadRequest),
    StartTimer { timer_id: TimerId, delay: Duration },
}

/// Command side of the engine thread. Cheap to clone.
///
/// Uploads and timers are independent tasks on the engine's runtime; neither
/// can be cancelled once issued. Every accepted upload is answered with
/// exactly one [`EngineEvent::UploadCompleted`], even when its task panics.
#[derive(Clone)]
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
}

/// Event side of the engine thread.
pub struct EngineEvents {
    event_rx: mpsc::Receiver<EngineEvent>,
}

impl EngineHandle {
    pub fn new(settings: UploadSettings) -> (Self, EngineEvents) {
        Self::with_uploader(Arc::new(ReqwestUploader::new(settings)))
    }

    pub fn with_uploader(uploader: Arc<dyn Uploader>) -> (Self, EngineEvents) {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();

        let spawned = thread::Builder::new()
            .name("qrdrop-engine".to_string())
            .spawn(move || run_engine(uploader, cmd_rx, event_tx));
        if let Err(err) = spawned {
            // Commands will fail to send and no events will ever arrive.
            qrdrop_error!("failed to spawn engine thread: {}", err);
        }

        (Self { cmd_tx }, EngineEvents { event_rx })
    }

    /// Queues an upload. Fails when the engine thread is gone, in which case
    /// no event will ever arrive for this request.
    pub fn upload(&self, request: UploadRequest) -> Result<(), UploadError> {
        let upload_id = request.upload_id;
        self.cmd_tx
            .send(EngineCommand::Upload(request))
            .map_err(|_| engine_unavailable(upload_id))
    }

    /// Emits [`EngineEvent::TimerElapsed`] for `timer_id` after `delay`.
    pub fn start_timer(&self, timer_id: TimerId, delay: Duration) {
        let _ = self
            .cmd_tx
            .send(EngineCommand::StartTimer { timer_id, delay });
    }
}

impl EngineEvents {
    pub fn try_recv(&self) -> Option<EngineEvent> {
        self.event_rx.try_recv().ok()
    }

    /// Blocks until an event arrives; `None` once the engine is gone.
    pub fn recv(&self) -> Option<EngineEvent> {
        self.event_rx.recv().ok()
    }

    pub fn recv_timeout(&self, timeout: Duration) -> Option<EngineEvent> {
        self.event_rx.recv_timeout(timeout).ok()
    }
}

fn run_engine(
    uploader: Arc<dyn Uploader>,
    cmd_rx: mpsc::Receiver<EngineCommand>,
    event_tx: mpsc::Sender<EngineEvent>,
) {
    let runtime = match tokio::runtime::Runtime::new() {
        Ok(runtime) => runtime,
        Err(err) => {
            qrdrop_error!("failed to start engine runtime: {}", err);
            refuse_commands(cmd_rx, event_tx);
            return;
        }
    };

    while let Ok(command) = cmd_rx.recv() {
        match command {
            EngineCommand::Upload(request) => {
                let upload_id = request.upload_id;
                let task = runtime.spawn(run_upload(uploader.clone(), request, event_tx.clone()));
                let event_tx = event_tx.clone();
                runtime.spawn(async move {
                    if let Err(err) = task.await {
                        qrdrop_error!("upload {} task failed: {}", upload_id, err);
                        let error = UploadError::new(
                            FailureKind::Network,
                            format!("upload task failed: {err}"),
                        );
                        let _ = event_tx.send(EngineEvent::UploadCompleted {
                            upload_id,
                            result: Err(error),
                        });
                    }
                });
            }
            EngineCommand::StartTimer { timer_id, delay } => {
                let event_tx = event_tx.clone();
                runtime.spawn(async move {
                    tokio::time::sleep(delay).await;
                    let _ = event_tx.send(EngineEvent::TimerElapsed { timer_id });
                });
            }
        }
    }
    qrdrop_debug!("engine command channel closed");
}

/// Answers queued uploads with a failure when there is no runtime to run them.
fn refuse_commands(cmd_rx: mpsc::Receiver<EngineCommand>, event_tx: mpsc::Sender<EngineEvent>) {
    while let Ok(command) = cmd_rx.recv() {
        if let EngineCommand::Upload(request) = command {
            let upload_id = request.upload_id;
            let _ = event_tx.send(EngineEvent::UploadCompleted {
                upload_id,
                result: Err(engine_unavailable(upload_id)),
            });
        }
    }
}

fn engine_unavailable(upload_id: UploadId) -> UploadError {
    UploadError::new(
        FailureKind::Network,
        format!("upload {upload_id}: engine is not running"),
    )
}

async fn run_upload(
    uploader: Arc<dyn Uploader>,
    request: UploadRequest,
    event_tx: mpsc::Sender<EngineEvent>,
) {
    let upload_id = request.upload_id;
    qrdrop_info!(
        "upload {} started: name={} bytes={}",
        upload_id,
        request.file_name,
        request.payload.len()
    );
    let result = uploader.upload(&request).await;
    let _ = event_tx.send(EngineEvent::UploadCompleted { upload_id, result });
}

#[cfg(test)]
mod tests {
    use bytes::Bytes;

    use super::*;

    fn request(upload_id: UploadId) -> UploadRequest {
        UploadRequest {
            upload_id,
            file_name: "a.txt".to_string(),
            mime_type: String::new(),
            payload: Bytes::from_static(b"x"),
        }
    }

    #[test]
    fn upload_fails_when_the_engine_thread_is_gone() {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        drop(cmd_rx);
        let engine = EngineHandle { cmd_tx };

        let err = engine.upload(request(7)).unwrap_err();
        assert_eq!(err.kind, FailureKind::Network);
    }

    #[test]
    fn queued_uploads_are_refused_without_a_runtime() {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();
        cmd_tx.send(EngineCommand::Upload(request(2))).unwrap();
        cmd_tx
            .send(EngineCommand::StartTimer {
                timer_id: 1,
                delay: Duration::from_millis(1),
            })
            .unwrap();
        drop(cmd_tx);

        refuse_commands(cmd_rx, event_tx);

        match event_rx.try_recv().unwrap() {
            EngineEvent::UploadCompleted {
                upload_id: 2,
                result: Err(err),
            } => assert_eq!(err.kind, FailureKind::Network),
            other => panic!("unexpected event {other:?}"),
        }
        assert!(event_rx.try_recv().is_err());
    }
}
