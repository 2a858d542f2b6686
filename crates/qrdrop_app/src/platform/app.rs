use std::sync::{mpsc, Arc};
use std::time::Duration;

use qrdrop_core::{update, AppState, AppViewModel, InputChannel, Msg};
use qrdrop_engine::Uploader;
use qrdrop_logging::{qrdrop_debug, qrdrop_info};

use super::ui::constants::*;
use super::ui::{layout, render};
use super::{EffectRunner, UiEvent, ViewSurface, WidgetSettings};

/// Maps a page event to the message it triggers.
///
/// Events on elements without an entry here (a drop outside the drop target,
/// a click on a panel background) trigger nothing.
pub fn dispatch(event: UiEvent) -> Option<Msg> {
    match event {
        UiEvent::DragEnter { element } | UiEvent::DragOver { element } if element == DROP_ZONE => {
            Some(Msg::DragEntered)
        }
        UiEvent::DragLeave { element } if element == DROP_ZONE => Some(Msg::DragLeft),
        UiEvent::Drop { element, files } if element == DROP_ZONE => Some(Msg::FilesOffered {
            channel: InputChannel::DragDrop,
            files,
        }),
        UiEvent::FilesChosen { element, files } if element == FILE_INPUT => {
            Some(Msg::FilesOffered {
                channel: InputChannel::Picker,
                files,
            })
        }
        UiEvent::Click { element } => match element {
            DROP_ZONE => Some(Msg::DropZoneClicked),
            REMOVE_FILE => Some(Msg::RemoveClicked),
            GENERATE_BTN => Some(Msg::SubmitClicked),
            COPY_BTN => Some(Msg::CopyClicked),
            NEW_UPLOAD_BTN => Some(Msg::NewUploadClicked),
            _ => None,
        },
        _ => None,
    }
}

/// The upload widget: sole owner of the state, bound to one surface.
///
/// Everything runs on the caller's thread. Upload results and timer expiries
/// queue up until [`Widget::pump`] is called.
pub struct Widget<S: ViewSurface> {
    surface: S,
    state: AppState,
    effects: EffectRunner,
    msg_rx: mpsc::Receiver<Msg>,
}

impl<S: ViewSurface> Widget<S> {
    pub fn mount(surface: S, settings: WidgetSettings) -> Self {
        let (msg_tx, msg_rx) = mpsc::channel();
        let effects = EffectRunner::new(&settings, msg_tx);
        qrdrop_info!("mounting widget, endpoint={}", settings.upload.endpoint);
        Self::start(surface, effects, msg_rx)
    }

    /// Mounts with a custom uploader instead of the HTTP one; `settings.upload`
    /// is not used.
    pub fn mount_with_uploader(
        surface: S,
        settings: WidgetSettings,
        uploader: Arc<dyn Uploader>,
    ) -> Self {
        let (msg_tx, msg_rx) = mpsc::channel();
        let effects = EffectRunner::with_uploader(uploader, settings.copy_revert_delay, msg_tx);
        Self::start(surface, effects, msg_rx)
    }

    fn start(mut surface: S, effects: EffectRunner, msg_rx: mpsc::Receiver<Msg>) -> Self {
        let state = AppState::new();
        let mut frame = layout::initial_commands();
        frame.extend(render::render(&state.view()));
        surface.apply(&frame);

        Self {
            surface,
            state,
            effects,
            msg_rx,
        }
    }

    pub fn handle_event(&mut self, event: UiEvent) {
        match dispatch(event) {
            Some(msg) => self.dispatch_msg(msg),
            None => qrdrop_debug!("event without transition ignored"),
        }
    }

    /// Applies pending engine results. Returns how many were handled.
    pub fn pump(&mut self) -> usize {
        let mut inbox = Vec::new();
        while let Ok(msg) = self.msg_rx.try_recv() {
            inbox.push(msg);
        }
        let handled = inbox.len();
        for msg in inbox {
            self.dispatch_msg(msg);
        }
        handled
    }

    /// Like [`Widget::pump`], but waits up to `timeout` for the first result.
    pub fn pump_blocking(&mut self, timeout: Duration) -> usize {
        match self.msg_rx.recv_timeout(timeout) {
            Ok(msg) => {
                self.dispatch_msg(msg);
                1 + self.pump()
            }
            Err(_) => 0,
        }
    }

    pub fn dispatch_msg(&mut self, msg: Msg) {
        let state = std::mem::take(&mut self.state);
        let from = state.view_state();
        let (mut state, effects) = update(state, msg);
        let view = state.view();
        let was_dirty = state.consume_dirty();
        self.state = state;

        if view.view_state != from {
            qrdrop_info!("view {:?} -> {:?}", from, view.view_state);
        } else if !effects.is_empty() {
            qrdrop_debug!("view stays {:?}, {} effect(s)", from, effects.len());
        }

        // The new panel is on screen before any effect runs, so `Uploading`
        // shows before the request leaves.
        if was_dirty {
            self.surface.apply(&render::render(&view));
        }
        let cmds = self.effects.run(effects);
        if !cmds.is_empty() {
            self.surface.apply(&cmds);
        }
    }

    pub fn view(&self) -> AppViewModel {
        self.state.view()
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }
}
