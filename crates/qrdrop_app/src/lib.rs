//! qrdrop widget host: binds the core state machine to a view surface and
//! runs its effects through the engine.
mod platform;

pub use platform::logging::{self, LogDestination};
pub use platform::ui::{constants, layout, render};
pub use platform::{
    dispatch, DragScope, ElementId, EffectRunner, UiEvent, ViewCommand, ViewSurface, Widget,
    WidgetSettings, GENERIC_UPLOAD_FAILURE,
};
