mod app;
mod effects;
pub mod logging;
mod settings;
mod surface;
pub mod ui;

pub use app::{dispatch, Widget};
pub use effects::{EffectRunner, GENERIC_UPLOAD_FAILURE};
pub use settings::WidgetSettings;
pub use surface::{DragScope, ElementId, UiEvent, ViewCommand, ViewSurface};
