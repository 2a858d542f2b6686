use qrdrop_core::COPY_LABEL_RESTING;

use super::constants::*;
use crate::platform::{DragScope, ViewCommand};

/// Commands applied once when the widget is mounted, before the first render.
pub fn initial_commands() -> Vec<ViewCommand> {
    vec![
        ViewCommand::SuppressDragDefaults {
            scope: DragScope::Document,
        },
        ViewCommand::SuppressDragDefaults {
            scope: DragScope::Element(DROP_ZONE),
        },
        ViewCommand::SetText {
            element: COPY_BTN,
            text: COPY_LABEL_RESTING.to_string(),
        },
    ]
}
