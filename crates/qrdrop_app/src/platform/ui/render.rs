use qrdrop_core::{AppViewModel, ViewState};

use super::constants::*;
use crate::platform::{ElementId, ViewCommand};

/// Panel shown for each view state. Exactly one is visible at a time.
pub const PANELS: [(ViewState, ElementId); 4] = [
    (ViewState::Idle, DROP_ZONE),
    (ViewState::FileChosen, FILE_SELECTED),
    (ViewState::Uploading, LOADING),
    (ViewState::ResultReady, RESULT_SECTION),
];

/// Projects the view model onto the page as one frame.
///
/// This is the only place that decides what is visible.
pub fn render(view: &AppViewModel) -> Vec<ViewCommand> {
    let mut cmds: Vec<ViewCommand> = PANELS
        .iter()
        .map(|(state, element)| ViewCommand::SetVisible {
            element: *element,
            visible: view.view_state == *state,
        })
        .collect();

    cmds.push(ViewCommand::SetClass {
        element: DROP_ZONE,
        class: DRAG_OVER_CLASS,
        present: view.drag_hover,
    });

    cmds.push(ViewCommand::SetText {
        element: FILE_NAME,
        text: view.file_name.clone().unwrap_or_default(),
    });
    cmds.push(ViewCommand::SetText {
        element: FILE_SIZE,
        text: view.file_size.clone().unwrap_or_default(),
    });

    cmds.push(ViewCommand::SetVisible {
        element: GENERATE_BTN,
        visible: view.submit_visible,
    });
    cmds.push(ViewCommand::SetEnabled {
        element: GENERATE_BTN,
        enabled: view.submit_enabled,
    });

    cmds.push(ViewCommand::SetImageSource {
        element: QR_CODE,
        source: view.qr_image_ref.clone(),
    });
    cmds.push(ViewCommand::SetInputValue {
        element: SHARE_LINK,
        value: view.share_url.clone().unwrap_or_default(),
    });

    cmds.push(ViewCommand::SetText {
        element: COPY_BTN,
        text: view.copy_label().to_string(),
    });
    cmds.push(ViewCommand::SetClass {
        element: COPY_BTN,
        class: COPIED_CLASS,
        present: view.copy_acknowledged,
    });

    cmds
}

#[cfg(test)]
mod tests {
    use super::*;

    fn visible_panels(cmds: &[ViewCommand]) -> Vec<ElementId> {
        cmds.iter()
            .filter_map(|cmd| match cmd {
                ViewCommand::SetVisible {
                    element,
                    visible: true,
                } if PANELS.iter().any(|(_, panel)| panel == element) => Some(*element),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn exactly_one_panel_per_state() {
        for (state, panel) in PANELS {
            let view = AppViewModel {
                view_state: state,
                ..AppViewModel::default()
            };
            assert_eq!(visible_panels(&render(&view)), vec![panel]);
        }
    }

    #[test]
    fn empty_fields_render_as_blank() {
        let cmds = render(&AppViewModel::default());
        assert!(cmds.contains(&ViewCommand::SetInputValue {
            element: SHARE_LINK,
            value: String::new(),
        }));
        assert!(cmds.contains(&ViewCommand::SetImageSource {
            element: QR_CODE,
            source: None,
        }));
    }
}
