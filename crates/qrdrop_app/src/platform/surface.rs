use std::fmt;

use qrdrop_core::SelectedFile;

/// Stable identity of a page element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ElementId(&'static str);

impl ElementId {
    pub const fn new(id: &'static str) -> Self {
        Self(id)
    }

    pub const fn as_str(&self) -> &'static str {
        self.0
    }
}

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

/// Where default drag/drop handling is switched off.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragScope {
    /// The whole document, so a stray drop cannot navigate away.
    Document,
    Element(ElementId),
}

/// One instruction for the page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewCommand {
    SuppressDragDefaults { scope: DragScope },
    SetVisible { element: ElementId, visible: bool },
    SetEnabled { element: ElementId, enabled: bool },
    SetText { element: ElementId, text: String },
    SetInputValue { element: ElementId, value: String },
    /// `None` unbinds the image.
    SetImageSource {
        element: ElementId,
        source: Option<String>,
    },
    SetClass {
        element: ElementId,
        class: &'static str,
        present: bool,
    },
    OpenFilePicker { element: ElementId },
    ResetFilePicker { element: ElementId },
    WriteClipboard { text: String },
    /// Blocking notification, like `alert`.
    ShowNotification { message: String },
}

/// Input coming from the page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    DragEnter { element: ElementId },
    DragOver { element: ElementId },
    DragLeave { element: ElementId },
    Drop {
        element: ElementId,
        files: Vec<SelectedFile>,
    },
    /// The picker's selection changed.
    FilesChosen {
        element: ElementId,
        files: Vec<SelectedFile>,
    },
    Click { element: ElementId },
}

/// The page the widget draws on.
pub trait ViewSurface {
    /// Applies one frame. The surface must not show an intermediate state
    /// between the first and the last command of `frame`.
    fn apply(&mut self, frame: &[ViewCommand]);
}
