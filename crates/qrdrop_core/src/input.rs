use crate::SelectedFile;

/// Where a candidate file came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputChannel {
    /// Dropped onto the drop target.
    DragDrop,
    /// Chosen in the file-picker dialog.
    Picker,
}

/// Reduces an offered file set to the single candidate the widget accepts.
///
/// Only the first file is kept; an empty set yields no candidate.
pub fn first_candidate<I>(files: I) -> Option<SelectedFile>
where
    I: IntoIterator<Item = SelectedFile>,
{
    files.into_iter().next()
}
