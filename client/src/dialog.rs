use roster_store::StudentRecord;

/// The modal dialog currently shown. At most one is open at a time; a new
/// request replaces whatever was open.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ActiveDialog {
    #[default]
    None,
    Add,
    /// Editing a copy of the record as it was when the dialog opened.
    Edit(StudentRecord),
    ConfirmDelete,
}

impl ActiveDialog {
    pub fn is_open(&self) -> bool {
        !matches!(self, ActiveDialog::None)
    }

    /// The record under edit, if the edit dialog is open.
    pub fn editing(&self) -> Option<&StudentRecord> {
        match self {
            ActiveDialog::Edit(record) => Some(record),
            _ => None,
        }
    }
}
