use std::fmt;

use crate::error::Action;

/// A user-visible, non-fatal message produced by the last action.
#[derive(Debug, Clone, PartialEq)]
pub enum Notice {
    Added,
    Updated,
    Deleted { count: usize },
    /// Delete was requested with nothing selected.
    EmptySelection,
    StoreFailure { action: Action, message: String },
}

impl Notice {
    pub fn is_error(&self) -> bool {
        matches!(self, Notice::StoreFailure { .. })
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Notice::Added => write!(f, "Student added"),
            Notice::Updated => write!(f, "Student updated"),
            Notice::Deleted { count: 1 } => write!(f, "Deleted 1 student"),
            Notice::Deleted { count } => write!(f, "Deleted {} students", count),
            Notice::EmptySelection => write!(f, "No students selected"),
            Notice::StoreFailure { action, message } => {
                write!(f, "Could not {}: {}", action, message)
            }
        }
    }
}
