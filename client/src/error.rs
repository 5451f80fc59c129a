//! Error types for the roster controller

use std::fmt;

use roster_store::StoreError;
use thiserror::Error;

/// User action that triggered a store call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Load,
    Add,
    Edit,
    Delete,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Action::Load => "load students",
            Action::Add => "add student",
            Action::Edit => "edit student",
            Action::Delete => "delete students",
        };
        f.write_str(label)
    }
}

#[derive(Error, Debug)]
pub enum ControllerError {
    #[error("Failed to {action}: {source}")]
    Store {
        action: Action,
        #[source]
        source: StoreError,
    },
}

impl ControllerError {
    pub fn store(action: Action, source: StoreError) -> Self {
        ControllerError::Store { action, source }
    }

    pub fn action(&self) -> Action {
        match self {
            ControllerError::Store { action, .. } => *action,
        }
    }
}
