//! View state for the student roster screen.
//!
//! [`RosterState`] holds the cached snapshot of all records, the search query,
//! the multi-selection and the open dialog. It turns user actions into
//! [`roster_store::RecordStore`] calls and reloads its snapshot after every
//! successful mutation.

mod dialog;
mod error;
mod notice;
mod search;
mod state;

pub use dialog::ActiveDialog;
pub use error::{Action, ControllerError};
pub use notice::Notice;
pub use search::matches_query;
pub use state::RosterState;
