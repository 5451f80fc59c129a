use roster_store::{RecordId, RecordStore, StoreError, StudentRecord};

use crate::dialog::ActiveDialog;
use crate::error::{Action, ControllerError};
use crate::notice::Notice;
use crate::search::matches_query;

/// Editable state of the roster screen.
///
/// The store is the source of truth. The controller keeps the latest full
/// snapshot and reloads it after every successful mutation. Each store call
/// is awaited before the next one starts, so a reload never overlaps the
/// write it follows.
pub struct RosterState<S: RecordStore> {
    store: S,

    /// The latest snapshot from the store.
    all_records: Vec<StudentRecord>,
    /// Current search text.
    query: String,
    /// Records picked for bulk delete, compared by full value.
    selected: Vec<StudentRecord>,
    active_dialog: ActiveDialog,
    /// Message from the last action, if any.
    notice: Option<Notice>,
}

impl<S: RecordStore> RosterState<S> {
    /// Create the controller and load the initial snapshot.
    pub async fn new(store: S) -> Result<Self, ControllerError> {
        let mut state = Self {
            store,
            all_records: Vec::new(),
            query: String::new(),
            selected: Vec::new(),
            active_dialog: ActiveDialog::None,
            notice: None,
        };
        state.refresh().await?;
        Ok(state)
    }

    // --- Accessors ---

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn all_records(&self) -> &[StudentRecord] {
        &self.all_records
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn selected(&self) -> &[StudentRecord] {
        &self.selected
    }

    pub fn active_dialog(&self) -> &ActiveDialog {
        &self.active_dialog
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    pub fn dismiss_notice(&mut self) {
        self.notice = None;
    }

    // --- Snapshot and search ---

    /// Replace the snapshot with a fresh read of every record.
    pub async fn refresh(&mut self) -> Result<(), ControllerError> {
        let records = self
            .store
            .get_all()
            .await
            .map_err(|e| self.fail(Action::Load, e))?;
        tracing::debug!(count = records.len(), "Refreshed roster snapshot");
        self.all_records = records;
        Ok(())
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    /// Records from the snapshot that match the current query.
    pub fn visible_records(&self) -> Vec<&StudentRecord> {
        self.all_records
            .iter()
            .filter(|r| matches_query(r, &self.query))
            .collect()
    }

    // --- Selection ---

    pub fn toggle_select(&mut self, record: &StudentRecord) {
        if let Some(pos) = self.selected.iter().position(|r| r == record) {
            self.selected.remove(pos);
        } else {
            self.selected.push(record.clone());
        }
    }

    pub fn is_selected(&self, record: &StudentRecord) -> bool {
        self.selected.contains(record)
    }

    pub fn clear_selection(&mut self) {
        self.selected.clear();
    }

    // --- Dialogs ---

    pub fn request_add(&mut self) {
        self.active_dialog = ActiveDialog::Add;
    }

    pub fn request_edit(&mut self, record: StudentRecord) {
        self.active_dialog = ActiveDialog::Edit(record);
    }

    /// Open the delete confirmation. With nothing selected the dialog stays
    /// as it is and an [`Notice::EmptySelection`] notice is set instead.
    pub fn request_delete(&mut self) {
        if self.selected.is_empty() {
            self.notice = Some(Notice::EmptySelection);
            return;
        }
        self.active_dialog = ActiveDialog::ConfirmDelete;
    }

    /// Close any dialog. The selection is kept.
    pub fn cancel_dialog(&mut self) {
        self.active_dialog = ActiveDialog::None;
    }

    pub async fn confirm_add(
        &mut self,
        full_name: impl Into<String>,
        student_id: impl Into<String>,
    ) -> Result<(), ControllerError> {
        let record = StudentRecord::new(full_name, student_id);

        self.store
            .insert(std::slice::from_ref(&record))
            .await
            .map_err(|e| self.fail(Action::Add, e))?;
        tracing::info!(student_id = ?record.student_id, "Added student");

        self.active_dialog = ActiveDialog::None;
        self.notice = Some(Notice::Added);
        self.refresh().await
    }

    /// Replace every field of record `id`. `None` stores a NULL name or
    /// student id.
    pub async fn confirm_edit(
        &mut self,
        id: RecordId,
        full_name: Option<String>,
        student_id: Option<String>,
        average_grade: f64,
    ) -> Result<(), ControllerError> {
        let record = StudentRecord {
            id,
            full_name,
            student_id,
            average_grade,
        };

        let affected = self
            .store
            .update(&record)
            .await
            .map_err(|e| self.fail(Action::Edit, e))?;
        if affected == 0 {
            tracing::debug!(id, "Edit matched no stored record");
            self.notice = None;
        } else {
            tracing::info!(id, "Updated student");
            self.notice = Some(Notice::Updated);
        }

        self.active_dialog = ActiveDialog::None;
        self.refresh().await
    }

    /// Delete every selected record, one store call each.
    ///
    /// A failure part way through leaves the dialog and selection in place;
    /// records already deleted stay deleted.
    pub async fn confirm_delete(&mut self) -> Result<(), ControllerError> {
        let mut count = 0;
        let mut failure = None;
        for record in &self.selected {
            match self.store.delete(record).await {
                Ok(affected) => count += affected as usize,
                Err(e) => {
                    failure = Some(e);
                    break;
                }
            }
        }
        if let Some(e) = failure {
            return Err(self.fail(Action::Delete, e));
        }
        tracing::info!(count, "Deleted students");

        self.selected.clear();
        self.active_dialog = ActiveDialog::None;
        self.notice = Some(Notice::Deleted { count });
        self.refresh().await
    }

    // --- Failure handling ---

    /// Record a failed store call as a notice and hand back the error.
    fn fail(&mut self, action: Action, source: StoreError) -> ControllerError {
        tracing::warn!(%action, error = %source, "Store call failed");
        self.notice = Some(Notice::StoreFailure {
            action,
            message: source.to_string(),
        });
        ControllerError::store(action, source)
    }
}
