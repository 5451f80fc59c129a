//! Async repository trait for student records.
//!
//! The controller is generic over [`RecordStore`], so the SQLite backend and
//! the in-memory mock are used interchangeably via static dispatch.
//!
//! Methods return `impl Future + Send` rather than using `async fn` so the
//! `Send` bound is part of the signature. A controller generic over the
//! store then produces `Send` futures of its own, whichever backend it wraps.

use std::collections::BTreeSet;
use std::future::Future;

use crate::error::StoreError;
use crate::model::{RecordId, StudentRecord};

/// Durable CRUD over the `StudentModel` table.
///
/// Every call is atomic on its own. `update` and the deletes report the
/// number of rows they touched; `0` means the id was not found, which is a
/// no-op rather than an error.
pub trait RecordStore: Send + Sync {
    /// All records, read fresh on every call.
    fn get_all(&self) -> impl Future<Output = Result<Vec<StudentRecord>, StoreError>> + Send;

    /// Records whose id is in `ids`. Unknown ids are omitted.
    fn get_by_ids(
        &self,
        ids: &BTreeSet<RecordId>,
    ) -> impl Future<Output = Result<Vec<StudentRecord>, StoreError>> + Send;

    /// Insert one or more records in a single transaction.
    ///
    /// Records with id `0` receive a fresh id. A non-zero id is kept as given
    /// and rejected with [`StoreError::ConstraintViolation`] if it is taken.
    fn insert(
        &self,
        records: &[StudentRecord],
    ) -> impl Future<Output = Result<(), StoreError>> + Send;

    /// Overwrite every field of the row with `record.id`.
    fn update(
        &self,
        record: &StudentRecord,
    ) -> impl Future<Output = Result<u64, StoreError>> + Send;

    /// Delete the row with `record.id`. Other fields are ignored.
    fn delete(
        &self,
        record: &StudentRecord,
    ) -> impl Future<Output = Result<u64, StoreError>> + Send;

    fn delete_by_id(&self, id: RecordId) -> impl Future<Output = Result<u64, StoreError>> + Send;
}
