//! Mock RecordStore implementation for testing

use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::sync::{Arc, Mutex};

use crate::error::StoreError;
use crate::model::{RecordId, StudentRecord};
use crate::traits::RecordStore;

/// In-memory store with the same conflict and no-op rules as the SQLite
/// backend - only compiled in test mode or with the mock feature.
///
/// Clones share state, so a test can keep a handle after moving one into
/// the controller.
#[derive(Clone, Default)]
pub struct MockRecordStore {
    inner: Arc<Mutex<MockState>>,
}

#[derive(Default)]
struct MockState {
    rows: BTreeMap<RecordId, StudentRecord>,
    last_id: RecordId,
    call_log: Vec<MockCall>,
    failures: HashMap<StoreOp, StoreError>,
}

/// Store operation kinds, used to target injected failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StoreOp {
    GetAll,
    GetByIds,
    Insert,
    Update,
    Delete,
    DeleteById,
}

#[derive(Debug, Clone, PartialEq)]
pub enum MockCall {
    GetAll,
    GetByIds { ids: BTreeSet<RecordId> },
    Insert { records: Vec<StudentRecord> },
    Update { record: StudentRecord },
    Delete { record: StudentRecord },
    DeleteById { id: RecordId },
}

impl MockRecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate with records. Records with id 0 get the next free id.
    pub fn with_records(self, records: impl IntoIterator<Item = StudentRecord>) -> Self {
        {
            let mut state = self.inner.lock().unwrap();
            for record in records {
                state.put(record);
            }
        }
        self
    }

    /// Make the next call of `op` fail with `error`.
    pub fn fail_next(&self, op: StoreOp, error: StoreError) {
        self.inner.lock().unwrap().failures.insert(op, error);
    }

    /// Current contents, ordered by id.
    pub fn records(&self) -> Vec<StudentRecord> {
        self.inner.lock().unwrap().rows.values().cloned().collect()
    }

    pub fn calls(&self) -> Vec<MockCall> {
        self.inner.lock().unwrap().call_log.clone()
    }

    pub fn clear_calls(&self) {
        self.inner.lock().unwrap().call_log.clear();
    }

    /// Log the call and return the injected failure for `op`, if any.
    fn begin(&self, op: StoreOp, call: MockCall) -> Result<std::sync::MutexGuard<'_, MockState>, StoreError> {
        let mut state = self.inner.lock().unwrap();
        state.call_log.push(call);
        match state.failures.remove(&op) {
            Some(err) => Err(err),
            None => Ok(state),
        }
    }
}

impl MockState {
    fn put(&mut self, mut record: StudentRecord) -> RecordId {
        if record.id == 0 {
            record.id = self.last_id + 1;
        }
        self.last_id = self.last_id.max(record.id);
        let id = record.id;
        self.rows.insert(id, record);
        id
    }
}

impl RecordStore for MockRecordStore {
    async fn get_all(&self) -> Result<Vec<StudentRecord>, StoreError> {
        let state = self.begin(StoreOp::GetAll, MockCall::GetAll)?;
        Ok(state.rows.values().cloned().collect())
    }

    async fn get_by_ids(&self, ids: &BTreeSet<RecordId>) -> Result<Vec<StudentRecord>, StoreError> {
        let state = self.begin(StoreOp::GetByIds, MockCall::GetByIds { ids: ids.clone() })?;
        Ok(ids.iter().filter_map(|id| state.rows.get(id).cloned()).collect())
    }

    async fn insert(&self, records: &[StudentRecord]) -> Result<(), StoreError> {
        let mut state = self.begin(
            StoreOp::Insert,
            MockCall::Insert {
                records: records.to_vec(),
            },
        )?;

        // Validate the whole batch first so a failure leaves no partial insert.
        let mut incoming = BTreeSet::new();
        for record in records {
            if record.average_grade.is_nan() {
                return Err(StoreError::ConstraintViolation(
                    "NOT NULL constraint failed: StudentModel.diemTB".to_string(),
                ));
            }
            if record.id != 0 && (state.rows.contains_key(&record.id) || !incoming.insert(record.id)) {
                return Err(StoreError::ConstraintViolation(
                    "UNIQUE constraint failed: StudentModel.uid".to_string(),
                ));
            }
        }

        for record in records {
            state.put(record.clone());
        }
        Ok(())
    }

    async fn update(&self, record: &StudentRecord) -> Result<u64, StoreError> {
        let mut state = self.begin(
            StoreOp::Update,
            MockCall::Update {
                record: record.clone(),
            },
        )?;
        if record.average_grade.is_nan() {
            return Err(StoreError::ConstraintViolation(
                "NOT NULL constraint failed: StudentModel.diemTB".to_string(),
            ));
        }
        match state.rows.get_mut(&record.id) {
            Some(row) => {
                *row = record.clone();
                Ok(1)
            }
            None => Ok(0),
        }
    }

    async fn delete(&self, record: &StudentRecord) -> Result<u64, StoreError> {
        let mut state = self.begin(
            StoreOp::Delete,
            MockCall::Delete {
                record: record.clone(),
            },
        )?;
        Ok(state.rows.remove(&record.id).map_or(0, |_| 1))
    }

    async fn delete_by_id(&self, id: RecordId) -> Result<u64, StoreError> {
        let mut state = self.begin(StoreOp::DeleteById, MockCall::DeleteById { id })?;
        Ok(state.rows.remove(&id).map_or(0, |_| 1))
    }
}
