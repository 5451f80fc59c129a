//! SQLite-backed repository for student records.

use std::collections::BTreeSet;

use sqlx::{QueryBuilder, Sqlite, SqlitePool};

use crate::error::StoreError;
use crate::model::{RecordId, StudentRecord};
use crate::traits::RecordStore;

type StudentRow = (i64, Option<String>, Option<String>, f64);

fn row_to_record((id, full_name, student_id, average_grade): StudentRow) -> StudentRecord {
    StudentRecord {
        id,
        full_name,
        student_id,
        average_grade,
    }
}

/// `diemTB` is NOT NULL; SQLite binds NaN as NULL, so catch it up front with a
/// clearer message.
fn check_grade(record: &StudentRecord) -> Result<(), StoreError> {
    if record.average_grade.is_nan() {
        return Err(StoreError::ConstraintViolation(format!(
            "average grade is missing for record {}",
            record.id
        )));
    }
    Ok(())
}

/// SQLite implementation of [`RecordStore`].
pub struct SqliteStudentRepository {
    pool: SqlitePool,
}

impl SqliteStudentRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl RecordStore for SqliteStudentRepository {
    async fn get_all(&self) -> Result<Vec<StudentRecord>, StoreError> {
        let rows: Vec<StudentRow> =
            sqlx::query_as("SELECT uid, hoten, mssv, diemTB FROM StudentModel ORDER BY uid")
                .fetch_all(&self.pool)
                .await?;

        tracing::debug!(count = rows.len(), "Loaded all student records");
        Ok(rows.into_iter().map(row_to_record).collect())
    }

    async fn get_by_ids(&self, ids: &BTreeSet<RecordId>) -> Result<Vec<StudentRecord>, StoreError> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let mut builder: QueryBuilder<Sqlite> =
            QueryBuilder::new("SELECT uid, hoten, mssv, diemTB FROM StudentModel WHERE uid IN (");
        let mut separated = builder.separated(", ");
        for id in ids {
            separated.push_bind(*id);
        }
        separated.push_unseparated(") ORDER BY uid");

        let rows: Vec<StudentRow> = builder.build_query_as().fetch_all(&self.pool).await?;
        Ok(rows.into_iter().map(row_to_record).collect())
    }

    async fn insert(&self, records: &[StudentRecord]) -> Result<(), StoreError> {
        for record in records {
            check_grade(record)?;
        }

        let mut tx = self.pool.begin().await?;
        for record in records {
            // A NULL uid lets SQLite pick the next id.
            let uid = record.is_persisted().then_some(record.id);
            let result = sqlx::query(
                "INSERT INTO StudentModel (uid, hoten, mssv, diemTB) VALUES (?, ?, ?, ?)",
            )
            .bind(uid)
            .bind(&record.full_name)
            .bind(&record.student_id)
            .bind(record.average_grade)
            .execute(&mut *tx)
            .await?;
            tracing::debug!(uid = result.last_insert_rowid(), "Inserted student record");
        }
        tx.commit().await?;

        Ok(())
    }

    async fn update(&self, record: &StudentRecord) -> Result<u64, StoreError> {
        check_grade(record)?;

        let result = sqlx::query(
            "UPDATE StudentModel SET hoten = ?, mssv = ?, diemTB = ? WHERE uid = ?",
        )
        .bind(&record.full_name)
        .bind(&record.student_id)
        .bind(record.average_grade)
        .bind(record.id)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected())
    }

    async fn delete(&self, record: &StudentRecord) -> Result<u64, StoreError> {
        self.delete_by_id(record.id).await
    }

    async fn delete_by_id(&self, id: RecordId) -> Result<u64, StoreError> {
        let result = sqlx::query("DELETE FROM StudentModel WHERE uid = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }
}
