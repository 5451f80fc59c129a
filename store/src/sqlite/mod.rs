//! SQLite-backed record store.
//!
//! ## Database setup
//!
//! [`Database`] wraps a `sqlx::SqlitePool` configured with:
//! - **WAL mode**: one writer, concurrent readers.
//! - **Embedded migrations**: `sqlx::migrate!` runs `migrations/001_student_model.sql`
//!   when [`Database::open`] is called. Schema version 1, no later migrations.
//!
//! ## Repository
//!
//! [`SqliteStudentRepository`] holds a `SqlitePool` and implements
//! [`crate::RecordStore`] over the `StudentModel` table
//! (`uid`, `hoten`, `mssv`, `diemTB`).

mod database;
mod student_repo;
#[cfg(test)]
mod integration_tests;

pub use database::Database;
pub use student_repo::SqliteStudentRepository;
