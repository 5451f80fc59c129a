//! Durable storage for student records.
//!
//! Exposes the [`RecordStore`] trait, its SQLite implementation and, behind
//! the `mock` feature, a scriptable in-memory store for controller tests.
//!
//! # Example
//!
//! ```no_run
//! use roster_store::{Database, RecordStore, SqliteStudentRepository, StudentRecord};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let db = Database::open(std::path::Path::new("student-db.sqlite")).await?;
//!     let repo = SqliteStudentRepository::new(db.pool().clone());
//!     repo.insert(&[StudentRecord::new("Alice", "SV001")]).await?;
//!     println!("{} records", repo.get_all().await?.len());
//!     Ok(())
//! }
//! ```

mod error;
#[cfg(any(test, feature = "mock"))]
mod mock;
mod model;
pub mod sqlite;
mod traits;

pub use error::{StoreError, StoreResult};
#[cfg(any(test, feature = "mock"))]
pub use mock::{MockCall, MockRecordStore, StoreOp};
pub use model::{RecordId, StudentRecord};
pub use sqlite::{Database, SqliteStudentRepository};
pub use traits::RecordStore;
