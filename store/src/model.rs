use serde::{Deserialize, Serialize};

/// Identifier assigned by the store. `0` marks a record that has not been
/// persisted yet.
pub type RecordId = i64;

/// A single student row.
///
/// Equality is full-value: two records with identical content but different
/// ids are different records.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct StudentRecord {
    pub id: RecordId,
    pub full_name: Option<String>,
    pub student_id: Option<String>,
    pub average_grade: f64,
}

impl StudentRecord {
    /// Build a transient record (id 0, grade 0) ready for insertion.
    pub fn new(full_name: impl Into<String>, student_id: impl Into<String>) -> Self {
        Self {
            id: 0,
            full_name: Some(full_name.into()),
            student_id: Some(student_id.into()),
            average_grade: 0.0,
        }
    }

    pub fn is_persisted(&self) -> bool {
        self.id != 0
    }

    /// Name for display, empty when absent.
    pub fn full_name_or_empty(&self) -> &str {
        self.full_name.as_deref().unwrap_or("")
    }

    /// Student id for display, empty when absent.
    pub fn student_id_or_empty(&self) -> &str {
        self.student_id.as_deref().unwrap_or("")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_record_is_transient() {
        let r = StudentRecord::new("Alice", "SV001");
        assert_eq!(r.id, 0);
        assert!(!r.is_persisted());
        assert_eq!(r.average_grade, 0.0);
        assert_eq!(r.full_name.as_deref(), Some("Alice"));
    }

    #[test]
    fn equality_includes_id() {
        let a = StudentRecord {
            id: 1,
            ..StudentRecord::new("Alice", "SV001")
        };
        let b = StudentRecord { id: 2, ..a.clone() };
        assert_ne!(a, b);
        assert_eq!(a, a.clone());
    }

    #[test]
    fn missing_fields_display_as_empty() {
        let r = StudentRecord::default();
        assert_eq!(r.full_name_or_empty(), "");
        assert_eq!(r.student_id_or_empty(), "");
    }

    #[test]
    fn serializes_to_json() {
        let r = StudentRecord {
            id: 7,
            full_name: None,
            student_id: Some("SV007".to_string()),
            average_grade: 8.5,
        };
        let json = serde_json::to_string(&r).unwrap();
        let back: StudentRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back, r);
    }
}
