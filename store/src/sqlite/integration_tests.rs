use std::collections::BTreeSet;

use super::{Database, SqliteStudentRepository};
use crate::error::StoreError;
use crate::model::StudentRecord;
use crate::traits::RecordStore;

async fn seeded_repo() -> (Database, SqliteStudentRepository) {
    let db = Database::new_in_memory().await.unwrap();
    let repo = SqliteStudentRepository::new(db.pool().clone());
    repo.insert(&[
        StudentRecord::new("Alice", "SV001"),
        StudentRecord::new("Bob", "SV002"),
        StudentRecord::new("Carol", "SV003"),
    ])
    .await
    .unwrap();
    (db, repo)
}

fn ids(records: &[StudentRecord]) -> BTreeSet<i64> {
    records.iter().map(|r| r.id).collect()
}

#[tokio::test]
async fn get_all_is_fresh_and_repeatable() {
    let (_db, repo) = seeded_repo().await;
    let first = repo.get_all().await.unwrap();
    let second = repo.get_all().await.unwrap();
    assert_eq!(first, second);

    repo.insert(&[StudentRecord::new("Dan", "SV004")])
        .await
        .unwrap();
    let third = repo.get_all().await.unwrap();
    assert_eq!(third.len(), 4);
}

#[tokio::test]
async fn insert_then_read_assigns_new_id() {
    let (_db, repo) = seeded_repo().await;
    let before = ids(&repo.get_all().await.unwrap());

    repo.insert(&[StudentRecord::new("Eve", "SV005")])
        .await
        .unwrap();

    let after = repo.get_all().await.unwrap();
    let added: Vec<&StudentRecord> = after.iter().filter(|r| !before.contains(&r.id)).collect();
    assert_eq!(added.len(), 1);
    let eve = added[0];
    assert_ne!(eve.id, 0);
    assert_eq!(eve.full_name.as_deref(), Some("Eve"));
    assert_eq!(eve.student_id.as_deref(), Some("SV005"));
    assert_eq!(eve.average_grade, 0.0);
}

#[tokio::test]
async fn duplicate_student_ids_are_permitted() {
    let (_db, repo) = seeded_repo().await;
    repo.insert(&[StudentRecord::new("Alice Clone", "SV001")])
        .await
        .unwrap();

    let all = repo.get_all().await.unwrap();
    let sv001: Vec<_> = all
        .iter()
        .filter(|r| r.student_id.as_deref() == Some("SV001"))
        .collect();
    assert_eq!(sv001.len(), 2);
    assert_ne!(sv001[0].id, sv001[1].id);
}

#[tokio::test]
async fn colliding_id_rejects_whole_batch() {
    let (_db, repo) = seeded_repo().await;
    let existing = repo.get_all().await.unwrap();
    let taken = existing[0].id;

    let result = repo
        .insert(&[
            StudentRecord::new("Fresh", "SV100"),
            StudentRecord {
                id: taken,
                ..StudentRecord::new("Collides", "SV101")
            },
        ])
        .await;
    assert!(
        matches!(result, Err(StoreError::ConstraintViolation(_))),
        "expected ConstraintViolation, got {:?}",
        result
    );

    // The first record of the batch must have been rolled back.
    assert_eq!(repo.get_all().await.unwrap(), existing);
}

#[tokio::test]
async fn get_by_ids_omits_unknown_ids() {
    let (_db, repo) = seeded_repo().await;
    let all = repo.get_all().await.unwrap();

    let wanted: BTreeSet<i64> = [all[0].id, all[2].id, 9_999].into_iter().collect();
    let found = repo.get_by_ids(&wanted).await.unwrap();
    assert_eq!(found, vec![all[0].clone(), all[2].clone()]);
}

#[tokio::test]
async fn update_replaces_only_target_row() {
    let (_db, repo) = seeded_repo().await;
    let before = repo.get_all().await.unwrap();
    let bob = before
        .iter()
        .find(|r| r.full_name.as_deref() == Some("Bob"))
        .unwrap()
        .clone();

    let edited = StudentRecord {
        id: bob.id,
        full_name: Some("Robert".to_string()),
        student_id: Some("SV002".to_string()),
        average_grade: 8.5,
    };
    assert_eq!(repo.update(&edited).await.unwrap(), 1);

    let after = repo.get_all().await.unwrap();
    assert_eq!(after.len(), before.len());
    for record in &after {
        if record.id == bob.id {
            assert_eq!(record, &edited);
        } else {
            assert!(before.contains(record));
        }
    }
}

#[tokio::test]
async fn update_missing_id_is_noop() {
    let (_db, repo) = seeded_repo().await;
    let before = repo.get_all().await.unwrap();

    let ghost = StudentRecord {
        id: 9_999,
        ..StudentRecord::new("Ghost", "SV999")
    };
    assert_eq!(repo.update(&ghost).await.unwrap(), 0);
    assert_eq!(repo.get_all().await.unwrap(), before);
}

#[tokio::test]
async fn update_can_clear_optional_fields() {
    let (_db, repo) = seeded_repo().await;
    let mut alice = repo.get_all().await.unwrap().remove(0);
    alice.full_name = None;
    alice.student_id = None;
    repo.update(&alice).await.unwrap();

    let found = repo
        .get_by_ids(&[alice.id].into_iter().collect())
        .await
        .unwrap();
    assert_eq!(found, vec![alice]);
}

#[tokio::test]
async fn delete_and_delete_by_id() {
    let (_db, repo) = seeded_repo().await;
    let all = repo.get_all().await.unwrap();

    assert_eq!(repo.delete(&all[0]).await.unwrap(), 1);
    assert_eq!(repo.delete_by_id(all[1].id).await.unwrap(), 1);

    let remaining = repo.get_all().await.unwrap();
    assert_eq!(remaining, vec![all[2].clone()]);
}

#[tokio::test]
async fn delete_missing_id_is_noop() {
    let (_db, repo) = seeded_repo().await;
    let before = repo.get_all().await.unwrap();

    assert_eq!(repo.delete_by_id(9_999).await.unwrap(), 0);
    let ghost = StudentRecord {
        id: 9_998,
        ..StudentRecord::default()
    };
    assert_eq!(repo.delete(&ghost).await.unwrap(), 0);
    assert_eq!(repo.get_all().await.unwrap(), before);
}

#[tokio::test]
async fn deleted_ids_are_not_reused() {
    let (_db, repo) = seeded_repo().await;
    let all = repo.get_all().await.unwrap();
    let last = all.last().unwrap().id;

    repo.delete_by_id(last).await.unwrap();
    repo.insert(&[StudentRecord::new("Next", "SV010")])
        .await
        .unwrap();

    let newest = repo.get_all().await.unwrap().pop().unwrap();
    assert!(newest.id > last);
}

#[tokio::test]
async fn records_survive_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("student-db.sqlite");

    {
        let db = Database::open(&path).await.unwrap();
        let repo = SqliteStudentRepository::new(db.pool().clone());
        repo.insert(&[StudentRecord::new("Alice", "SV001")])
            .await
            .unwrap();
        db.close().await;
    }

    let db = Database::open(&path).await.unwrap();
    let repo = SqliteStudentRepository::new(db.pool().clone());
    let all = repo.get_all().await.unwrap();
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].full_name.as_deref(), Some("Alice"));
}
