//! Integration test for the transactional note cascade on user deletion.

use quill_core::{NoteRepository, UserRepository};
use quill_db::test_fixtures::TestDatabase;

#[tokio::test]
async fn test_deleting_user_cascades_to_notes() {
    let test_db = TestDatabase::new().await;
    let a = test_db.create_user("a@example.com").await;
    let b = test_db.create_user("b@example.com").await;

    let a_note = test_db.create_note(a.id, "A's note").await;
    let b_note = test_db.create_note(b.id, "B's note").await;

    assert!(test_db.db.users.delete(a.id).await.unwrap());

    // A's notes are unreachable through any path.
    assert!(test_db.db.notes.find_by_id(a_note.id).await.unwrap().is_none());
    assert!(test_db.db.notes.find_by_user_id(a.id).await.unwrap().is_empty());
    let page = test_db
        .db
        .notes
        .find_by_user_id_paginated(a.id, 1, 10, None)
        .await
        .unwrap();
    assert_eq!(page.total, 0);

    // B is untouched.
    assert_eq!(
        test_db.db.notes.find_by_id(b_note.id).await.unwrap(),
        Some(b_note)
    );
}

#[tokio::test]
async fn test_user_with_no_notes_deletes_cleanly() {
    let test_db = TestDatabase::new().await;
    let user = test_db.create_user("empty@example.com").await;

    assert!(test_db.db.users.delete(user.id).await.unwrap());
    assert!(test_db.db.users.find_by_id(user.id).await.unwrap().is_none());
}
