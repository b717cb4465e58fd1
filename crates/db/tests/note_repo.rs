//! Integration tests for the notes repository and the Postgres store.
//!
//! These need a reachable Postgres (`DATABASE_URL`); run them with
//! `cargo test -p notes-db -- --ignored`.

use assert_matches::assert_matches;
use notes_core::error::CoreError;
use notes_core::note::{CreateNote, UpdateNote};
use notes_core::store::NoteStore;
use notes_db::repositories::NoteRepo;
use notes_db::PgNoteStore;
use sqlx::PgPool;

fn new_note(title: &str, content: Option<&str>) -> CreateNote {
    CreateNote::new(title, content.map(str::to_string))
}

// ---------------------------------------------------------------------------
// Repository
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
#[ignore = "requires DATABASE_URL"]
async fn create_assigns_id_and_defaults(pool: PgPool) {
    let row = NoteRepo::create(&pool, &new_note("T", Some("C")))
        .await
        .unwrap();

    assert!(!row.id.is_empty());
    assert_eq!(row.title, "T");
    assert_eq!(row.content.as_deref(), Some("C"));
    assert!(!row.completed);
    assert!(row.created_at <= row.updated_at);

    let found = NoteRepo::find_by_id(&pool, &row.id).await.unwrap();
    assert_eq!(found.map(|r| r.id), Some(row.id));
}

#[sqlx::test(migrations = "../../db/migrations")]
#[ignore = "requires DATABASE_URL"]
async fn create_without_title_violates_not_null(pool: PgPool) {
    let result = NoteRepo::create(&pool, &CreateNote::default()).await;
    assert_matches!(result, Err(sqlx::Error::Database(_)));
}

#[sqlx::test(migrations = "../../db/migrations")]
#[ignore = "requires DATABASE_URL"]
async fn list_returns_oldest_first(pool: PgPool) {
    for title in ["a", "b", "c"] {
        NoteRepo::create(&pool, &new_note(title, None)).await.unwrap();
    }

    let titles: Vec<_> = NoteRepo::list(&pool)
        .await
        .unwrap()
        .into_iter()
        .map(|r| r.title)
        .collect();
    assert_eq!(titles, ["a", "b", "c"]);
}

#[sqlx::test(migrations = "../../db/migrations")]
#[ignore = "requires DATABASE_URL"]
async fn update_keeps_absent_fields_and_clears_null_content(pool: PgPool) {
    let row = NoteRepo::create(&pool, &new_note("T", Some("C")))
        .await
        .unwrap();

    let toggled = NoteRepo::update(&pool, &row.id, &UpdateNote::completed(true))
        .await
        .unwrap()
        .unwrap();
    assert!(toggled.completed);
    assert_eq!(toggled.title, "T");
    assert_eq!(toggled.content.as_deref(), Some("C"));
    assert!(toggled.updated_at >= row.updated_at);

    let cleared = UpdateNote {
        content: Some(None),
        ..UpdateNote::default()
    };
    let cleared = NoteRepo::update(&pool, &row.id, &cleared)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(cleared.content, None);
    assert!(cleared.completed);
}

#[sqlx::test(migrations = "../../db/migrations")]
#[ignore = "requires DATABASE_URL"]
async fn update_unknown_id_returns_none(pool: PgPool) {
    let result = NoteRepo::update(&pool, "missing", &UpdateNote::completed(true))
        .await
        .unwrap();
    assert!(result.is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
#[ignore = "requires DATABASE_URL"]
async fn delete_reports_whether_a_row_was_removed(pool: PgPool) {
    let row = NoteRepo::create(&pool, &new_note("T", None)).await.unwrap();

    assert!(NoteRepo::delete(&pool, &row.id).await.unwrap());
    assert!(!NoteRepo::delete(&pool, &row.id).await.unwrap());
}

// ---------------------------------------------------------------------------
// Store
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
#[ignore = "requires DATABASE_URL"]
async fn store_maps_missing_rows_to_not_found(pool: PgPool) {
    let store = PgNoteStore::new(pool);

    assert_matches!(
        store
            .update_by_id("missing", &UpdateNote::completed(true))
            .await,
        Err(CoreError::NotFound { .. })
    );
    assert_matches!(
        store.delete_by_id("missing").await,
        Err(CoreError::NotFound { .. })
    );
}

#[sqlx::test(migrations = "../../db/migrations")]
#[ignore = "requires DATABASE_URL"]
async fn store_maps_constraint_violation_to_internal(pool: PgPool) {
    let store = PgNoteStore::new(pool);

    assert_matches!(
        store.insert(&CreateNote::default()).await,
        Err(CoreError::Internal(_))
    );
    store.health_check().await.unwrap();
}
