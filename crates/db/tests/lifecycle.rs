//! Integration tests for the project lifecycle.
//!
//! Exercises the validate-then-persist save path and the cascading delete
//! against a real database:
//! - owner relationship staged atomically with project creation
//! - password normalization on state changes
//! - stable validation codes rejected before any write
//! - cascade delete removing documents, history, relationships, project
//! - full rollback when a cascade step fails mid-transaction
//! - not-found on absent and repeated deletes

use assert_matches::assert_matches;
use sqlx::PgPool;

use scribe_core::error::{codes, CoreError};
use scribe_core::membership::roles;
use scribe_core::project::ProjectDraft;
use scribe_db::cache::ProjectCache;
use scribe_db::error::DbError;
use scribe_db::lifecycle;
use scribe_db::models::document::CreateDocument;
use scribe_db::repositories::{
    DocumentHistoryRepo, DocumentRepo, ProjectRepo, RelationshipRepo,
};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn new_draft(name: &str, visibility: i16, password: Option<&str>, creator_id: i64) -> ProjectDraft {
    ProjectDraft {
        id: None,
        name: name.to_string(),
        description: None,
        visibility,
        password: password.map(str::to_string),
        creator_id,
    }
}

fn new_document(project_id: i64, name: &str, parent_id: i64) -> CreateDocument {
    CreateDocument {
        project_id,
        name: name.to_string(),
        parent_id: Some(parent_id),
        sort_order: None,
    }
}

async fn count(pool: &PgPool, query: &str, id: i64) -> i64 {
    sqlx::query_scalar(query).bind(id).fetch_one(pool).await.unwrap()
}

// ---------------------------------------------------------------------------
// Create / update
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../migrations")]
async fn create_stages_owner_relationship(pool: PgPool) {
    let cache = ProjectCache::new();
    let project = lifecycle::save(&pool, &cache, &new_draft("Handbook", 0, None, 7))
        .await
        .unwrap();

    assert!(project.id > 0);
    assert_eq!(project.created_by, 7);

    // The staged relationship was backfilled with the assigned project id.
    let rel = RelationshipRepo::find_by_project_and_member(&pool, project.id, 7)
        .await
        .unwrap()
        .expect("owner relationship should exist");
    assert_eq!(rel.role, roles::OWNER);
}

#[sqlx::test(migrations = "../../migrations")]
async fn update_does_not_stage_another_relationship(pool: PgPool) {
    let cache = ProjectCache::new();
    let project = lifecycle::save(&pool, &cache, &new_draft("Handbook", 0, None, 7))
        .await
        .unwrap();

    let mut draft = new_draft("Renamed handbook", 0, None, 7);
    draft.id = Some(project.id);
    let updated = lifecycle::save(&pool, &cache, &draft).await.unwrap();

    assert_eq!(updated.id, project.id);
    assert_eq!(updated.name, "Renamed handbook");
    assert_eq!(
        RelationshipRepo::count_by_project(&pool, project.id).await.unwrap(),
        1
    );
}

#[sqlx::test(migrations = "../../migrations")]
async fn password_cleared_when_leaving_protected_state(pool: PgPool) {
    let cache = ProjectCache::new();
    let project = lifecycle::save(&pool, &cache, &new_draft("Secrets", 2, Some("hunter22"), 7))
        .await
        .unwrap();
    assert_eq!(project.password.as_deref(), Some("hunter22"));

    // Going public drops the password even when the caller still sends one.
    let mut draft = new_draft("Secrets", 1, Some("hunter22"), 7);
    draft.id = Some(project.id);
    lifecycle::save(&pool, &cache, &draft).await.unwrap();

    let stored = ProjectRepo::find_by_id(&pool, project.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(stored.visibility, 1);
    assert_eq!(stored.password, None);
}

#[sqlx::test(migrations = "../../migrations")]
async fn validation_rejects_before_any_write(pool: PgPool) {
    let cache = ProjectCache::new();

    let err = lifecycle::save(&pool, &cache, &new_draft("a", 0, None, 7))
        .await
        .unwrap_err();
    assert_matches!(&err, DbError::Core(CoreError::Validation { .. }));
    assert_eq!(err.code(), codes::NAME_LENGTH);

    let err = lifecycle::save(&pool, &cache, &new_draft(&"x".repeat(51), 0, None, 7))
        .await
        .unwrap_err();
    assert_eq!(err.code(), codes::NAME_LENGTH);

    let err = lifecycle::save(&pool, &cache, &new_draft("Handbook", 5, None, 7))
        .await
        .unwrap_err();
    assert_eq!(err.code(), codes::INVALID_VISIBILITY);

    let err = lifecycle::save(&pool, &cache, &new_draft("Handbook", 2, Some("short"), 7))
        .await
        .unwrap_err();
    assert_eq!(err.code(), codes::PASSWORD_LENGTH);

    // Nothing was written by any of the rejected drafts.
    let projects: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM projects")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(projects, 0);
}

#[sqlx::test(migrations = "../../migrations")]
async fn name_length_boundaries_accepted(pool: PgPool) {
    let cache = ProjectCache::new();
    lifecycle::save(&pool, &cache, &new_draft("ab", 0, None, 7))
        .await
        .unwrap();
    lifecycle::save(&pool, &cache, &new_draft(&"x".repeat(50), 0, None, 7))
        .await
        .unwrap();
}

#[sqlx::test(migrations = "../../migrations")]
async fn update_of_missing_project_is_not_found(pool: PgPool) {
    let cache = ProjectCache::new();
    let mut draft = new_draft("Handbook", 0, None, 7);
    draft.id = Some(9999);

    let err = lifecycle::save(&pool, &cache, &draft).await.unwrap_err();
    assert_matches!(&err, DbError::Core(CoreError::NotFound { .. }));
    assert_eq!(err.code(), codes::PROJECT_NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Cascading delete
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../migrations")]
async fn cascading_delete_removes_all_dependents(pool: PgPool) {
    let cache = ProjectCache::new();
    let project = lifecycle::save(&pool, &cache, &new_draft("Doomed", 0, None, 7))
        .await
        .unwrap();
    RelationshipRepo::create(&pool, project.id, 8, roles::PARTICIPANT)
        .await
        .unwrap();

    let root = DocumentRepo::create(&pool, &new_document(project.id, "Root", 0))
        .await
        .unwrap();
    let child = DocumentRepo::create(&pool, &new_document(project.id, "Child", root.id))
        .await
        .unwrap();
    DocumentRepo::create(&pool, &new_document(project.id, "Sibling", 0))
        .await
        .unwrap();
    DocumentHistoryRepo::create(&pool, root.id, Some("v1"), 7).await.unwrap();
    DocumentHistoryRepo::create(&pool, root.id, Some("v2"), 7).await.unwrap();
    DocumentHistoryRepo::create(&pool, child.id, Some("v1"), 8).await.unwrap();

    // An unrelated project must survive the cascade untouched.
    let other = lifecycle::save(&pool, &cache, &new_draft("Bystander", 0, None, 9))
        .await
        .unwrap();
    let other_doc = DocumentRepo::create(&pool, &new_document(other.id, "Kept", 0))
        .await
        .unwrap();
    DocumentHistoryRepo::create(&pool, other_doc.id, None, 9).await.unwrap();

    lifecycle::delete_by_project_id(&pool, &cache, project.id)
        .await
        .unwrap();

    assert_eq!(count(&pool, "SELECT COUNT(*) FROM projects WHERE id = $1", project.id).await, 0);
    assert_eq!(
        count(&pool, "SELECT COUNT(*) FROM documents WHERE project_id = $1", project.id).await,
        0
    );
    assert_eq!(
        count(&pool, "SELECT COUNT(*) FROM relationships WHERE project_id = $1", project.id).await,
        0
    );
    assert!(DocumentRepo::find_by_id(&pool, root.id).await.unwrap().is_none());
    assert!(DocumentHistoryRepo::list_by_doc(&pool, root.id).await.unwrap().is_empty());
    assert!(DocumentHistoryRepo::list_by_doc(&pool, child.id).await.unwrap().is_empty());

    assert!(ProjectRepo::find_by_id(&pool, other.id).await.unwrap().is_some());
    assert_eq!(
        count(&pool, "SELECT COUNT(*) FROM documents WHERE project_id = $1", other.id).await,
        1
    );
    assert_eq!(
        count(&pool, "SELECT COUNT(*) FROM document_histories WHERE doc_id = $1", other_doc.id).await,
        1
    );
}

#[sqlx::test(migrations = "../../migrations")]
async fn failed_cascade_rolls_back_every_delete(pool: PgPool) {
    let cache = ProjectCache::new();
    let project = lifecycle::save(&pool, &cache, &new_draft("Sturdy", 0, None, 7))
        .await
        .unwrap();
    let root = DocumentRepo::create(&pool, &new_document(project.id, "Root", 0))
        .await
        .unwrap();
    DocumentRepo::create(&pool, &new_document(project.id, "Child", root.id))
        .await
        .unwrap();
    DocumentHistoryRepo::create(&pool, root.id, Some("v1"), 7).await.unwrap();

    // Make the relationship step blow up mid-transaction, after the
    // document and history deletes have already executed.
    sqlx::query(
        r#"
        CREATE FUNCTION refuse_relationship_delete() RETURNS trigger AS $t$
        BEGIN
            RAISE EXCEPTION 'relationship deletes disabled';
        END;
        $t$ LANGUAGE plpgsql
        "#,
    )
    .execute(&pool)
    .await
    .unwrap();
    sqlx::query(
        "CREATE TRIGGER refuse_relationship_delete
         BEFORE DELETE ON relationships
         FOR EACH ROW EXECUTE FUNCTION refuse_relationship_delete()",
    )
    .execute(&pool)
    .await
    .unwrap();

    let err = lifecycle::delete_by_project_id(&pool, &cache, project.id)
        .await
        .unwrap_err();
    assert_matches!(err, DbError::Persistence(_));

    // The whole cascade rolled back, including the steps that succeeded.
    assert_eq!(count(&pool, "SELECT COUNT(*) FROM projects WHERE id = $1", project.id).await, 1);
    assert_eq!(
        count(&pool, "SELECT COUNT(*) FROM documents WHERE project_id = $1", project.id).await,
        2
    );
    assert_eq!(
        count(&pool, "SELECT COUNT(*) FROM document_histories WHERE doc_id = $1", root.id).await,
        1
    );
    assert_eq!(
        count(&pool, "SELECT COUNT(*) FROM relationships WHERE project_id = $1", project.id).await,
        1
    );

    // Once the fault is cleared the same delete goes through.
    sqlx::query("DROP TRIGGER refuse_relationship_delete ON relationships")
        .execute(&pool)
        .await
        .unwrap();
    lifecycle::delete_by_project_id(&pool, &cache, project.id)
        .await
        .unwrap();
    assert!(ProjectRepo::find_by_id(&pool, project.id).await.unwrap().is_none());
}

#[sqlx::test(migrations = "../../migrations")]
async fn delete_without_documents(pool: PgPool) {
    let cache = ProjectCache::new();
    let project = lifecycle::save(&pool, &cache, &new_draft("Empty", 0, None, 7))
        .await
        .unwrap();

    lifecycle::delete_by_project_id(&pool, &cache, project.id)
        .await
        .unwrap();
    assert!(ProjectRepo::find_by_id(&pool, project.id).await.unwrap().is_none());
}

#[sqlx::test(migrations = "../../migrations")]
async fn delete_of_absent_project_is_not_found(pool: PgPool) {
    let cache = ProjectCache::new();
    let err = lifecycle::delete_by_project_id(&pool, &cache, 4242)
        .await
        .unwrap_err();
    assert_eq!(err.code(), codes::PROJECT_NOT_FOUND);
}

#[sqlx::test(migrations = "../../migrations")]
async fn repeated_delete_stays_not_found(pool: PgPool) {
    let cache = ProjectCache::new();
    let project = lifecycle::save(&pool, &cache, &new_draft("Once", 0, None, 7))
        .await
        .unwrap();

    lifecycle::delete_by_project_id(&pool, &cache, project.id)
        .await
        .unwrap();
    let err = lifecycle::delete_by_project_id(&pool, &cache, project.id)
        .await
        .unwrap_err();
    assert_eq!(err.code(), codes::PROJECT_NOT_FOUND);
}
