//! Integration tests for the read-through project cache.

use sqlx::PgPool;

use scribe_core::project::ProjectDraft;
use scribe_db::cache::ProjectCache;
use scribe_db::lifecycle;

async fn seed_project(pool: &PgPool, cache: &ProjectCache, name: &str) -> i64 {
    let draft = ProjectDraft {
        id: None,
        name: name.to_string(),
        description: None,
        visibility: 1,
        password: None,
        creator_id: 7,
    };
    lifecycle::save(pool, cache, &draft).await.unwrap().id
}

#[sqlx::test(migrations = "../../migrations")]
async fn read_through_populates_on_miss(pool: PgPool) {
    let cache = ProjectCache::new();
    let id = seed_project(&pool, &cache, "Handbook").await;
    assert!(!cache.contains(id).await);

    let project = cache.get(&pool, id, false).await.unwrap().unwrap();
    assert_eq!(project.name, "Handbook");
    assert!(cache.contains(id).await);
}

#[sqlx::test(migrations = "../../migrations")]
async fn absent_row_is_not_cached(pool: PgPool) {
    let cache = ProjectCache::new();
    assert!(cache.get(&pool, 4242, false).await.unwrap().is_none());
    assert!(!cache.contains(4242).await);
}

#[sqlx::test(migrations = "../../migrations")]
async fn non_positive_id_skips_lookup(pool: PgPool) {
    let cache = ProjectCache::new();
    assert!(cache.get(&pool, 0, false).await.unwrap().is_none());
    assert!(cache.get(&pool, -3, false).await.unwrap().is_none());
}

#[sqlx::test(migrations = "../../migrations")]
async fn hit_serves_cached_value_until_refresh_or_invalidation(pool: PgPool) {
    let cache = ProjectCache::new();
    let id = seed_project(&pool, &cache, "Original").await;
    cache.get(&pool, id, false).await.unwrap().unwrap();

    // A write that bypasses the lifecycle leaves the cache stale.
    sqlx::query("UPDATE projects SET name = 'Renamed' WHERE id = $1")
        .bind(id)
        .execute(&pool)
        .await
        .unwrap();

    let cached = cache.get(&pool, id, false).await.unwrap().unwrap();
    assert_eq!(cached.name, "Original");

    // Forced refresh reloads from the database.
    let fresh = cache.get(&pool, id, true).await.unwrap().unwrap();
    assert_eq!(fresh.name, "Renamed");

    // Invalidation clears the entry so the next read loads again.
    sqlx::query("UPDATE projects SET name = 'Renamed again' WHERE id = $1")
        .bind(id)
        .execute(&pool)
        .await
        .unwrap();
    cache.invalidate(id).await;
    assert!(!cache.contains(id).await);
    let reloaded = cache.get(&pool, id, false).await.unwrap().unwrap();
    assert_eq!(reloaded.name, "Renamed again");
}

#[sqlx::test(migrations = "../../migrations")]
async fn lifecycle_writes_invalidate_the_cache(pool: PgPool) {
    let cache = ProjectCache::new();
    let id = seed_project(&pool, &cache, "Before").await;
    cache.get(&pool, id, false).await.unwrap().unwrap();

    let draft = ProjectDraft {
        id: Some(id),
        name: "After".to_string(),
        description: None,
        visibility: 1,
        password: None,
        creator_id: 7,
    };
    lifecycle::save(&pool, &cache, &draft).await.unwrap();

    let project = cache.get(&pool, id, false).await.unwrap().unwrap();
    assert_eq!(project.name, "After");

    lifecycle::delete_by_project_id(&pool, &cache, id).await.unwrap();
    assert!(cache.get(&pool, id, false).await.unwrap().is_none());
}
