//! Read-through cache for project metadata.
//!
//! Entries are disposable projections of project rows, never authoritative:
//! every write path in [`crate::lifecycle`] invalidates the touched key.
//! Concurrent refreshes on a miss may both load and store the same key;
//! the last writer's TTL wins, which is fine for a pure performance layer.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use sqlx::PgPool;
use tokio::sync::RwLock;

use scribe_core::types::DbId;

use crate::models::project::Project;
use crate::repositories::ProjectRepo;

/// How long a cached project stays fresh.
pub const PROJECT_CACHE_TTL: Duration = Duration::from_secs(12 * 60 * 60);

struct CacheEntry {
    project: Project,
    expires_at: Instant,
}

/// Thread-safe via interior `RwLock`; designed to be wrapped in `Arc` and
/// shared across the application.
pub struct ProjectCache {
    entries: RwLock<HashMap<DbId, CacheEntry>>,
}

impl ProjectCache {
    /// Create a new, empty cache.
    pub fn new() -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
        }
    }

    /// Fetch a project through the cache.
    ///
    /// A fresh cached entry is returned as-is unless `refresh` forces a
    /// reload. On miss (or forced refresh) the row is loaded from the
    /// database; an absent row resolves to `None` without caching a
    /// negative result. Non-positive ids resolve to `None` without any
    /// lookup.
    pub async fn get(
        &self,
        pool: &PgPool,
        project_id: DbId,
        refresh: bool,
    ) -> Result<Option<Project>, sqlx::Error> {
        if project_id <= 0 {
            return Ok(None);
        }

        if !refresh {
            let entries = self.entries.read().await;
            if let Some(entry) = entries.get(&project_id) {
                if entry.expires_at > Instant::now() {
                    return Ok(Some(entry.project.clone()));
                }
            }
        }

        let Some(project) = ProjectRepo::find_by_id(pool, project_id).await? else {
            return Ok(None);
        };

        self.entries.write().await.insert(
            project_id,
            CacheEntry {
                project: project.clone(),
                expires_at: Instant::now() + PROJECT_CACHE_TTL,
            },
        );
        Ok(Some(project))
    }

    /// Drop the cached entry for a project, if any.
    pub async fn invalidate(&self, project_id: DbId) {
        self.entries.write().await.remove(&project_id);
    }

    /// Whether a (possibly expired) entry exists for a project.
    pub async fn contains(&self, project_id: DbId) -> bool {
        self.entries.read().await.contains_key(&project_id)
    }
}

impl Default for ProjectCache {
    fn default() -> Self {
        Self::new()
    }
}
