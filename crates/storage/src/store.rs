//! The record-store seam the group-sorting service depends on.
//!
//! [`crate::repository::matches::MatchRepository`] implements it on Postgres;
//! [`InMemoryMatchStore`] keeps rosters in a map and is what the service
//! tests run against.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::error::{Result, StorageError};
use crate::models::{Groups, Match, MatchRoster};

#[async_trait]
pub trait MatchStore: Send + Sync {
    /// Fetch a match with its registered players.
    async fn get_match(&self, match_id: Uuid) -> Result<MatchRoster>;

    /// Overwrite the stored split of a match.
    async fn save_match_result(&self, match_id: Uuid, groups: &Groups) -> Result<Match>;
}

#[derive(Debug, Default)]
pub struct InMemoryMatchStore {
    rosters: RwLock<HashMap<Uuid, MatchRoster>>,
    fail_writes: AtomicBool,
}

impl InMemoryMatchStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn insert(&self, roster: MatchRoster) {
        self.rosters
            .write()
            .await
            .insert(roster.fixture.match_id, roster);
    }

    /// When set, writes are acknowledged but change nothing.
    pub fn fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }
}

#[async_trait]
impl MatchStore for InMemoryMatchStore {
    async fn get_match(&self, match_id: Uuid) -> Result<MatchRoster> {
        self.rosters
            .read()
            .await
            .get(&match_id)
            .cloned()
            .ok_or(StorageError::NotFound)
    }

    async fn save_match_result(&self, match_id: Uuid, groups: &Groups) -> Result<Match> {
        let mut rosters = self.rosters.write().await;
        let roster = rosters.get_mut(&match_id).ok_or(StorageError::NotFound)?;

        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(StorageError::PersistenceFailure(format!(
                "match {match_id} was not modified"
            )));
        }

        roster.fixture.groups = Some(sqlx::types::Json(groups.clone()));
        Ok(roster.fixture.clone())
    }
}
