use std::collections::HashMap;

use async_trait::async_trait;
use chrono::{NaiveDate, NaiveTime};
use sqlx::types::Json;
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use crate::dto::matches::{CreateMatchRequest, UpdateMatchRequest};
use crate::error::{Result, StorageError};
use crate::models::{Groups, Match, MatchRoster, Player};
use crate::repository::player::PlayerRepository;
use crate::store::MatchStore;

const MATCH_COLUMNS: &str = "match_id, match_date, kickoff_time, location, groups, created_at";

const DUPLICATE_SLOT: &str = "A match is already scheduled at this date and time";

#[derive(FromRow)]
struct ParticipantRow {
    match_id: Uuid,
    #[sqlx(flatten)]
    player: Player,
}

/// Repository for Match database operations
pub struct MatchRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> MatchRepository<'a> {
    /// Create a new MatchRepository
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List all matches with their participants, earliest first
    pub async fn list(&self) -> Result<Vec<MatchRoster>> {
        let matches = sqlx::query_as::<_, Match>(&format!(
            "SELECT {MATCH_COLUMNS} FROM matches ORDER BY match_date, kickoff_time"
        ))
        .fetch_all(self.pool)
        .await?;

        let rows = sqlx::query_as::<_, ParticipantRow>(
            r#"
            SELECT mp.match_id, p.player_id, p.name, p.contact, p.position,
                   p.skill_level, p.created_at
            FROM match_participants mp
            JOIN players p ON p.player_id = mp.player_id
            ORDER BY mp.registered_at, p.name
            "#,
        )
        .fetch_all(self.pool)
        .await?;

        let mut by_match: HashMap<Uuid, Vec<Player>> = HashMap::new();
        for row in rows {
            by_match.entry(row.match_id).or_default().push(row.player);
        }

        Ok(matches
            .into_iter()
            .map(|fixture| MatchRoster {
                participants: by_match.remove(&fixture.match_id).unwrap_or_default(),
                fixture,
            })
            .collect())
    }

    /// Get a match by ID
    pub async fn find_by_id(&self, id: Uuid) -> Result<Match> {
        let fixture = sqlx::query_as::<_, Match>(&format!(
            "SELECT {MATCH_COLUMNS} FROM matches WHERE match_id = $1"
        ))
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        Ok(fixture)
    }

    /// Get a match with its participants
    pub async fn find_roster(&self, id: Uuid) -> Result<MatchRoster> {
        let fixture = self.find_by_id(id).await?;
        let participants = self.participants(id).await?;

        Ok(MatchRoster {
            fixture,
            participants,
        })
    }

    async fn participants(&self, id: Uuid) -> Result<Vec<Player>> {
        let players = sqlx::query_as::<_, Player>(
            r#"
            SELECT p.player_id, p.name, p.contact, p.position, p.skill_level, p.created_at
            FROM match_participants mp
            JOIN players p ON p.player_id = mp.player_id
            WHERE mp.match_id = $1
            ORDER BY mp.registered_at, p.name
            "#,
        )
        .bind(id)
        .fetch_all(self.pool)
        .await?;

        Ok(players)
    }

    /// Create a new match with no saved groups
    pub async fn create(&self, req: &CreateMatchRequest) -> Result<Match> {
        let fixture = sqlx::query_as::<_, Match>(&format!(
            r#"
            INSERT INTO matches (match_date, kickoff_time, location)
            VALUES ($1, $2, $3)
            RETURNING {MATCH_COLUMNS}
            "#
        ))
        .bind(req.match_date)
        .bind(req.kickoff_time)
        .bind(&req.location)
        .fetch_one(self.pool)
        .await
        .map_err(|e| StorageError::from(e).on_unique_violation(DUPLICATE_SLOT))?;

        tracing::debug!(match_id = %fixture.match_id, "match created");
        Ok(fixture)
    }

    /// Update date, time or location of an existing match
    pub async fn update(&self, existing: &Match, req: &UpdateMatchRequest) -> Result<Match> {
        let match_date: NaiveDate = req.match_date.unwrap_or(existing.match_date);
        let kickoff_time: NaiveTime = req.kickoff_time.unwrap_or(existing.kickoff_time);
        let location = req.location.as_ref().unwrap_or(&existing.location);

        let fixture = sqlx::query_as::<_, Match>(&format!(
            r#"
            UPDATE matches
            SET match_date = $2,
                kickoff_time = $3,
                location = $4
            WHERE match_id = $1
            RETURNING {MATCH_COLUMNS}
            "#
        ))
        .bind(existing.match_id)
        .bind(match_date)
        .bind(kickoff_time)
        .bind(location)
        .fetch_optional(self.pool)
        .await
        .map_err(|e| StorageError::from(e).on_unique_violation(DUPLICATE_SLOT))?
        .ok_or(StorageError::NotFound)?;

        tracing::debug!(match_id = %fixture.match_id, "match updated");
        Ok(fixture)
    }

    /// Delete a match by ID, along with its registrations
    pub async fn delete(&self, id: Uuid) -> Result<()> {
        let result = sqlx::query("DELETE FROM matches WHERE match_id = $1")
            .bind(id)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StorageError::NotFound);
        }

        tracing::debug!(match_id = %id, "match deleted");
        Ok(())
    }

    /// Register a player for a match
    pub async fn add_participant(&self, match_id: Uuid, player_id: Uuid) -> Result<MatchRoster> {
        self.find_by_id(match_id).await?;
        PlayerRepository::new(self.pool).find_by_id(player_id).await?;

        sqlx::query("INSERT INTO match_participants (match_id, player_id) VALUES ($1, $2)")
            .bind(match_id)
            .bind(player_id)
            .execute(self.pool)
            .await
            .map_err(|e| {
                StorageError::from(e)
                    .on_unique_violation("Player is already registered for this match")
                    .on_foreign_key_violation()
            })?;

        tracing::debug!(%match_id, %player_id, "player registered");
        self.find_roster(match_id).await
    }

    /// Remove a player from a match
    pub async fn remove_participant(&self, match_id: Uuid, player_id: Uuid) -> Result<()> {
        let result =
            sqlx::query("DELETE FROM match_participants WHERE match_id = $1 AND player_id = $2")
                .bind(match_id)
                .bind(player_id)
                .execute(self.pool)
                .await?;

        if result.rows_affected() == 0 {
            return Err(StorageError::NotFound);
        }

        tracing::debug!(%match_id, %player_id, "player unregistered");
        Ok(())
    }

    /// Overwrite the saved groups of a match
    pub async fn save_groups(&self, match_id: Uuid, groups: &Groups) -> Result<Match> {
        self.find_by_id(match_id).await?;

        let fixture = sqlx::query_as::<_, Match>(&format!(
            r#"
            UPDATE matches
            SET groups = $2
            WHERE match_id = $1
            RETURNING {MATCH_COLUMNS}
            "#
        ))
        .bind(match_id)
        .bind(Json(groups))
        .fetch_optional(self.pool)
        .await?
        .ok_or_else(|| {
            StorageError::PersistenceFailure(format!("match {match_id} was not modified"))
        })?;

        tracing::debug!(%match_id, players = groups.len(), "groups saved");
        Ok(fixture)
    }
}

#[async_trait]
impl<'a> MatchStore for MatchRepository<'a> {
    async fn get_match(&self, match_id: Uuid) -> Result<MatchRoster> {
        self.find_roster(match_id).await
    }

    async fn save_match_result(&self, match_id: Uuid, groups: &Groups) -> Result<Match> {
        self.save_groups(match_id, groups).await
    }
}
