use sqlx::PgPool;
use uuid::Uuid;

use crate::dto::player::{CreatePlayerRequest, PlayerFilter, UpdatePlayerRequest};
use crate::error::{Result, StorageError};
use crate::models::Player;

const PLAYER_COLUMNS: &str = "player_id, name, contact, position, skill_level, created_at";

const DUPLICATE_PLAYER: &str = "A player with this name and contact already exists";

/// Repository for Player database operations
pub struct PlayerRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> PlayerRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List players, optionally only those with an exact name
    pub async fn list(&self, filter: &PlayerFilter) -> Result<Vec<Player>> {
        let players = sqlx::query_as::<_, Player>(&format!(
            r#"
            SELECT {PLAYER_COLUMNS}
            FROM players
            WHERE ($1::text IS NULL OR name = $1)
            ORDER BY name, contact
            "#
        ))
        .bind(filter.name.as_deref())
        .fetch_all(self.pool)
        .await?;

        Ok(players)
    }

    /// Find player by ID
    pub async fn find_by_id(&self, id: Uuid) -> Result<Player> {
        let player = sqlx::query_as::<_, Player>(&format!(
            "SELECT {PLAYER_COLUMNS} FROM players WHERE player_id = $1"
        ))
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        Ok(player)
    }

    /// Create a new player
    pub async fn create(&self, req: &CreatePlayerRequest) -> Result<Player> {
        let player = sqlx::query_as::<_, Player>(&format!(
            r#"
            INSERT INTO players (name, contact, position, skill_level)
            VALUES ($1, $2, $3, $4)
            RETURNING {PLAYER_COLUMNS}
            "#
        ))
        .bind(&req.name)
        .bind(&req.contact)
        .bind(req.position.trim())
        .bind(req.skill_level)
        .fetch_one(self.pool)
        .await
        .map_err(|e| StorageError::from(e).on_unique_violation(DUPLICATE_PLAYER))?;

        tracing::debug!(player_id = %player.player_id, "player created");
        Ok(player)
    }

    /// Update an existing player, keeping fields absent from the request
    pub async fn update(
        &self,
        existing: &Player,
        req: &UpdatePlayerRequest,
    ) -> Result<Player> {
        let name = req.name.as_ref().unwrap_or(&existing.name);
        let contact = req.contact.as_ref().unwrap_or(&existing.contact);
        let position = req
            .position
            .as_deref()
            .map(str::trim)
            .unwrap_or(&existing.position);
        let skill_level = req.skill_level.unwrap_or(existing.skill_level);

        let player = sqlx::query_as::<_, Player>(&format!(
            r#"
            UPDATE players
            SET name = $2,
                contact = $3,
                position = $4,
                skill_level = $5
            WHERE player_id = $1
            RETURNING {PLAYER_COLUMNS}
            "#
        ))
        .bind(existing.player_id)
        .bind(name)
        .bind(contact)
        .bind(position)
        .bind(skill_level)
        .fetch_optional(self.pool)
        .await
        .map_err(|e| StorageError::from(e).on_unique_violation(DUPLICATE_PLAYER))?
        .ok_or_else(|| {
            StorageError::PersistenceFailure(format!(
                "player {} was not modified",
                existing.player_id
            ))
        })?;

        tracing::debug!(player_id = %player.player_id, "player updated");
        Ok(player)
    }

    /// Delete a player by ID
    pub async fn delete(&self, id: Uuid) -> Result<()> {
        let result = sqlx::query("DELETE FROM players WHERE player_id = $1")
            .bind(id)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StorageError::NotFound);
        }

        tracing::debug!(player_id = %id, "player deleted");
        Ok(())
    }
}
