use sqlx::PgPool;
use storage::{
    dto::player::{CreatePlayerRequest, PlayerFilter, UpdatePlayerRequest},
    error::Result,
    models::Player,
    repository::player::PlayerRepository,
};
use uuid::Uuid;

/// List players, optionally filtered by name
pub async fn list_players(pool: &PgPool, filter: &PlayerFilter) -> Result<Vec<Player>> {
    let repo = PlayerRepository::new(pool);
    repo.list(filter).await
}

/// Get player by ID
pub async fn get_player(pool: &PgPool, player_id: Uuid) -> Result<Player> {
    let repo = PlayerRepository::new(pool);
    repo.find_by_id(player_id).await
}

/// Create a new player
pub async fn create_player(pool: &PgPool, request: &CreatePlayerRequest) -> Result<Player> {
    let repo = PlayerRepository::new(pool);
    repo.create(request).await
}

/// Update a player
pub async fn update_player(
    pool: &PgPool,
    player_id: Uuid,
    request: &UpdatePlayerRequest,
) -> Result<Player> {
    let repo = PlayerRepository::new(pool);

    let existing = repo.find_by_id(player_id).await?;
    repo.update(&existing, request).await
}

/// Delete a player
pub async fn delete_player(pool: &PgPool, player_id: Uuid) -> Result<()> {
    let repo = PlayerRepository::new(pool);
    repo.delete(player_id).await
}
