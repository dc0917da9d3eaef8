use sqlx::PgPool;
use storage::{
    dto::matches::{CreateMatchRequest, UpdateMatchRequest},
    error::Result,
    models::{Groups, MatchRoster},
    repository::matches::MatchRepository,
    services::group_sorting,
};
use uuid::Uuid;

/// List all matches with their participants
pub async fn list_matches(pool: &PgPool) -> Result<Vec<MatchRoster>> {
    let repo = MatchRepository::new(pool);
    repo.list().await
}

/// Get a match with its participants
pub async fn get_match(pool: &PgPool, match_id: Uuid) -> Result<MatchRoster> {
    let repo = MatchRepository::new(pool);
    repo.find_roster(match_id).await
}

/// Schedule a new match
pub async fn create_match(pool: &PgPool, request: &CreateMatchRequest) -> Result<MatchRoster> {
    let repo = MatchRepository::new(pool);
    let fixture = repo.create(request).await?;

    Ok(MatchRoster {
        fixture,
        participants: Vec::new(),
    })
}

/// Update a match
pub async fn update_match(
    pool: &PgPool,
    match_id: Uuid,
    request: &UpdateMatchRequest,
) -> Result<MatchRoster> {
    let repo = MatchRepository::new(pool);

    let existing = repo.find_by_id(match_id).await?;
    repo.update(&existing, request).await?;
    repo.find_roster(match_id).await
}

/// Delete a match
pub async fn delete_match(pool: &PgPool, match_id: Uuid) -> Result<()> {
    let repo = MatchRepository::new(pool);
    repo.delete(match_id).await
}

/// Register a player for a match
pub async fn register_player(
    pool: &PgPool,
    match_id: Uuid,
    player_id: Uuid,
) -> Result<MatchRoster> {
    let repo = MatchRepository::new(pool);
    repo.add_participant(match_id, player_id).await
}

/// Remove a player from a match
pub async fn unregister_player(pool: &PgPool, match_id: Uuid, player_id: Uuid) -> Result<()> {
    let repo = MatchRepository::new(pool);
    repo.remove_participant(match_id, player_id).await
}

/// Compute a fresh split for a match without saving it
pub async fn sort_groups(pool: &PgPool, match_id: Uuid) -> Result<Groups> {
    let repo = MatchRepository::new(pool);
    group_sorting::compute_groups(&repo, match_id).await
}

/// Save a split against a match, replacing any previous one
pub async fn save_groups(pool: &PgPool, match_id: Uuid, groups: &Groups) -> Result<MatchRoster> {
    let repo = MatchRepository::new(pool);
    group_sorting::persist_groups(&repo, match_id, groups).await?;
    repo.find_roster(match_id).await
}
