use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

/// Response containing player information
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PlayerResponse {
    pub player_id: Uuid,
    pub name: String,
    pub contact: String,
    pub position: String,
    pub skill_level: i32,
    pub created_at: NaiveDateTime,
}

/// Query filter for listing players
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct PlayerFilter {
    /// Exact name match
    pub name: Option<String>,
}

/// Request payload for registering a new player
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreatePlayerRequest {
    #[validate(length(
        min = 1,
        max = 255,
        message = "Name must be between 1 and 255 characters"
    ))]
    pub name: String,

    #[validate(length(
        min = 1,
        max = 64,
        message = "Contact must be between 1 and 64 characters"
    ))]
    pub contact: String,

    #[validate(custom(function = "validate_position"))]
    pub position: String,

    #[validate(range(min = 0, max = 100, message = "Skill level must be between 0 and 100"))]
    pub skill_level: i32,
}

/// Request payload for updating an existing player
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdatePlayerRequest {
    #[validate(length(min = 1, max = 255))]
    pub name: Option<String>,

    #[validate(length(min = 1, max = 64))]
    pub contact: Option<String>,

    #[validate(custom(function = "validate_position"))]
    pub position: Option<String>,

    #[validate(range(min = 0, max = 100))]
    pub skill_level: Option<i32>,
}

// Positions are free-form labels, but must be short and non-blank
fn validate_position(position: &str) -> Result<(), validator::ValidationError> {
    let trimmed = position.trim();

    if trimmed.is_empty() || trimmed.len() > 16 {
        return Err(validator::ValidationError::new("invalid_position"));
    }

    Ok(())
}

impl From<crate::models::Player> for PlayerResponse {
    fn from(player: crate::models::Player) -> Self {
        Self {
            player_id: player.player_id,
            name: player.name,
            contact: player.contact,
            position: player.position,
            skill_level: player.skill_level,
            created_at: player.created_at,
        }
    }
}
