use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Player {
    pub player_id: Uuid,
    pub name: String,
    pub contact: String,
    pub position: String,
    pub skill_level: i32,
    pub created_at: chrono::NaiveDateTime,
}

impl Player {
    /// Human readable identity, stable across re-registrations of the same person.
    pub fn display_key(&self) -> String {
        format!("{}_{}", self.name, self.contact)
    }
}
