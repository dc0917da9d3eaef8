use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use sqlx::types::Json;
use uuid::Uuid;

use super::{Groups, Player};

/// A scheduled match as stored in the `matches` table.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Match {
    pub match_id: Uuid,
    pub match_date: NaiveDate,
    pub kickoff_time: NaiveTime,
    pub location: String,
    pub groups: Option<Json<Groups>>,
    pub created_at: NaiveDateTime,
}

impl Match {
    pub fn groups(&self) -> Option<&Groups> {
        self.groups.as_ref().map(|json| &json.0)
    }
}

/// A match together with the players registered for it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchRoster {
    #[serde(flatten)]
    pub fixture: Match,
    pub participants: Vec<Player>,
}
