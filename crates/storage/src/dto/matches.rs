use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::models::{GroupStats, Groups, Match, MatchRoster};

use super::player::PlayerResponse;

/// Response containing a match, its registered players and the last saved split
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct MatchResponse {
    pub match_id: Uuid,
    pub match_date: NaiveDate,
    #[schema(value_type = String, example = "18:30:00")]
    pub kickoff_time: NaiveTime,
    pub location: String,
    pub participants: Vec<PlayerResponse>,
    pub groups: Option<Groups>,
    pub created_at: NaiveDateTime,
}

/// Request payload for scheduling a match
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateMatchRequest {
    pub match_date: NaiveDate,

    #[schema(value_type = String, example = "18:30:00")]
    pub kickoff_time: NaiveTime,

    #[validate(length(
        min = 1,
        max = 255,
        message = "Location must be between 1 and 255 characters"
    ))]
    pub location: String,
}

/// Request payload for rescheduling or relocating a match
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateMatchRequest {
    pub match_date: Option<NaiveDate>,

    #[schema(value_type = Option<String>, example = "18:30:00")]
    pub kickoff_time: Option<NaiveTime>,

    #[validate(length(min = 1, max = 255))]
    pub location: Option<String>,
}

/// Request payload for adding a player to a match
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct RegisterPlayerRequest {
    pub player_id: Uuid,
}

/// Freshly computed split, with per-group size and average skill
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct GroupsResponse {
    #[serde(flatten)]
    pub groups: Groups,
    pub stats: Vec<GroupStats>,
}

impl From<Groups> for GroupsResponse {
    fn from(groups: Groups) -> Self {
        let stats = groups.stats();
        Self { groups, stats }
    }
}

impl From<MatchRoster> for MatchResponse {
    fn from(roster: MatchRoster) -> Self {
        let MatchRoster {
            fixture,
            participants,
        } = roster;
        let Match {
            match_id,
            match_date,
            kickoff_time,
            location,
            groups,
            created_at,
        } = fixture;

        Self {
            match_id,
            match_date,
            kickoff_time,
            location,
            participants: participants.into_iter().map(PlayerResponse::from).collect(),
            groups: groups.map(|json| json.0),
            created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Player;

    #[test]
    fn test_blank_location_is_rejected() {
        let req = CreateMatchRequest {
            match_date: NaiveDate::from_ymd_opt(2022, 12, 25).unwrap(),
            kickoff_time: NaiveTime::from_hms_opt(12, 0, 0).unwrap(),
            location: String::new(),
        };

        assert!(req.validate().is_err());
    }

    #[test]
    fn test_groups_response_flattens_groups() {
        let player = Player {
            player_id: Uuid::new_v4(),
            name: "A".to_string(),
            contact: "1".to_string(),
            position: "ST".to_string(),
            skill_level: 9,
            created_at: NaiveDateTime::default(),
        };
        let groups = Groups {
            group_a: vec![player],
            ..Groups::default()
        };

        let json = serde_json::to_value(GroupsResponse::from(groups)).unwrap();

        assert_eq!(json["group_a"][0]["name"], "A");
        assert_eq!(json["stats"][0]["size"], 1);
        assert_eq!(json["stats"][1]["average_skill"], serde_json::Value::Null);
    }

    #[test]
    fn test_match_response_from_roster_without_groups() {
        let roster = MatchRoster {
            fixture: Match {
                match_id: Uuid::new_v4(),
                match_date: NaiveDate::from_ymd_opt(2022, 12, 25).unwrap(),
                kickoff_time: NaiveTime::from_hms_opt(12, 0, 0).unwrap(),
                location: "Field 1".to_string(),
                groups: None,
                created_at: NaiveDateTime::default(),
            },
            participants: vec![],
        };

        let response = MatchResponse::from(roster);

        assert_eq!(response.location, "Field 1");
        assert!(response.groups.is_none());
        assert!(response.participants.is_empty());
    }
}
