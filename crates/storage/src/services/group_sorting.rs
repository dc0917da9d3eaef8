use rand::Rng;
use uuid::Uuid;

use crate::error::Result;
use crate::models::{Groups, Match};
use crate::services::team_balancer;
use crate::store::MatchStore;

/// Split the players registered for a match into three groups.
///
/// The result is returned, not saved; see [`persist_groups`].
pub async fn compute_groups<S>(store: &S, match_id: Uuid) -> Result<Groups>
where
    S: MatchStore + ?Sized,
{
    let roster = store.get_match(match_id).await?;
    let groups = team_balancer::balance_random(roster.participants);

    log_groups(match_id, &groups);
    Ok(groups)
}

/// [`compute_groups`] with a caller supplied RNG.
pub async fn compute_groups_with<S, R>(store: &S, match_id: Uuid, rng: &mut R) -> Result<Groups>
where
    S: MatchStore + ?Sized,
    R: Rng + ?Sized,
{
    let roster = store.get_match(match_id).await?;
    let groups = team_balancer::balance(roster.participants, rng);

    log_groups(match_id, &groups);
    Ok(groups)
}

/// Replace the saved groups of a match.
pub async fn persist_groups<S>(store: &S, match_id: Uuid, groups: &Groups) -> Result<Match>
where
    S: MatchStore + ?Sized,
{
    let fixture = store.save_match_result(match_id, groups).await?;

    tracing::info!(%match_id, players = groups.len(), "groups persisted");
    Ok(fixture)
}

fn log_groups(match_id: Uuid, groups: &Groups) {
    for (stats, (_, members)) in groups.stats().iter().zip(groups.iter()) {
        let names: Vec<&str> = members.iter().map(|p| p.name.as_str()).collect();
        tracing::info!(
            %match_id,
            group = %stats.label,
            size = stats.size,
            average_skill = ?stats.average_skill,
            members = %names.join(","),
            "group sorted"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StorageError;
    use crate::models::{MatchRoster, Player};
    use crate::store::InMemoryMatchStore;
    use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn player(name: &str, position: &str, skill_level: i32) -> Player {
        Player {
            player_id: Uuid::new_v4(),
            name: name.to_string(),
            contact: format!("{name}-phone"),
            position: position.to_string(),
            skill_level,
            created_at: NaiveDateTime::default(),
        }
    }

    async fn store_with(participants: Vec<Player>) -> (InMemoryMatchStore, Uuid) {
        let store = InMemoryMatchStore::new();
        let match_id = Uuid::new_v4();
        store
            .insert(MatchRoster {
                fixture: Match {
                    match_id,
                    match_date: NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
                    kickoff_time: NaiveTime::from_hms_opt(18, 30, 0).unwrap(),
                    location: "Riverside Park".to_string(),
                    groups: None,
                    created_at: NaiveDateTime::default(),
                },
                participants,
            })
            .await;
        (store, match_id)
    }

    #[tokio::test]
    async fn test_compute_groups_missing_match() {
        let store = InMemoryMatchStore::new();

        let result = compute_groups(&store, Uuid::new_v4()).await;

        assert!(matches!(result, Err(StorageError::NotFound)));
    }

    #[tokio::test]
    async fn test_compute_groups_keeps_every_participant() {
        let participants = vec![
            player("A", "ST", 9),
            player("B", "CM", 7),
            player("C", "ST", 5),
            player("D", "GK", 8),
            player("E", "CM", 6),
            player("F", "GK", 4),
        ];
        let (store, match_id) = store_with(participants).await;

        let groups = compute_groups(&store, match_id).await.unwrap();

        assert_eq!(groups.len(), 6);
    }

    #[tokio::test]
    async fn test_compute_groups_does_not_persist() {
        let (store, match_id) = store_with(vec![player("A", "ST", 9)]).await;

        compute_groups(&store, match_id).await.unwrap();

        let roster = store.get_match(match_id).await.unwrap();
        assert!(roster.fixture.groups.is_none());
    }

    #[tokio::test]
    async fn test_compute_groups_with_seed_is_repeatable() {
        let participants = (0..9).map(|i| player(&format!("p{i}"), "CM", 5)).collect();
        let (store, match_id) = store_with(participants).await;

        let first = compute_groups_with(&store, match_id, &mut StdRng::seed_from_u64(7))
            .await
            .unwrap();
        let second = compute_groups_with(&store, match_id, &mut StdRng::seed_from_u64(7))
            .await
            .unwrap();

        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_compute_groups_empty_roster() {
        let (store, match_id) = store_with(vec![]).await;

        let groups = compute_groups(&store, match_id).await.unwrap();

        assert_eq!(groups, Groups::default());
    }

    #[tokio::test]
    async fn test_persist_then_overwrite() {
        let (store, match_id) = store_with(vec![player("A", "ST", 9), player("B", "CM", 3)]).await;

        let first = compute_groups(&store, match_id).await.unwrap();
        persist_groups(&store, match_id, &first).await.unwrap();

        let replacement = Groups {
            group_c: first.group_a.clone(),
            ..Groups::default()
        };
        let saved = persist_groups(&store, match_id, &replacement).await.unwrap();

        assert_eq!(saved.groups(), Some(&replacement));
        let roster = store.get_match(match_id).await.unwrap();
        assert_eq!(roster.fixture.groups(), Some(&replacement));
    }

    #[tokio::test]
    async fn test_persist_groups_missing_match() {
        let store = InMemoryMatchStore::new();

        let result = persist_groups(&store, Uuid::new_v4(), &Groups::default()).await;

        assert!(matches!(result, Err(StorageError::NotFound)));
    }

    #[tokio::test]
    async fn test_persist_groups_surfaces_failed_write() {
        let (store, match_id) = store_with(vec![]).await;
        store.fail_writes(true);

        let result = persist_groups(&store, match_id, &Groups::default()).await;

        assert!(matches!(result, Err(StorageError::PersistenceFailure(_))));
    }
}
