use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::Player;

pub const GROUP_LABELS: [&str; 3] = ["group_a", "group_b", "group_c"];

/// Three-way split of a match's players.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Groups {
    pub group_a: Vec<Player>,
    pub group_b: Vec<Player>,
    pub group_c: Vec<Player>,
}

/// Size and average skill of one group.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct GroupStats {
    pub label: String,
    pub size: usize,
    pub average_skill: Option<Decimal>,
}

impl Groups {
    pub fn len(&self) -> usize {
        self.group_a.len() + self.group_b.len() + self.group_c.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Groups paired with their labels, in A, B, C order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &[Player])> {
        GROUP_LABELS
            .into_iter()
            .zip([&self.group_a[..], &self.group_b[..], &self.group_c[..]])
    }

    pub(crate) fn slot_mut(&mut self, slot: usize) -> &mut Vec<Player> {
        match slot % 3 {
            0 => &mut self.group_a,
            1 => &mut self.group_b,
            _ => &mut self.group_c,
        }
    }

    pub fn stats(&self) -> Vec<GroupStats> {
        self.iter()
            .map(|(label, players)| GroupStats {
                label: label.to_string(),
                size: players.len(),
                average_skill: average_skill(players),
            })
            .collect()
    }
}

fn average_skill(players: &[Player]) -> Option<Decimal> {
    if players.is_empty() {
        return None;
    }

    let total: i64 = players.iter().map(|p| i64::from(p.skill_level)).sum();
    let average = Decimal::from(total) / Decimal::from(players.len() as u64);

    Some(average.round_dp(2))
}
