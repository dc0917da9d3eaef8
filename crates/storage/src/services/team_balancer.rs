//! Three-way team split that balances skill and spreads positions.
//!
//! Players are shuffled, stable-sorted by skill (highest first), bucketed by
//! position in the order positions first appear, and dealt round-robin into
//! groups A, B and C. The dealing pointer carries over from one bucket to the
//! next. The shuffle only decides the order among equally skilled players, so
//! repeated calls on the same roster can differ when skill levels tie.

use std::collections::HashMap;

use rand::Rng;
use rand::seq::SliceRandom;

use crate::models::{Groups, Player};

/// Split `players` into three groups, breaking skill ties with `rng`.
pub fn balance<R: Rng + ?Sized>(mut players: Vec<Player>, rng: &mut R) -> Groups {
    players.shuffle(rng);
    distribute(players)
}

/// [`balance`] using the thread-local RNG.
pub fn balance_random(players: Vec<Player>) -> Groups {
    balance(players, &mut rand::thread_rng())
}

/// Deal players into groups without shuffling first.
///
/// Ties in skill keep their input order, so the result is fully determined by
/// the input sequence.
pub fn distribute(mut players: Vec<Player>) -> Groups {
    // `sort_by` is stable: equal skills keep their (shuffled) relative order
    players.sort_by(|a, b| b.skill_level.cmp(&a.skill_level));

    let mut groups = Groups::default();
    let mut slot = 0;

    for bucket in bucket_by_position(players) {
        for player in bucket {
            groups.slot_mut(slot).push(player);
            slot = (slot + 1) % 3;
        }
    }

    groups
}

/// Buckets in first-encountered position order, each keeping input order.
fn bucket_by_position(players: Vec<Player>) -> Vec<Vec<Player>> {
    let mut index: HashMap<String, usize> = HashMap::new();
    let mut buckets: Vec<Vec<Player>> = Vec::new();

    for player in players {
        let next = buckets.len();
        let at = *index.entry(player.position.clone()).or_insert(next);
        if at == next {
            buckets.push(Vec::new());
        }
        buckets[at].push(player);
    }

    buckets
}
