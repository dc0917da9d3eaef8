mod groups;
mod matches;
mod player;

pub use groups::{GROUP_LABELS, GroupStats, Groups};
pub use matches::{Match, MatchRoster};
pub use player::Player;
