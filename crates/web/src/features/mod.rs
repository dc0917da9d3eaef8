pub mod matches;
pub mod players;
