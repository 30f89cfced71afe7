pub mod footer;
pub mod roster;
pub mod scoreboard;
