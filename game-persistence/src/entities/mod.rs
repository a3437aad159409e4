pub mod prelude;

pub mod daily_puzzles;
pub mod user_games;
pub mod user_stats;
