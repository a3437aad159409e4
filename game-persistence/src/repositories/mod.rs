pub mod puzzle_repository;
pub mod user_game_repository;
pub mod user_stats_repository;

pub use puzzle_repository::PuzzleRepository;
pub use user_game_repository::UserGameRepository;
pub use user_stats_repository::UserStatsRepository;
