pub use super::daily_puzzles::Entity as DailyPuzzles;
pub use super::user_games::Entity as UserGames;
pub use super::user_stats::Entity as UserStats;
