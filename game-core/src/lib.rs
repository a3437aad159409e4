pub mod calendar;
pub mod puzzle_selection;
pub mod round;
pub mod scoring;
pub mod streak;

// Re-export main components
pub use calendar::*;
pub use puzzle_selection::*;
pub use round::*;
pub use scoring::*;
pub use streak::*;
