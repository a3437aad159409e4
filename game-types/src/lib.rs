pub mod errors;
pub mod game;
pub mod golfer;
pub mod messages;
pub mod user;

// Re-export all types
pub use errors::*;
pub use game::*;
pub use golfer::*;
pub use messages::*;
pub use user::*;

pub type GolferId = String;
pub type UserId = String;
