pub mod errors;
pub mod events;
pub mod messages;
pub mod score;

// Re-export all types
pub use errors::*;
pub use events::*;
pub use messages::*;
pub use score::*;
