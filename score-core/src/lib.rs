pub mod derivation;
pub mod editor;
pub mod match_tally;
pub mod scoring;
pub mod sections;

// Re-export main components
pub use derivation::*;
pub use editor::*;
pub use match_tally::*;
pub use scoring::*;
pub use sections::*;
