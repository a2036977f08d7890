//! Session state and persistence
//!
//! The mutable half of the game: the attempt being composed, the found-word
//! set, and the pluggable store that keeps found words across sessions.

mod state;
pub mod store;

pub use state::{Session, SubmitOutcome};
pub use store::{FileStore, MemoryStore, WordStore};
