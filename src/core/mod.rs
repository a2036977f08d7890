//! Core domain logic
//!
//! Pure, deterministic building blocks: the seeded randomizer, letter sets,
//! word validation/scoring, and the tier ladder. Nothing here performs I/O.

mod letters;
mod random;
pub mod scoring;
pub mod tiers;

pub use letters::{LETTER_COUNT, LetterSet, LetterSetError, distinct_count, distinct_letters};
pub use random::{RandomError, Randomizer};
