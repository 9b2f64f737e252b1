//! Local search-suggestion ranking. Purely in-memory: candidate names come
//! from the API once per scope, every keystroke re-ranks them synchronously.

pub mod suggest;

pub use suggest::{MAX_SUGGESTIONS, Suggestion, rank, similarity};
