pub mod scoring;
pub mod selector;

pub use scoring::{Grade, MAX_SCORE, ScoreTracker};
pub use selector::VerbSelector;
