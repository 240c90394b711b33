#[allow(clippy::module_inception)]
pub mod scoring;

pub use scoring::{counted_tiles, letter_score, turn_score};
