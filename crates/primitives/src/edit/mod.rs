//! Edit scripts and their partition into surface operation classes.

mod classify;
mod types;

pub use classify::{ClassifiedBatch, classify, classify_flat};
pub use types::{Edit, MovePair, Operation};
