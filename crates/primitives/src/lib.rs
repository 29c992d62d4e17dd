//! Core types for list updates: edit scripts, addresses, and classified batches.

/// Row positions, sections, and section-qualified addresses.
pub mod address;
/// Edit scripts and the edit classifier.
pub mod edit;

pub use address::{Address, Position, Section};
pub use edit::{ClassifiedBatch, Edit, MovePair, Operation, classify, classify_flat};
