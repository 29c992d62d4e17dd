//! A headless list surface: sections of identified rows, a selection, and a
//! scroll offset, updated through batched row operations.
//!
//! Hosts keep row content elsewhere and key it by [`RowId`]; the model tracks
//! where each row sits after every batch.

/// Row identities.
pub mod row;
/// The list model and its batch reconciliation.
pub mod state;

pub use row::{Row, RowId};
pub use state::ListModel;
