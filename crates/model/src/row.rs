use std::fmt;

/// Stable identity of a row on a [`ListModel`](crate::ListModel).
///
/// Ids are allocated in increasing order and never reused by a model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RowId(pub u64);

impl fmt::Display for RowId {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "#{}", self.0)
	}
}

/// A displayed row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Row {
	/// Identity of the row, preserved across moves and reloads.
	pub id: RowId,
	/// Number of times the row has been reloaded.
	pub version: u32,
}

impl Row {
	/// Creates a row that has never been reloaded.
	pub const fn new(id: RowId) -> Self {
		Self { id, version: 0 }
	}

	/// Returns this row with its version bumped.
	#[must_use]
	pub const fn reloaded(self) -> Self {
		Self {
			id: self.id,
			version: self.version.saturating_add(1),
		}
	}
}
