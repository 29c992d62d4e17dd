use crate::address::{Address, Position};

/// The kind of change a single [`Edit`] describes.
///
/// Only moves carry extra data: the row's position in the source sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "op", rename_all = "snake_case"))]
pub enum Operation {
	/// A row present in the source sequence is removed.
	Deletion,
	/// A row absent from the source sequence is added.
	Insertion,
	/// A row keeps its slot but its content changes.
	Substitution,
	/// A row is relocated from `origin` in the source sequence.
	Move {
		/// Position of the row before the edit script is applied.
		origin: Position,
	},
}

/// One entry of an edit script.
///
/// `destination` is the row's position in the target sequence. For
/// deletions it is the position of the removed row in the source sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Edit {
	/// What happens to the row.
	pub operation: Operation,
	/// Where the edit lands.
	pub destination: Position,
}

impl Edit {
	/// Creates an edit from its parts.
	pub const fn new(operation: Operation, destination: Position) -> Self {
		Self {
			operation,
			destination,
		}
	}

	/// Removes the row at `position`.
	pub const fn deletion(position: Position) -> Self {
		Self::new(Operation::Deletion, position)
	}

	/// Adds a row at `position`.
	pub const fn insertion(position: Position) -> Self {
		Self::new(Operation::Insertion, position)
	}

	/// Replaces the content of the row at `position`.
	pub const fn substitution(position: Position) -> Self {
		Self::new(Operation::Substitution, position)
	}

	/// Relocates the row at `origin` to `destination`.
	pub const fn moved(origin: Position, destination: Position) -> Self {
		Self::new(Operation::Move { origin }, destination)
	}

	/// Returns the source position of a move, or [`None`] for every other
	/// operation.
	pub const fn origin(&self) -> Option<Position> {
		match self.operation {
			Operation::Move { origin } => Some(origin),
			_ => None,
		}
	}
}

/// A classified move: the row at `from` ends up at `to`.
///
/// `from` addresses the index space before the batch, `to` the one after.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MovePair {
	/// Pre-batch address of the row.
	pub from: Address,
	/// Post-batch address of the row.
	pub to: Address,
}

impl MovePair {
	/// Creates a move from `from` to `to`.
	pub const fn new(from: Address, to: Address) -> Self {
		Self { from, to }
	}
}
