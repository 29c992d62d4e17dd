use tracing::trace;

use super::types::{Edit, MovePair, Operation};
use crate::address::{Address, Section};

/// An edit script partitioned into the four classes a list surface applies.
///
/// Every collection keeps the relative order its edits had in the script.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ClassifiedBatch {
	/// Rows added, addressed in the post-batch index space.
	pub insertions: Vec<Address>,
	/// Rows removed, addressed in the pre-batch index space.
	pub deletions: Vec<Address>,
	/// Rows whose content must be reloaded.
	pub substitutions: Vec<Address>,
	/// Rows relocated from a pre-batch to a post-batch address.
	pub moves: Vec<MovePair>,
}

impl ClassifiedBatch {
	/// Partitions `edits` with every address placed in `section`.
	pub fn from_edits(edits: &[Edit], section: Section) -> Self {
		let mut batch = Self::default();

		for edit in edits {
			let destination = Address::new(edit.destination, section);
			match edit.operation {
				Operation::Deletion => batch.deletions.push(destination),
				Operation::Insertion => batch.insertions.push(destination),
				Operation::Substitution => batch.substitutions.push(destination),
				Operation::Move { origin } => batch
					.moves
					.push(MovePair::new(Address::new(origin, section), destination)),
			}
		}

		trace!(
			%section,
			deletions = batch.deletions.len(),
			insertions = batch.insertions.len(),
			substitutions = batch.substitutions.len(),
			moves = batch.moves.len(),
			"Classified edit script"
		);
		batch
	}

	/// Returns the total number of entries across all four classes.
	pub fn len(&self) -> usize {
		self.insertions.len() + self.deletions.len() + self.substitutions.len() + self.moves.len()
	}

	/// Returns true if no class holds an entry.
	pub fn is_empty(&self) -> bool {
		self.len() == 0
	}

	/// Re-expresses every move as a deletion at its origin and an insertion at
	/// its destination.
	///
	/// The decomposed entries are appended after the existing deletions and
	/// insertions, in move order. Used for surfaces that cannot relocate rows.
	pub fn decompose_moves(mut self) -> Self {
		for MovePair { from, to } in self.moves.drain(..) {
			self.deletions.push(from);
			self.insertions.push(to);
		}
		self
	}
}

/// Partitions `edits` into a [`ClassifiedBatch`] addressed in `section`.
///
/// This is a stable partition: no edit is dropped, duplicated or reordered
/// within its class.
pub fn classify(edits: &[Edit], section: Section) -> ClassifiedBatch {
	ClassifiedBatch::from_edits(edits, section)
}

/// Partitions `edits` for a single-section list.
pub fn classify_flat(edits: &[Edit]) -> ClassifiedBatch {
	classify(edits, Section::default())
}
