use std::collections::BTreeSet;

use listpatch_primitives::{Address, MovePair, Section};
use listpatch_surface::{SurfaceFault, UpdateKind};

use crate::row::{Row, RowId};

/// Calls collected during an open batch region.
#[derive(Debug, Default)]
pub(super) struct Staged {
	pub(super) deletions: Vec<Address>,
	pub(super) insertions: Vec<Address>,
	pub(super) reloads: Vec<Address>,
	pub(super) moves: Vec<MovePair>,
}

impl Staged {
	/// Returns every section touched by a staged call.
	pub(super) fn sections(&self) -> BTreeSet<Section> {
		self.deletions
			.iter()
			.chain(&self.insertions)
			.chain(&self.reloads)
			.chain(self.moves.iter().flat_map(|m| [&m.from, &m.to]))
			.map(|a| a.section)
			.collect()
	}

	/// Returns true if nothing was staged.
	pub(super) fn is_empty(&self) -> bool {
		self.deletions.is_empty()
			&& self.insertions.is_empty()
			&& self.reloads.is_empty()
			&& self.moves.is_empty()
	}
}

/// Tracks which call claimed each slot of one index space.
struct Claims {
	slots: Vec<Option<UpdateKind>>,
}

impl Claims {
	fn new(len: usize) -> Self {
		Self {
			slots: vec![None; len],
		}
	}

	fn claim(&mut self, address: Address, kind: UpdateKind) -> Result<(), SurfaceFault> {
		let len = self.slots.len();
		let slot = self
			.slots
			.get_mut(address.row)
			.ok_or(SurfaceFault::OutOfBounds { kind, address, len })?;

		if let Some(first) = *slot {
			return Err(SurfaceFault::Conflict {
				address,
				first,
				second: kind,
			});
		}
		*slot = Some(kind);
		Ok(())
	}

	fn get(&self, row: usize) -> Option<UpdateKind> {
		self.slots.get(row).copied().flatten()
	}
}

/// Computes the rows of `section` after the staged batch.
///
/// Deletions and move origins are checked against `old`; insertions, move
/// destinations and reloads against the post-batch length. A reload bumps
/// whichever row ends up in its slot. Fresh rows take ids
/// starting at `next_id`. Returns the new rows and the next unused id.
pub(super) fn plan_section(
	section: Section,
	old: &[Row],
	staged: &Staged,
	expected: Option<usize>,
	mut next_id: u64,
) -> Result<(Vec<Row>, u64), SurfaceFault> {
	let in_section = |a: &&Address| a.section == section;
	let moves: Vec<&MovePair> = staged.moves.iter().filter(|m| m.from.section == section).collect();
	if let Some(m) = moves.iter().find(|m| m.to.section != section) {
		return Err(SurfaceFault::Rejected(format!(
			"move from {} to {} crosses sections",
			m.from, m.to
		)));
	}

	let mut before = Claims::new(old.len());
	let mut deleted = 0;
	for &address in staged.deletions.iter().filter(in_section) {
		before.claim(address, UpdateKind::Delete)?;
		deleted += 1;
	}
	for m in &moves {
		before.claim(m.from, UpdateKind::MoveFrom)?;
	}

	let inserted = staged.insertions.iter().filter(in_section).count();
	let len = old.len() - deleted + inserted;
	if let Some(expected) = expected
		&& expected != len
	{
		return Err(SurfaceFault::CountMismatch {
			section,
			expected,
			actual: len,
		});
	}

	let mut after = Claims::new(len);
	let mut slots: Vec<Option<Row>> = vec![None; len];
	for &address in staged.insertions.iter().filter(in_section) {
		after.claim(address, UpdateKind::Insert)?;
		slots[address.row] = Some(Row::new(RowId(next_id)));
		next_id += 1;
	}
	for m in &moves {
		after.claim(m.to, UpdateKind::MoveTo)?;
		slots[m.to.row] = Some(old[m.from.row]);
	}
	for &address in staged.reloads.iter().filter(in_section) {
		after.claim(address, UpdateKind::Reload)?;
	}

	let mut survivors = old
		.iter()
		.enumerate()
		.filter(|&(i, _)| before.get(i).is_none())
		.map(|(_, row)| *row);
	for slot in slots.iter_mut().filter(|slot| slot.is_none()) {
		*slot = survivors.next();
	}

	let mut rows: Vec<Row> = slots.into_iter().flatten().collect();
	for &address in staged.reloads.iter().filter(in_section) {
		rows[address.row] = rows[address.row].reloaded();
	}
	debug_assert_eq!(rows.len(), len);
	Ok((rows, next_id))
}
