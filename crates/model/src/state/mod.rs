use std::collections::BTreeMap;
use std::mem;

use listpatch_primitives::{Address, MovePair, Section};
use listpatch_surface::{ListSurface, SurfaceFault, UpdateKind};
use tracing::{debug, trace};

use crate::row::{Row, RowId};

mod reconcile;

use reconcile::{Staged, plan_section};

/// Index-space model of a sectioned list.
///
/// Rows are staged between [`begin_updates`](ListSurface::begin_updates) and
/// the outermost [`end_updates`](ListSurface::end_updates), then reconciled in
/// one pass. A batch that fails validation leaves the model untouched.
///
/// The selection follows its row through moves and is cleared when the row is
/// deleted. The offset is clamped to the new total length.
#[derive(Debug, Default)]
pub struct ListModel {
	sections: Vec<Vec<Row>>,
	next_id: u64,
	selected: Option<Address>,
	offset: usize,
	expected: BTreeMap<Section, usize>,
	depth: usize,
	staged: Staged,
	outside: Option<UpdateKind>,
}

impl ListModel {
	/// Creates a model with no sections.
	pub fn new() -> Self {
		Self::default()
	}

	/// Creates a model with one section per entry of `lens`, each filled with
	/// fresh rows.
	pub fn with_sections(lens: impl IntoIterator<Item = usize>) -> Self {
		let mut model = Self::default();
		for len in lens {
			model.push_section(len);
		}
		model
	}

	/// Sets the selected row.
	#[must_use]
	pub fn with_selected(mut self, selected: Option<Address>) -> Self {
		self.selected = selected;
		self
	}

	/// Sets the scroll offset.
	#[must_use]
	pub fn with_offset(mut self, offset: usize) -> Self {
		self.offset = offset;
		self
	}

	/// Appends a section of `len` fresh rows and returns its index.
	pub fn push_section(&mut self, len: usize) -> Section {
		let rows = (0..len).map(|_| Row::new(self.alloc_id())).collect();
		self.sections.push(rows);
		Section(self.sections.len() - 1)
	}

	/// Returns the number of sections.
	pub fn section_count(&self) -> usize {
		self.sections.len()
	}

	/// Returns the rows of `section`.
	pub fn rows(&self, section: Section) -> Option<&[Row]> {
		self.sections.get(section.index()).map(Vec::as_slice)
	}

	/// Returns the row at `address`.
	pub fn row(&self, address: Address) -> Option<Row> {
		self.rows(address.section)?.get(address.row).copied()
	}

	/// Returns the row count of `section`.
	pub fn len(&self, section: Section) -> Option<usize> {
		self.rows(section).map(<[Row]>::len)
	}

	/// Returns the row count across all sections.
	pub fn total_len(&self) -> usize {
		self.sections.iter().map(Vec::len).sum()
	}

	/// Returns true if no section holds a row.
	pub fn is_empty(&self) -> bool {
		self.total_len() == 0
	}

	/// Finds the current address of the row with `id`.
	pub fn position_of(&self, id: RowId) -> Option<Address> {
		self.sections.iter().enumerate().find_map(|(section, rows)| {
			rows.iter()
				.position(|row| row.id == id)
				.map(|row| Address::new(row, Section(section)))
		})
	}

	/// Declares the row count `section` must have after the next batch.
	///
	/// This is the host's data source speaking: a batch that produces a
	/// different count is rejected with [`SurfaceFault::CountMismatch`].
	pub fn expect_len(&mut self, section: Section, len: usize) {
		self.expected.insert(section, len);
	}

	/// Returns the selected row, if any.
	pub fn selected(&self) -> Option<Address> {
		self.selected
	}

	/// Selects `address`, or clears the selection with [`None`].
	pub fn select(&mut self, address: Option<Address>) {
		self.selected = address;
	}

	/// Returns the scroll offset, counted in rows across all sections.
	pub fn offset(&self) -> usize {
		self.offset
	}

	fn alloc_id(&mut self) -> RowId {
		let id = RowId(self.next_id);
		self.next_id += 1;
		id
	}

	/// Records a mutation, or remembers it as a fault when no batch is open.
	fn stage(&mut self, kind: UpdateKind, push: impl FnOnce(&mut Staged)) {
		if self.depth == 0 {
			debug!(%kind, "Row update issued outside of a batch");
			self.outside.get_or_insert(kind);
			return;
		}
		push(&mut self.staged);
	}

	/// Validates the staged batch against every section, then commits it.
	fn reconcile(&mut self, staged: Staged) -> Result<(), SurfaceFault> {
		let expected = mem::take(&mut self.expected);

		let mut sections = staged.sections();
		sections.extend(expected.keys().copied());

		let mut next_id = self.next_id;
		let mut planned = Vec::with_capacity(sections.len());
		for section in sections {
			let old = self.rows(section).ok_or(SurfaceFault::UnknownSection {
				section,
				sections: self.sections.len(),
			})?;
			let expected = expected.get(&section).copied();
			let (rows, id) = plan_section(section, old, &staged, expected, next_id)?;
			trace!(%section, before = old.len(), after = rows.len(), "Planned section");
			next_id = id;
			planned.push((section, rows));
		}

		let selected_id = self.selected.and_then(|address| self.row(address)).map(|row| row.id);
		for (section, rows) in planned {
			self.sections[section.index()] = rows;
		}
		self.next_id = next_id;

		self.selected = selected_id.and_then(|id| self.position_of(id));
		self.offset = self.offset.min(self.total_len().saturating_sub(1));
		Ok(())
	}
}

impl ListSurface for ListModel {
	fn begin_updates(&mut self) {
		self.depth += 1;
	}

	fn in_batch(&self) -> bool {
		self.depth > 0
	}

	fn delete_items(&mut self, addresses: &[Address]) {
		self.stage(UpdateKind::Delete, |staged| staged.deletions.extend_from_slice(addresses));
	}

	fn insert_items(&mut self, addresses: &[Address]) {
		self.stage(UpdateKind::Insert, |staged| staged.insertions.extend_from_slice(addresses));
	}

	fn reload_items(&mut self, addresses: &[Address]) {
		self.stage(UpdateKind::Reload, |staged| staged.reloads.extend_from_slice(addresses));
	}

	fn move_item(&mut self, from: Address, to: Address) {
		self.stage(UpdateKind::MoveFrom, |staged| staged.moves.push(MovePair::new(from, to)));
	}

	fn end_updates(&mut self) -> Result<(), SurfaceFault> {
		if self.depth == 0 {
			return Err(SurfaceFault::UnbalancedEnd);
		}
		self.depth -= 1;
		if self.depth > 0 {
			return Ok(());
		}

		let staged = mem::take(&mut self.staged);
		if let Some(kind) = self.outside.take() {
			self.expected.clear();
			return Err(SurfaceFault::OutsideBatch { kind });
		}
		if staged.is_empty() && self.expected.is_empty() {
			return Ok(());
		}

		self.reconcile(staged).inspect_err(|e| debug!(error = %e, "Rejected batch"))
	}
}
