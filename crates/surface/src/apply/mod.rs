//! Issuing classified batches against a [`ListSurface`].

use listpatch_primitives::{ClassifiedBatch, Edit, Section, classify};
use tracing::{debug_span, trace, warn};

use crate::error::ApplyError;
use crate::options::{MoveStrategy, UpdateOptions};
use crate::surface::ListSurface;

/// Callback fired once a batch region has concluded.
///
/// The flag is `true` when the surface integrated the batch.
pub type Completion<'a> = Box<dyn FnOnce(bool) + 'a>;

/// Runs `body` inside a single batch region of `surface`.
///
/// `on_complete` fires exactly once, after the region is closed, with the
/// outcome of [`ListSurface::end_updates`].
///
/// The region must be the outermost one. If `surface` is already inside a
/// batch, nothing is issued, `on_complete` fires with `false` and
/// [`ApplyError::NestedBatch`] is returned.
pub fn perform_batch<S, F>(
	surface: &mut S,
	body: F,
	on_complete: Option<Completion<'_>>,
) -> Result<(), ApplyError>
where
	S: ListSurface + ?Sized,
	F: FnOnce(&mut S),
{
	if surface.in_batch() {
		warn!("List surface already inside a batch, refusing to nest");
		if let Some(on_complete) = on_complete {
			on_complete(false);
		}
		return Err(ApplyError::NestedBatch);
	}

	surface.begin_updates();
	body(&mut *surface);
	let result = surface.end_updates().map_err(ApplyError::from);

	if let Err(e) = &result {
		warn!(error = %e, "List surface rejected batch");
	}
	if let Some(on_complete) = on_complete {
		on_complete(result.is_ok());
	}
	result
}

/// Applies classified batches to list surfaces.
///
/// Calls are issued in a fixed order inside one batch region: deletions,
/// insertions, substitutions, then one move call per move. A class with no
/// entries is skipped entirely.
#[derive(Debug, Default, Clone, Copy)]
pub struct BatchApplier {
	options: UpdateOptions,
}

impl BatchApplier {
	/// Creates an applier with the given options.
	pub fn new(options: UpdateOptions) -> Self {
		Self { options }
	}

	/// Returns the options this applier was built with.
	pub fn options(&self) -> &UpdateOptions {
		&self.options
	}

	/// Issues `batch` against `surface` as one atomic batch region.
	///
	/// An empty batch issues no surface calls and completes successfully
	/// right away.
	pub fn apply<S>(
		&self,
		batch: ClassifiedBatch,
		surface: &mut S,
		on_complete: Option<Completion<'_>>,
	) -> Result<(), ApplyError>
	where
		S: ListSurface + ?Sized,
	{
		let batch = match self.options.moves {
			MoveStrategy::Native => batch,
			MoveStrategy::DeleteInsert => batch.decompose_moves(),
		};

		if batch.is_empty() {
			trace!("Empty batch, nothing to apply");
			if let Some(on_complete) = on_complete {
				on_complete(true);
			}
			return Ok(());
		}

		let span = debug_span!(
			"apply_batch",
			deletions = batch.deletions.len(),
			insertions = batch.insertions.len(),
			substitutions = batch.substitutions.len(),
			moves = batch.moves.len(),
		);
		let _guard = span.enter();

		perform_batch(
			surface,
			|surface| {
				if batch.deletions.is_empty() {
					trace!("No deletions");
				} else {
					surface.delete_items(&batch.deletions);
				}
				if batch.insertions.is_empty() {
					trace!("No insertions");
				} else {
					surface.insert_items(&batch.insertions);
				}
				if batch.substitutions.is_empty() {
					trace!("No substitutions");
				} else {
					surface.reload_items(&batch.substitutions);
				}
				for m in &batch.moves {
					surface.move_item(m.from, m.to);
				}
			},
			on_complete,
		)
	}

	/// Classifies `edits` into `section` and applies the result to `surface`.
	///
	/// An empty edit script is a no-op: no surface calls are made, and
	/// `on_complete` only fires when
	/// [`complete_on_empty`](UpdateOptions::complete_on_empty) is set.
	pub fn update_list<S>(
		&self,
		surface: &mut S,
		edits: &[Edit],
		section: Section,
		on_complete: Option<Completion<'_>>,
	) -> Result<(), ApplyError>
	where
		S: ListSurface + ?Sized,
	{
		if edits.is_empty() {
			trace!(%section, "Empty edit script, skipping update");
			if self.options.complete_on_empty
				&& let Some(on_complete) = on_complete
			{
				on_complete(true);
			}
			return Ok(());
		}

		self.apply(classify(edits, section), surface, on_complete)
	}
}

/// Edit-script entry points available on every [`ListSurface`].
///
/// These use [`BatchApplier::default()`]; build a [`BatchApplier`] directly
/// to change [`UpdateOptions`].
pub trait UpdateList: ListSurface {
	/// Applies `edits` to a single-section list.
	fn update_list(
		&mut self,
		edits: &[Edit],
		on_complete: Option<Completion<'_>>,
	) -> Result<(), ApplyError> {
		self.update_list_in_section(edits, Section::default(), on_complete)
	}

	/// Applies `edits` with every address placed in `section`.
	fn update_list_in_section(
		&mut self,
		edits: &[Edit],
		section: Section,
		on_complete: Option<Completion<'_>>,
	) -> Result<(), ApplyError> {
		BatchApplier::default().update_list(self, edits, section, on_complete)
	}
}

impl<S: ListSurface + ?Sized> UpdateList for S {}

#[cfg(test)]
mod tests;
