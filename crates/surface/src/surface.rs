use listpatch_primitives::Address;

use crate::error::SurfaceFault;

/// A stateful, position-indexed list that accepts batched row updates.
///
/// Implementations own the list's index space. Everything issued between
/// [`begin_updates`](Self::begin_updates) and
/// [`end_updates`](Self::end_updates) is one batch region and must be
/// reconciled as a single pass: either every call is reflected or none is.
///
/// Deletions and move origins address the index space before the batch;
/// insertions, reloads and move destinations address the index space after it.
pub trait ListSurface {
	/// Opens a batch region.
	fn begin_updates(&mut self);

	/// Returns true while a batch region is open.
	///
	/// Regions may nest; only closing the outermost one integrates the batch.
	fn in_batch(&self) -> bool;

	/// Removes the rows at `addresses`.
	fn delete_items(&mut self, addresses: &[Address]);

	/// Adds rows at `addresses`.
	fn insert_items(&mut self, addresses: &[Address]);

	/// Reloads the content of the rows at `addresses`.
	fn reload_items(&mut self, addresses: &[Address]);

	/// Relocates the row at `from` to `to`.
	fn move_item(&mut self, from: Address, to: Address);

	/// Closes the batch region and integrates it.
	///
	/// This is where a surface reports any inconsistency between the batch
	/// and its current contents.
	fn end_updates(&mut self) -> Result<(), SurfaceFault>;
}
