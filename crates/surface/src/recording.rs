//! A [`ListSurface`] that records every call, for verifying call order.

use listpatch_primitives::Address;

use crate::error::SurfaceFault;
use crate::surface::ListSurface;

/// A single call received by a [`RecordingSurface`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SurfaceCall {
	/// [`ListSurface::begin_updates`].
	Begin,
	/// [`ListSurface::delete_items`].
	Delete(Vec<Address>),
	/// [`ListSurface::insert_items`].
	Insert(Vec<Address>),
	/// [`ListSurface::reload_items`].
	Reload(Vec<Address>),
	/// [`ListSurface::move_item`].
	Move {
		/// Origin address.
		from: Address,
		/// Destination address.
		to: Address,
	},
	/// [`ListSurface::end_updates`].
	End,
}

/// A surface that keeps an ordered log of the calls it receives.
///
/// It never inspects the batch. A fault set with
/// [`fail_with`](Self::fail_with) is returned from the next
/// [`end_updates`](ListSurface::end_updates).
#[derive(Debug, Default)]
pub struct RecordingSurface {
	calls: Vec<SurfaceCall>,
	fault: Option<SurfaceFault>,
	depth: usize,
}

impl RecordingSurface {
	/// Creates a surface with an empty log.
	pub fn new() -> Self {
		Self::default()
	}

	/// Makes the next `end_updates` fail with `fault`.
	pub fn fail_with(mut self, fault: SurfaceFault) -> Self {
		self.fault = Some(fault);
		self
	}

	/// Returns the calls received so far, oldest first.
	pub fn calls(&self) -> &[SurfaceCall] {
		&self.calls
	}

	/// Takes the recorded calls, leaving the log empty.
	pub fn take_calls(&mut self) -> Vec<SurfaceCall> {
		std::mem::take(&mut self.calls)
	}
}

impl ListSurface for RecordingSurface {
	fn begin_updates(&mut self) {
		self.calls.push(SurfaceCall::Begin);
		self.depth += 1;
	}

	fn in_batch(&self) -> bool {
		self.depth > 0
	}

	fn delete_items(&mut self, addresses: &[Address]) {
		self.calls.push(SurfaceCall::Delete(addresses.to_vec()));
	}

	fn insert_items(&mut self, addresses: &[Address]) {
		self.calls.push(SurfaceCall::Insert(addresses.to_vec()));
	}

	fn reload_items(&mut self, addresses: &[Address]) {
		self.calls.push(SurfaceCall::Reload(addresses.to_vec()));
	}

	fn move_item(&mut self, from: Address, to: Address) {
		self.calls.push(SurfaceCall::Move { from, to });
	}

	fn end_updates(&mut self) -> Result<(), SurfaceFault> {
		self.calls.push(SurfaceCall::End);
		self.depth = self.depth.saturating_sub(1);
		match self.fault.take() {
			Some(fault) => Err(fault),
			None => Ok(()),
		}
	}
}
