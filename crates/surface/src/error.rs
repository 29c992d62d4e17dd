//! Error types for batch application and option parsing.

use listpatch_primitives::{Address, Section};
use thiserror::Error;

/// The surface call a fault is attributed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display)]
#[strum(serialize_all = "snake_case")]
pub enum UpdateKind {
	/// [`ListSurface::delete_items`](crate::ListSurface::delete_items).
	Delete,
	/// [`ListSurface::insert_items`](crate::ListSurface::insert_items).
	Insert,
	/// [`ListSurface::reload_items`](crate::ListSurface::reload_items).
	Reload,
	/// The origin of [`ListSurface::move_item`](crate::ListSurface::move_item).
	MoveFrom,
	/// The destination of [`ListSurface::move_item`](crate::ListSurface::move_item).
	MoveTo,
}

/// A precondition violation reported by a list surface.
///
/// Faults mean the edit script did not describe the surface's actual state.
/// They are not recoverable by retrying: the same batch will fail again.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SurfaceFault {
	/// An address lies outside the index space it refers to.
	#[error("{kind} at {address} is out of bounds (section has {len} rows)")]
	OutOfBounds {
		/// The offending call.
		kind: UpdateKind,
		/// The offending address.
		address: Address,
		/// Row count of the index space the address was checked against.
		len: usize,
	},

	/// An address names a section the surface does not have.
	#[error("section {section} does not exist (surface has {sections} sections)")]
	UnknownSection {
		/// The missing section.
		section: Section,
		/// Number of sections on the surface.
		sections: usize,
	},

	/// Two calls in one batch claim the same row.
	#[error("{second} at {address} conflicts with an earlier {first}")]
	Conflict {
		/// The contested address.
		address: Address,
		/// The call that claimed the address first.
		first: UpdateKind,
		/// The call that claimed it again.
		second: UpdateKind,
	},

	/// The row count after the batch disagrees with what the host declared.
	#[error("section {section} should have {expected} rows after the batch, but has {actual}")]
	CountMismatch {
		/// The affected section.
		section: Section,
		/// Row count declared by the host.
		expected: usize,
		/// Row count the batch produces.
		actual: usize,
	},

	/// A mutation was issued outside of a batch region.
	#[error("{kind} issued outside of a batch")]
	OutsideBatch {
		/// The offending call.
		kind: UpdateKind,
	},

	/// `end_updates` was called without a matching `begin_updates`.
	#[error("end_updates called without a matching begin_updates")]
	UnbalancedEnd,

	/// A host-specific fault.
	#[error("{0}")]
	Rejected(String),
}

/// Errors returned by [`BatchApplier`](crate::BatchApplier).
///
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApplyError {
	/// The surface rejected the batch.
	#[error("list surface rejected batch: {0}")]
	Surface(#[from] SurfaceFault),

	/// The surface already had a batch region open, so the outcome of the
	/// batch would not be known when the applier's region closed.
	#[error("list surface is already inside a batch region")]
	NestedBatch,
}

/// Errors that can occur when parsing [`UpdateOptions`](crate::UpdateOptions).
#[derive(Debug, Error)]
pub enum ConfigError {
	/// The options document is not valid TOML or has unexpected fields.
	#[error("invalid update options: {0}")]
	Toml(#[from] toml::de::Error),
}
