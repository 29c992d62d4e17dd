use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// How moves are handed to the surface.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MoveStrategy {
	/// One [`move_item`](crate::ListSurface::move_item) call per move.
	#[default]
	Native,
	/// Each move becomes a deletion at its origin and an insertion at its
	/// destination, for surfaces that cannot relocate rows.
	DeleteInsert,
}

/// Tuning for [`BatchApplier`](crate::BatchApplier).
///
/// Deserializes from a table such as:
///
/// ```toml
/// moves = "delete-insert"
/// complete-on-empty = true
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields, rename_all = "kebab-case")]
pub struct UpdateOptions {
	/// How moves reach the surface.
	pub moves: MoveStrategy,
	/// Fire the completion callback with `true` when the edit script is
	/// empty. When unset, an empty script leaves the callback untouched.
	pub complete_on_empty: bool,
}

impl UpdateOptions {
	/// Parses options from a TOML document. Missing keys keep their defaults.
	pub fn from_toml(src: &str) -> Result<Self, ConfigError> {
		Ok(toml::from_str(src)?)
	}

	/// Returns these options with `moves` replaced.
	pub fn with_moves(mut self, moves: MoveStrategy) -> Self {
		self.moves = moves;
		self
	}

	/// Returns these options with `complete_on_empty` replaced.
	pub fn with_complete_on_empty(mut self, complete_on_empty: bool) -> Self {
		self.complete_on_empty = complete_on_empty;
		self
	}
}
