use std::fmt;

/// An offset within a flat ordered sequence of rows.
///
/// Edit scripts express every position in this coordinate space; a
/// [`Section`] is attached only when the position is turned into an
/// [`Address`].
pub type Position = usize;

/// Identifies an independently-addressed group of rows on a list surface.
///
/// Unqualified addresses use [`Section::default()`], which is section 0.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Section(pub usize);

impl Section {
	/// Returns the zero-based index of this section.
	pub const fn index(self) -> usize {
		self.0
	}
}

impl From<usize> for Section {
	fn from(index: usize) -> Self {
		Self(index)
	}
}

impl fmt::Display for Section {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.0)
	}
}

/// A row position qualified by the section it lives in.
///
/// Ordering compares the section first, then the row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Address {
	/// The section the row belongs to.
	pub section: Section,
	/// Zero-based row index within the section.
	pub row: Position,
}

impl Address {
	/// Creates an address for `row` in `section`.
	pub const fn new(row: Position, section: Section) -> Self {
		Self { section, row }
	}

	/// Creates an address for `row` in the default section.
	pub fn flat(row: Position) -> Self {
		Self::new(row, Section::default())
	}
}

impl fmt::Display for Address {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}:{}", self.section, self.row)
	}
}
