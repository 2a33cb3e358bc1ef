//! Word lists kept sorted by length so a length range is one contiguous slice

use crate::filter::FilterError;

/// A category's words ordered by ascending length (in characters)
///
/// Words of equal length keep no particular order.
#[derive(Debug, Clone, Default)]
pub struct LengthSortedCategory {
	words: Vec<String>,
	/// `lengths[i]` is the character count of `words[i]`
	lengths: Vec<usize>,
}

impl LengthSortedCategory {
	#[must_use]
	pub fn new(mut words: Vec<String>) -> Self {
		words.sort_by_cached_key(|word| word.chars().count());
		let lengths = words.iter().map(|word| word.chars().count()).collect();
		Self { words, lengths }
	}

	#[must_use]
	pub fn len(&self) -> usize {
		self.words.len()
	}

	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.words.is_empty()
	}

	/// All words, shortest first
	#[must_use]
	pub fn words(&self) -> &[String] {
		&self.words
	}

	/// Words whose length lies in `[min, max]`, a missing bound leaves that
	/// side open.
	#[must_use]
	pub fn slice(&self, min: Option<usize>, max: Option<usize>) -> &[String] {
		let start = min.map_or(0, |min| self.first_at_least(min));
		let end = max.map_or(self.words.len(), |max| {
			self.first_at_least(max.saturating_add(1))
		});

		self.words.get(start..end).unwrap_or_default()
	}

	/// Index of the first word at least `length` characters long
	fn first_at_least(&self, length: usize) -> usize {
		self.lengths.partition_point(|&len| len < length)
	}
}

impl<S: Into<String>> FromIterator<S> for LengthSortedCategory {
	fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
		Self::new(iter.into_iter().map(Into::into).collect())
	}
}

/// How raw length bounds are turned into [`LengthBounds`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LengthMode {
	/// A maximum of `0` means "no maximum" and is never compared against the
	/// minimum
	#[default]
	Lenient,
	/// A maximum of `0` only admits empty words and must not be below the
	/// minimum
	Strict,
}

/// Validated length bounds, `None` is unbounded
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LengthBounds {
	pub min: Option<usize>,
	pub max: Option<usize>,
}

impl LengthBounds {
	/// Validates bounds as supplied by a caller.
	///
	/// Validation happens on the raw values, then negative bounds are widened
	/// to unbounded.
	///
	/// # Errors
	///
	/// [`FilterError::InvalidLengthBounds`] when both bounds are given and the
	/// minimum exceeds the maximum (see [`LengthMode`] for `max == 0`).
	pub fn new(min: Option<i64>, max: Option<i64>, mode: LengthMode) -> Result<Self, FilterError> {
		if let (Some(min), Some(max)) = (min, max) {
			let unbounded_max = mode == LengthMode::Lenient && max == 0;
			if min > max && !unbounded_max {
				return Err(FilterError::InvalidLengthBounds { min, max });
			}
		}

		let max = match (mode, max) {
			(LengthMode::Lenient, Some(0)) => None,
			(_, max) => max,
		};

		Ok(Self {
			min: min.and_then(|min| usize::try_from(min).ok()),
			max: max.and_then(|max| usize::try_from(max).ok()),
		})
	}

	/// Whether `word` fits inside the bounds
	#[must_use]
	pub fn contains(&self, word: &str) -> bool {
		let len = word.chars().count();
		self.min.map_or(true, |min| len >= min) && self.max.map_or(true, |max| len <= max)
	}
}
