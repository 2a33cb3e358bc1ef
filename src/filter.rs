//! Logic of the [`WordPool`] to select every word matching a [`FilterSpec`]
//!
//! Cheap filters run first: category selection, length bisection and, when
//! the pool is indexed, trie lookups intersected with the candidates. What is
//! left (patterns, spaces, and affixes of an unindexed pool) is checked in a
//! single pass over the remaining candidates.

use crate::{
	category::{LengthBounds, LengthSortedCategory},
	WordPool,
};
use regex::Regex;
use std::collections::BTreeSet;

/// Informs why a filter could not be applied
#[derive(Debug, thiserror::Error)]
pub enum FilterError {
	/// Minimum length is above the maximum length
	#[error("minimum length {min} cannot be greater than maximum length {max}")]
	InvalidLengthBounds { min: i64, max: i64 },

	/// Requested category was never configured
	#[error("`{0}` is an invalid category")]
	UnknownCategory(String),

	/// Pattern does not compile
	#[error("invalid pattern: {0}")]
	InvalidPattern(#[from] regex::Error),
}

/// Constraints a word must satisfy
///
/// Empty `starts_with`, `ends_with` and `categories` do not constrain
/// anything, an empty category list selects every category.
///
/// ```
/// use wordpick::FilterSpec;
///
/// let spec = FilterSpec::default()
/// 	.starts_with("a")
/// 	.categories(["noun"])
/// 	.min_length(3);
/// assert_eq!(spec.min_length, Some(3));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[must_use]
pub struct FilterSpec {
	pub starts_with: String,
	pub ends_with: String,
	pub categories: Vec<String>,
	/// Negative values are ignored
	pub min_length: Option<i64>,
	/// Negative values are ignored, `0` is ignored too unless the pool is
	/// built with strict lengths
	pub max_length: Option<i64>,
	/// Regular expression the whole word must match
	pub pattern: Option<String>,
	/// Drop words containing a space
	pub exclude_spaces: bool,
}

impl FilterSpec {
	pub fn starts_with(mut self, prefix: impl Into<String>) -> Self {
		self.starts_with = prefix.into();
		self
	}

	pub fn ends_with(mut self, suffix: impl Into<String>) -> Self {
		self.ends_with = suffix.into();
		self
	}

	pub fn categories<I, S>(mut self, categories: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		self.categories = categories.into_iter().map(Into::into).collect();
		self
	}

	pub fn min_length(mut self, min: i64) -> Self {
		self.min_length = Some(min);
		self
	}

	pub fn max_length(mut self, max: i64) -> Self {
		self.max_length = Some(max);
		self
	}

	pub fn pattern(mut self, pattern: impl Into<String>) -> Self {
		self.pattern = Some(pattern.into());
		self
	}

	pub fn exclude_spaces(mut self, exclude: bool) -> Self {
		self.exclude_spaces = exclude;
		self
	}
}

/// Methods for filtering the pool
impl WordPool {
	/// Every distinct word matching `spec`, sorted
	///
	/// A word shared by several selected categories appears once.
	///
	/// # Errors
	/// Check [`FilterError`] to see all the ways this function breaks
	pub fn filter(&self, spec: &FilterSpec) -> Result<Vec<String>, FilterError> {
		let bounds = LengthBounds::new(spec.min_length, spec.max_length, self.length_mode)?;

		let mut candidates = BTreeSet::new();
		for category in self.select_categories(&spec.categories)? {
			candidates.extend(category.slice(bounds.min, bounds.max).iter().map(String::as_str));
		}
		log::trace!("{} candidates within length bounds", candidates.len());

		if let Some(affixes) = &self.affixes {
			if !spec.starts_with.is_empty() {
				let hits = affixes.prefixes.words_with_prefix(&spec.starts_with);
				candidates.retain(|word| hits.contains(*word));
			}
			if !spec.ends_with.is_empty() {
				let hits = affixes.suffixes.words_with_suffix(&spec.ends_with);
				candidates.retain(|word| hits.contains(*word));
			}
			log::trace!("{} candidates after affix lookups", candidates.len());
		}

		let scan = Scan::new(spec, self.affixes.is_none())?;
		if !scan.is_empty() {
			candidates.retain(|word| scan.accepts(word));
		}

		log::debug!("{} words match {spec:?}", candidates.len());
		Ok(candidates.into_iter().map(ToOwned::to_owned).collect())
	}

	/// Requested categories, or all of them when none are named
	fn select_categories<'a>(
		&'a self,
		names: &[String],
	) -> Result<Vec<&'a LengthSortedCategory>, FilterError> {
		if names.is_empty() {
			return Ok(self.categories.values().collect());
		}

		names
			.iter()
			.map(|name| {
				self.categories
					.get(name)
					.ok_or_else(|| FilterError::UnknownCategory(name.clone()))
			})
			.collect()
	}
}

/// Predicates that need to look at every candidate
#[derive(Debug, Default)]
struct Scan<'s> {
	pattern: Option<Regex>,
	exclude_spaces: bool,
	starts_with: Option<&'s str>,
	ends_with: Option<&'s str>,
}

impl<'s> Scan<'s> {
	/// `with_affixes` is set when no trie answered the affix constraints
	fn new(spec: &'s FilterSpec, with_affixes: bool) -> Result<Self, FilterError> {
		let pattern = spec
			.pattern
			.as_deref()
			.map(|pattern| Regex::new(&format!("^(?:{pattern})$")))
			.transpose()?;

		let affix = |value: &'s str| (with_affixes && !value.is_empty()).then_some(value);

		Ok(Self {
			pattern,
			exclude_spaces: spec.exclude_spaces,
			starts_with: affix(&spec.starts_with),
			ends_with: affix(&spec.ends_with),
		})
	}

	const fn is_empty(&self) -> bool {
		self.pattern.is_none()
			&& !self.exclude_spaces
			&& self.starts_with.is_none()
			&& self.ends_with.is_none()
	}

	fn accepts(&self, word: &str) -> bool {
		self.pattern.as_ref().map_or(true, |pattern| pattern.is_match(word))
			&& !(self.exclude_spaces && word.contains(' '))
			&& self.starts_with.map_or(true, |prefix| word.starts_with(prefix))
			&& self.ends_with.map_or(true, |suffix| word.ends_with(suffix))
	}
}
