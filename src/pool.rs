//! High level interface over named word categories
//!
//! Entrypoint methods are
//! - [`WordPool::filter`]: every word matching a [`FilterSpec`](crate::FilterSpec)
//! - [`WordPool::random_words`]: a random selection of those words
//! - [`WordPool::word`]: a single random word

use crate::{
	category::{LengthMode, LengthSortedCategory},
	trie::{PrefixIndex, SuffixIndex},
	wordlist::{CategorySource, DefaultList},
};
use std::{collections::BTreeMap, io};

/// Named categories of words, immutable once built
#[derive(Debug)]
pub struct WordPool {
	pub(crate) categories: BTreeMap<String, LengthSortedCategory>,
	/// Tries over every word of every category, when enabled
	pub(crate) affixes: Option<AffixIndex>,
	pub(crate) length_mode: LengthMode,
}

/// Forward and reversed tries over the whole pool
#[derive(Debug, Default)]
pub(crate) struct AffixIndex {
	pub(crate) prefixes: PrefixIndex,
	pub(crate) suffixes: SuffixIndex,
}

/// Ways initializing a [`WordPool`] could go wrong
#[derive(Debug, thiserror::Error)]
pub enum InitializeError {
	/// Could not parse a word list
	#[error("Could not parse word list: {0}")]
	Parser(String),

	/// Could not correctly open a given word list
	#[error(transparent)]
	Io(#[from] io::Error),
}

/// Constructors
impl WordPool {
	#[must_use]
	pub fn builder() -> WordPoolBuilder {
		WordPoolBuilder::default()
	}

	/// Categories `noun`, `verb` and `adjective` filled from the bundled lists
	///
	/// # Errors
	///
	/// Will error if a bundled list cannot be parsed.
	pub fn with_defaults(indexed: bool) -> Result<Self, InitializeError> {
		Self::builder()
			.category("noun", DefaultList::Nouns)
			.category("verb", DefaultList::Verbs)
			.category("adjective", DefaultList::Adjectives)
			.indexed(indexed)
			.build()
	}

	/// # Errors
	///
	/// Will error if a [`CategorySource::Default`] list cannot be parsed.
	pub fn from_categories<N, S, I>(categories: I) -> Result<Self, InitializeError>
	where
		N: Into<String>,
		S: Into<CategorySource>,
		I: IntoIterator<Item = (N, S)>,
	{
		categories
			.into_iter()
			.fold(Self::builder(), |builder, (name, source)| builder.category(name, source))
			.build()
	}
}

/// Accessors
impl WordPool {
	/// Names of the configured categories, sorted
	pub fn categories(&self) -> impl Iterator<Item = &str> {
		self.categories.keys().map(String::as_str)
	}

	#[must_use]
	pub fn category(&self, name: &str) -> Option<&LengthSortedCategory> {
		self.categories.get(name)
	}

	/// Whether prefix and suffix tries were built
	#[must_use]
	pub const fn is_indexed(&self) -> bool {
		self.affixes.is_some()
	}

	#[must_use]
	pub const fn length_mode(&self) -> LengthMode {
		self.length_mode
	}
}

/// Collects category sources and switches before building a [`WordPool`]
#[derive(Debug, Default)]
#[must_use]
pub struct WordPoolBuilder {
	sources: BTreeMap<String, CategorySource>,
	indexed: bool,
	length_mode: LengthMode,
}

impl WordPoolBuilder {
	/// Registers a category, replacing any earlier one with the same name
	pub fn category(mut self, name: impl Into<String>, source: impl Into<CategorySource>) -> Self {
		self.sources.insert(name.into(), source.into());
		self
	}

	/// Builds prefix and suffix tries so `starts_with` and `ends_with`
	/// filters become lookups instead of scans
	pub fn indexed(mut self, indexed: bool) -> Self {
		self.indexed = indexed;
		self
	}

	/// Uses [`LengthMode::Strict`] instead of [`LengthMode::Lenient`]
	pub fn strict_lengths(mut self, strict: bool) -> Self {
		self.length_mode = if strict {
			LengthMode::Strict
		} else {
			LengthMode::Lenient
		};
		self
	}

	/// # Errors
	///
	/// Will error if a [`CategorySource::Default`] list cannot be parsed.
	pub fn build(self) -> Result<WordPool, InitializeError> {
		let mut categories = BTreeMap::new();
		for (name, source) in self.sources {
			let words = source.resolve()?;
			log::debug!("category `{name}` holds {} words", words.len());
			categories.insert(name, LengthSortedCategory::new(words));
		}

		let affixes = self.indexed.then(|| {
			let mut index = AffixIndex::default();
			for word in categories.values().flat_map(LengthSortedCategory::words) {
				index.prefixes.insert(word);
				index.suffixes.insert(word);
			}
			log::debug!("indexed {} distinct words", index.prefixes.len());
			index
		});

		Ok(WordPool {
			categories,
			affixes,
			length_mode: self.length_mode,
		})
	}
}
