//! Check words against the bundled profanity list

use crate::{pool::InitializeError, wordlist::DefaultList};
use std::collections::HashSet;

/// Words of [`DefaultList::Profanities`], compared case-insensitively
#[derive(Debug, Clone)]
pub struct ProfanityFilter {
	words: HashSet<String>,
}

impl ProfanityFilter {
	/// # Errors
	///
	/// Will error if the bundled list cannot be parsed.
	pub fn new() -> Result<Self, InitializeError> {
		let list = DefaultList::Profanities.load()?;
		Ok(Self::from_words(list.words()))
	}

	/// Filter over a custom list of profanities
	pub fn from_words<S: AsRef<str>>(words: impl IntoIterator<Item = S>) -> Self {
		let words = words.into_iter().map(|word| normalize(word.as_ref())).collect();
		Self { words }
	}

	/// Whether `word`, trimmed and lowercased, is a profanity
	#[must_use]
	pub fn is_profanity(&self, word: &str) -> bool {
		self.words.contains(&normalize(word))
	}

	/// Keeps the words which are not profanities, in order
	pub fn filter<'a, I>(&'a self, words: I) -> impl Iterator<Item = I::Item> + 'a
	where
		I: IntoIterator,
		I::IntoIter: 'a,
		I::Item: AsRef<str>,
	{
		words
			.into_iter()
			.filter(move |word| !self.is_profanity(word.as_ref()))
	}
}

fn normalize(word: &str) -> String {
	word.trim().to_lowercase()
}
