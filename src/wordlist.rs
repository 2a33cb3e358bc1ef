//! Plain text word lists and the lists bundled with the crate
//!
//! The format is one word per line. Trailing whitespace is stripped and
//! blank lines are skipped, everything else is kept as is.

use crate::pool::InitializeError;
use nom::{
	character::complete::{line_ending, not_line_ending},
	combinator::map,
	multi::separated_list0,
	IResult, Parser,
};
use nom_supreme::ParserExt;
use std::{fmt, fs::File, io::Read, path::Path};

/// An ordered sequence of words read from text
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordList {
	words: Vec<String>,
}

impl WordList {
	/// # Errors
	///
	/// Will error if `content` has malformed line endings.
	pub fn new(content: &str) -> Result<Self, InitializeError> {
		let parser_err = |e: nom::Err<nom::error::Error<_>>| InitializeError::Parser(e.to_string());

		let (_, lines) = parse_lines.all_consuming().parse(content).map_err(parser_err)?;
		let words = lines
			.into_iter()
			.filter(|line| !line.is_empty())
			.map(ToOwned::to_owned)
			.collect();

		Ok(Self { words })
	}

	/// # Errors
	///
	/// Will error if the file cannot be read or parsed.
	pub fn file(path: &Path) -> Result<Self, InitializeError> {
		let mut file = File::open(path)?;
		let mut buffer = String::new();
		file.read_to_string(&mut buffer)?;
		Self::new(&buffer)
	}

	#[must_use]
	pub fn words(&self) -> &[String] {
		&self.words
	}

	#[must_use]
	pub fn into_words(self) -> Vec<String> {
		self.words
	}
}

fn parse_lines(i: &str) -> IResult<&str, Vec<&str>> {
	separated_list0(line_ending, map(not_line_ending, str::trim_end))(i)
}

/// Word lists shipped with the crate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DefaultList {
	Nouns,
	Verbs,
	Adjectives,
	Profanities,
}

impl DefaultList {
	pub const ALL: [Self; 4] = [Self::Nouns, Self::Verbs, Self::Adjectives, Self::Profanities];

	const fn content(self) -> &'static str {
		match self {
			Self::Nouns => include_str!("../assets/nounlist.txt"),
			Self::Verbs => include_str!("../assets/verblist.txt"),
			Self::Adjectives => include_str!("../assets/adjectivelist.txt"),
			Self::Profanities => include_str!("../assets/profanitylist.txt"),
		}
	}

	/// # Errors
	///
	/// Will error if the bundled list is malformed.
	pub fn load(self) -> Result<WordList, InitializeError> {
		WordList::new(self.content())
	}
}

impl fmt::Display for DefaultList {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Nouns => write!(f, "nouns"),
			Self::Verbs => write!(f, "verbs"),
			Self::Adjectives => write!(f, "adjectives"),
			Self::Profanities => write!(f, "profanities"),
		}
	}
}

/// Where the words of a category come from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategorySource {
	/// Words given by the caller
	Explicit(Vec<String>),
	/// One of the bundled lists
	Default(DefaultList),
}

impl CategorySource {
	pub(crate) fn resolve(self) -> Result<Vec<String>, InitializeError> {
		match self {
			Self::Explicit(words) => Ok(words),
			Self::Default(list) => list.load().map(WordList::into_words),
		}
	}
}

impl From<DefaultList> for CategorySource {
	fn from(list: DefaultList) -> Self {
		Self::Default(list)
	}
}

impl From<WordList> for CategorySource {
	fn from(list: WordList) -> Self {
		Self::Explicit(list.into_words())
	}
}

impl From<Vec<String>> for CategorySource {
	fn from(words: Vec<String>) -> Self {
		Self::Explicit(words)
	}
}

impl From<&[&str]> for CategorySource {
	fn from(words: &[&str]) -> Self {
		Self::Explicit(words.iter().map(ToString::to_string).collect())
	}
}

impl<const N: usize> From<[&str; N]> for CategorySource {
	fn from(words: [&str; N]) -> Self {
		Self::Explicit(words.iter().map(ToString::to_string).collect())
	}
}
