#![allow(dead_code)]

use std::collections::BTreeSet;
use wordpick::{InitializeError, WordPool};

pub(crate) fn init_logger() {
	let _ = pretty_env_logger::try_init();
}

/// Small pool with a word shared by two categories and words with spaces
pub(crate) fn small_pool(indexed: bool) -> Result<WordPool, InitializeError> {
	init_logger();

	WordPool::builder()
		.category("noun", ["apple", "ant", "orange", "contact lens", "red"])
		.category("adjective", ["angry", "red", "tall", "wide open"])
		.indexed(indexed)
		.build()
}

pub(crate) fn set(words: &[&str]) -> BTreeSet<String> {
	words.iter().map(ToString::to_string).collect()
}

pub(crate) fn as_set(words: Vec<String>) -> BTreeSet<String> {
	words.into_iter().collect()
}
