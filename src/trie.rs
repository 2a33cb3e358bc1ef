//! Tries answering "every stored word starting (or ending) with" queries
//!
//! Nodes live in an arena and refer to their children by index, the root is
//! always the first node.

use std::collections::{BTreeSet, HashMap};

/// Arena slot of the root node
const ROOT: usize = 0;

/// Set of words supporting prefix lookups
#[derive(Debug)]
pub struct PrefixIndex {
	nodes: Vec<TrieNode>,
	len: usize,
}

impl Default for PrefixIndex {
	fn default() -> Self {
		Self {
			nodes: vec![TrieNode::default()],
			len: 0,
		}
	}
}

#[derive(Debug, Default)]
struct TrieNode {
	/// Arena index of the node reached by each next character
	children: HashMap<char, usize>,
	/// A complete word ends on this node
	terminal: bool,
}

impl PrefixIndex {
	/// Number of distinct words stored
	#[must_use]
	pub const fn len(&self) -> usize {
		self.len
	}

	#[must_use]
	pub const fn is_empty(&self) -> bool {
		self.len == 0
	}

	/// Adds `word` to the index, inserting an already known word is a no-op.
	///
	/// The empty string marks the root as terminal.
	pub fn insert(&mut self, word: &str) {
		let mut current = ROOT;
		for char in word.chars() {
			let next = self.nodes[current].children.get(&char).copied();
			current = match next {
				Some(child) => child,
				None => {
					let child = self.nodes.len();
					self.nodes.push(TrieNode::default());
					self.nodes[current].children.insert(char, child);
					child
				}
			};
		}

		let node = &mut self.nodes[current];
		if !node.terminal {
			node.terminal = true;
			self.len += 1;
		}
	}

	/// Whether exactly `word` was inserted
	#[must_use]
	pub fn contains(&self, word: &str) -> bool {
		self.walk(word).is_some_and(|node| self.nodes[node].terminal)
	}

	/// Every inserted word that `prefix` is a prefix of. The empty prefix
	/// matches the whole index.
	#[must_use]
	pub fn words_with_prefix(&self, prefix: &str) -> BTreeSet<String> {
		let mut words = BTreeSet::new();
		let Some(trunk) = self.walk(prefix) else {
			return words;
		};

		let mut stack = vec![(trunk, prefix.to_owned())];
		while let Some((index, fragment)) = stack.pop() {
			let node = &self.nodes[index];
			for (&char, &child) in &node.children {
				let mut next = fragment.clone();
				next.push(char);
				stack.push((child, next));
			}
			if node.terminal {
				words.insert(fragment);
			}
		}

		words
	}

	/// Follows `characters` from the root, `None` as soon as one is missing
	fn walk(&self, characters: &str) -> Option<usize> {
		characters.chars().try_fold(ROOT, |current, char| {
			self.nodes[current].children.get(&char).copied()
		})
	}
}

impl<S: AsRef<str>> Extend<S> for PrefixIndex {
	fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
		for word in iter {
			self.insert(word.as_ref());
		}
	}
}

impl<S: AsRef<str>> FromIterator<S> for PrefixIndex {
	fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
		let mut index = Self::default();
		index.extend(iter);
		index
	}
}

/// Set of words supporting suffix lookups
///
/// Stores every word reversed in a [`PrefixIndex`], a suffix query is then a
/// prefix query on the reversed suffix whose results are turned back around.
#[derive(Debug, Default)]
pub struct SuffixIndex(PrefixIndex);

impl SuffixIndex {
	#[must_use]
	pub const fn len(&self) -> usize {
		self.0.len()
	}

	#[must_use]
	pub const fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	pub fn insert(&mut self, word: &str) {
		self.0.insert(&reverse(word));
	}

	#[must_use]
	pub fn contains(&self, word: &str) -> bool {
		self.0.contains(&reverse(word))
	}

	/// Every inserted word ending with `suffix`
	#[must_use]
	pub fn words_with_suffix(&self, suffix: &str) -> BTreeSet<String> {
		self.0
			.words_with_prefix(&reverse(suffix))
			.iter()
			.map(|reversed| reverse(reversed))
			.collect()
	}
}

impl<S: AsRef<str>> Extend<S> for SuffixIndex {
	fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
		for word in iter {
			self.insert(word.as_ref());
		}
	}
}

impl<S: AsRef<str>> FromIterator<S> for SuffixIndex {
	fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
		let mut index = Self::default();
		index.extend(iter);
		index
	}
}

fn reverse(word: &str) -> String {
	word.chars().rev().collect()
}
