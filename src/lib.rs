//! wordpick
//!
//! Random words out of named categories, filtered by length, prefix, suffix,
//! pattern and spaces.
//!
//! ```
//! use wordpick::{FilterSpec, WordPool};
//!
//! let pool = WordPool::from_categories([
//! 	("noun", ["apple", "ant", "orange"]),
//! 	("adjective", ["angry", "red", "tall"]),
//! ])?;
//!
//! let words = pool.filter(&FilterSpec::default().starts_with("a").categories(["noun"]))?;
//! assert_eq!(words, ["ant", "apple"]);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod category;
mod filter;
mod pool;
mod profanity;
mod sample;
mod trie;
mod wordlist;

pub use category::{LengthBounds, LengthMode, LengthSortedCategory};
pub use filter::{FilterError, FilterSpec};
pub use pool::{InitializeError, WordPool, WordPoolBuilder};
pub use profanity::ProfanityFilter;
pub use sample::{sample, SampleError};
pub use trie::{PrefixIndex, SuffixIndex};
pub use wordlist::{CategorySource, DefaultList, WordList};
