//! Wordpick CLI
//!
//! `wordpick 3 --starts-with ca --max-length 6` prints three random words.

use clap::Parser;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use std::path::PathBuf;
use wordpick::{DefaultList, FilterSpec, InitializeError, WordList, WordPool};

#[derive(clap::Parser)]
#[command(version, about)]
struct Args {
	/// How many words to draw
	#[arg(default_value_t = 1)]
	count: usize,

	#[arg(long, short, default_value = "")]
	starts_with: String,

	#[arg(long, short, default_value = "")]
	ends_with: String,

	/// Only draw from this category, repeat to select several
	#[arg(long = "category", short)]
	categories: Vec<String>,

	#[arg(long, allow_negative_numbers = true)]
	min_length: Option<i64>,

	#[arg(long, allow_negative_numbers = true)]
	max_length: Option<i64>,

	/// Regular expression each word must fully match
	#[arg(long, short)]
	pattern: Option<String>,

	#[arg(long)]
	exclude_spaces: bool,

	/// Load a category from a file with one word per line, as `NAME=PATH`.
	/// Bundled nouns, verbs and adjectives are used when none is given
	#[arg(long = "list", value_parser = parse_list)]
	lists: Vec<(String, PathBuf)>,

	/// Build prefix and suffix tries before filtering
	#[arg(long)]
	indexed: bool,

	/// Treat a maximum length of 0 literally
	#[arg(long)]
	strict_lengths: bool,

	/// Print fewer words instead of failing when not enough match
	#[arg(long)]
	allow_shortfall: bool,

	#[arg(long)]
	seed: Option<u64>,

	/// Print every matching word instead of drawing
	#[arg(long)]
	all: bool,
}

fn parse_list(arg: &str) -> Result<(String, PathBuf), String> {
	match arg.split_once('=') {
		Some((name, path)) if !name.is_empty() && !path.is_empty() => {
			Ok((name.to_owned(), PathBuf::from(path)))
		}
		_ => Err(format!("expected `NAME=PATH`, got `{arg}`")),
	}
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
	pretty_env_logger::init();

	let args = Args::parse();

	let pool = build_pool(&args)?;
	log::info!(
		"loaded categories: {}",
		pool.categories().collect::<Vec<_>>().join(", ")
	);

	let spec = FilterSpec {
		starts_with: args.starts_with,
		ends_with: args.ends_with,
		categories: args.categories,
		min_length: args.min_length,
		max_length: args.max_length,
		pattern: args.pattern,
		exclude_spaces: args.exclude_spaces,
	};

	let words = if args.all {
		pool.filter(&spec)?
	} else {
		let mut rng = args
			.seed
			.map_or_else(ChaCha20Rng::from_entropy, ChaCha20Rng::seed_from_u64);
		pool.random_words(args.count, &spec, args.allow_shortfall, &mut rng)?
	};

	if words.len() < args.count && !args.all {
		log::warn!("only {} of {} words could be drawn", words.len(), args.count);
	}

	for word in words {
		println!("{word}");
	}

	Ok(())
}

fn build_pool(args: &Args) -> Result<WordPool, InitializeError> {
	if args.lists.is_empty() {
		return WordPool::builder()
			.category("noun", DefaultList::Nouns)
			.category("verb", DefaultList::Verbs)
			.category("adjective", DefaultList::Adjectives)
			.indexed(args.indexed)
			.strict_lengths(args.strict_lengths)
			.build();
	}

	let mut builder = WordPool::builder()
		.indexed(args.indexed)
		.strict_lengths(args.strict_lengths);
	for (name, path) in &args.lists {
		builder = builder.category(name.as_str(), WordList::file(path)?);
	}
	builder.build()
}
