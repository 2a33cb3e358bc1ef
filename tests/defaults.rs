mod utils;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use utils::{as_set, init_logger, set};
use wordpick::{DefaultList, FilterSpec, ProfanityFilter, WordPool};

type TestResult = Result<(), Box<dyn std::error::Error>>;

#[test]
fn default_categories() -> TestResult {
	init_logger();
	let pool = WordPool::with_defaults(false)?;

	assert_eq!(
		pool.categories().collect::<Vec<_>>(),
		["adjective", "noun", "verb"]
	);
	assert_eq!(pool.filter(&FilterSpec::default())?.len(), 163);
	Ok(())
}

#[test]
fn default_filters() -> TestResult {
	init_logger();

	for indexed in [false, true] {
		let pool = WordPool::with_defaults(indexed)?;

		let words = pool.filter(&FilterSpec::default().starts_with("mana"))?;
		assert_eq!(
			as_set(words),
			set(&["manage", "manager", "management", "manatee"])
		);

		let words = pool.filter(&FilterSpec::default().ends_with("ala"))?;
		assert_eq!(as_set(words), set(&["impala", "koala"]));

		let words = pool.filter(&FilterSpec::default().pattern(".*ea"))?;
		assert_eq!(
			as_set(words),
			set(&["guinea", "sea", "tea", "idea", "plea", "area", "pea"])
		);

		let words = pool.filter(&FilterSpec::default().max_length(2))?;
		assert_eq!(
			as_set(words),
			set(&["be", "ox", "go", "do", "ad", "TV", "id"])
		);

		let words = pool.filter(&FilterSpec::default().min_length(17))?;
		assert_eq!(
			as_set(words),
			set(&[
				"electrocardiogram",
				"great-grandmother",
				"misrepresentation",
				"cross-contamination",
			])
		);
	}
	Ok(())
}

#[test]
fn default_list_in_custom_category() -> TestResult {
	init_logger();
	let pool = WordPool::builder()
		.category("my_verb", DefaultList::Verbs)
		.build()?;
	let mut rng = ChaCha8Rng::seed_from_u64(0);

	assert_eq!(pool.word(&FilterSpec::default().starts_with("ab"), &mut rng)?, "abide");
	Ok(())
}

#[test]
fn mixed_custom_and_default_categories() -> TestResult {
	init_logger();
	let pool = WordPool::builder()
		.category("proper_nouns", ["Austin", "Seattle", "New York"])
		.category("common_nouns", DefaultList::Nouns)
		.indexed(true)
		.build()?;

	let words = pool.filter(&FilterSpec::default().pattern("[Ss]eat.*"))?;
	assert_eq!(as_set(words), set(&["Seattle", "seat"]));
	Ok(())
}

#[test]
fn shortfall_on_defaults() -> TestResult {
	init_logger();
	let pool = WordPool::with_defaults(true)?;
	let mut rng = ChaCha8Rng::seed_from_u64(8);
	let spec = FilterSpec::default().starts_with("ag");

	assert!(pool.random_words(20, &spec, false, &mut rng).is_err());

	let words = pool.random_words(20, &spec, true, &mut rng)?;
	assert_eq!(
		as_set(words),
		set(&["age", "agenda", "agent", "aggressive", "agile", "agree", "agriculture"])
	);

	let words = pool.random_words(2, &spec, true, &mut rng)?;
	assert_eq!(words.len(), 2);
	Ok(())
}

#[test]
fn defaults_carry_no_profanity() -> TestResult {
	init_logger();
	let pool = WordPool::with_defaults(false)?;
	let profanity = ProfanityFilter::new()?;

	let words = pool.filter(&FilterSpec::default())?;
	let total = words.len();
	assert_eq!(profanity.filter(words).count(), total);
	Ok(())
}
