mod utils;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use utils::{as_set, set, small_pool};
use wordpick::{FilterError, FilterSpec, SampleError};

type TestResult = Result<(), Box<dyn std::error::Error>>;

#[test]
fn insufficient_pool() -> TestResult {
	let pool = small_pool(false)?;
	let mut rng = ChaCha8Rng::seed_from_u64(3);
	let spec = FilterSpec::default().categories(["noun"]).pattern("a.*");

	let err = pool.random_words(5, &spec, false, &mut rng);
	assert!(matches!(
		err,
		Err(SampleError::InsufficientPool {
			requested: 5,
			available: 2
		})
	));

	let words = pool.random_words(5, &spec, true, &mut rng)?;
	assert_eq!(as_set(words), set(&["apple", "ant"]));
	Ok(())
}

#[test]
fn shortfall_allowed_still_draws_exact_count_when_possible() -> TestResult {
	let pool = small_pool(true)?;
	let mut rng = ChaCha8Rng::seed_from_u64(11);

	let words = pool.random_words(3, &FilterSpec::default(), true, &mut rng)?;
	assert_eq!(words.len(), 3);
	assert_eq!(as_set(words).len(), 3);
	Ok(())
}

#[test]
fn whole_pool_is_a_permutation() -> TestResult {
	let pool = small_pool(false)?;
	let mut rng = ChaCha8Rng::seed_from_u64(5);
	let spec = FilterSpec::default();

	let all = pool.filter(&spec)?;
	let drawn = pool.random_words(all.len(), &spec, false, &mut rng)?;
	assert_eq!(drawn.len(), all.len());
	assert_eq!(as_set(drawn), as_set(all));
	Ok(())
}

#[test]
fn seeded_draws_repeat() -> TestResult {
	let pool = small_pool(true)?;
	let spec = FilterSpec::default().exclude_spaces(true);

	let first = pool.random_words(4, &spec, false, &mut ChaCha8Rng::seed_from_u64(99))?;
	let second = pool.random_words(4, &spec, false, &mut ChaCha8Rng::seed_from_u64(99))?;
	assert_eq!(first, second);
	Ok(())
}

#[test]
fn single_word() -> TestResult {
	let pool = small_pool(false)?;
	let mut rng = ChaCha8Rng::seed_from_u64(1);

	let word = pool.word(&FilterSpec::default().categories(["adjective"]), &mut rng)?;
	assert!(["angry", "red", "tall", "wide open"].contains(&word.as_str()));

	let err = pool.word(&FilterSpec::default().starts_with("zz"), &mut rng);
	assert!(matches!(
		err,
		Err(SampleError::InsufficientPool {
			requested: 1,
			available: 0
		})
	));
	Ok(())
}

#[test]
fn filter_errors_pass_through() -> TestResult {
	let pool = small_pool(false)?;
	let mut rng = ChaCha8Rng::seed_from_u64(1);

	let err = pool.random_words(1, &FilterSpec::default().categories(["verb"]), false, &mut rng);
	assert!(matches!(
		err,
		Err(SampleError::Filter(FilterError::UnknownCategory(_)))
	));
	Ok(())
}
