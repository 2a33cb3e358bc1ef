//! Logic of the [`WordPool`] to draw random words

use crate::{filter::FilterError, FilterSpec, WordPool};
use rand::{seq::SliceRandom, Rng};

/// Informs why words could not be drawn
#[derive(Debug, thiserror::Error)]
pub enum SampleError {
	/// Fewer distinct words are available than were requested
	#[error("there aren't enough words to choose from: requested {requested}, only {available} available")]
	InsufficientPool { requested: usize, available: usize },

	/// Filtering the pool failed
	#[error(transparent)]
	Filter(#[from] FilterError),
}

/// Draws `count` distinct elements of `pool` in random order.
///
/// When `pool` is too small, `allow_shortfall` returns all of it shuffled
/// instead of failing.
///
/// # Errors
///
/// [`SampleError::InsufficientPool`] when `count` exceeds the pool and
/// `allow_shortfall` is unset.
pub fn sample<T, R>(mut pool: Vec<T>, count: usize, allow_shortfall: bool, rng: &mut R) -> Result<Vec<T>, SampleError>
where
	R: Rng + ?Sized,
{
	let available = pool.len();
	if count > available && !allow_shortfall {
		return Err(SampleError::InsufficientPool {
			requested: count,
			available,
		});
	}

	pool.shuffle(rng);
	pool.truncate(count);
	Ok(pool)
}

/// Methods for drawing random words out of the pool
impl WordPool {
	/// Up to `count` distinct random words matching `spec`
	///
	/// Exactly `count` words come back whenever enough match, otherwise see
	/// [`sample`] for `allow_shortfall`.
	///
	/// # Errors
	/// Check [`SampleError`] to see all the ways this function breaks
	pub fn random_words<R>(
		&self,
		count: usize,
		spec: &FilterSpec,
		allow_shortfall: bool,
		rng: &mut R,
	) -> Result<Vec<String>, SampleError>
	where
		R: Rng + ?Sized,
	{
		let pool = self.filter(spec)?;
		sample(pool, count, allow_shortfall, rng)
	}

	/// A single random word matching `spec`
	///
	/// # Errors
	/// Check [`SampleError`] to see all the ways this function breaks
	pub fn word<R>(&self, spec: &FilterSpec, rng: &mut R) -> Result<String, SampleError>
	where
		R: Rng + ?Sized,
	{
		self.random_words(1, spec, false, rng)?
			.pop()
			.ok_or(SampleError::InsufficientPool {
				requested: 1,
				available: 0,
			})
	}
}
