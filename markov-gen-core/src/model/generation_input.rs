use rand::Rng;

use super::error::ChainError;

/// Default number of sentences produced by `Generator::predict_many`.
pub const DEFAULT_SENTENCE_COUNT: usize = 11;
/// Default lower bound (inclusive) of the random word count.
pub const DEFAULT_MIN_WORDS: usize = 16;
/// Default upper bound (inclusive) of the random word count.
pub const DEFAULT_MAX_WORDS: usize = 35;

/// Strategy used to select the starting context of a sentence.
///
/// # Variants
/// - `Random`: pick one of the recorded sentence starters.
/// - `Custom(String)`: resolve the given word through the single-word search.
#[derive(PartialEq, Clone, Debug, Default)]
pub enum StartSeed {
	#[default]
	Random,
	Custom(String),
}

/// Input parameters for generating sentences.
///
/// # Responsibilities
/// - Track how many sentences to produce and how they start
/// - Track the inclusive word-count range each sentence is drawn from
///
/// # Invariants
/// - `min_words <= max_words`
#[derive(Clone, Debug)]
pub struct GenerationInput {
	/// Number of sentences produced by `Generator::predict_many`.
	pub sentence_count: usize,

	/// How each sentence starts.
	pub start_seed: StartSeed,

	min_words: usize,
	max_words: usize,
}

impl Default for GenerationInput {
	fn default() -> Self {
		Self {
			sentence_count: DEFAULT_SENTENCE_COUNT,
			start_seed: StartSeed::Random,
			min_words: DEFAULT_MIN_WORDS,
			max_words: DEFAULT_MAX_WORDS,
		}
	}
}

impl GenerationInput {
	/// Returns the inclusive word-count range.
	pub fn word_range(&self) -> (usize, usize) {
		(self.min_words, self.max_words)
	}

	/// Sets the inclusive word-count range.
	///
	/// # Errors
	/// Returns `ChainError::InvalidWordRange` if `min > max`.
	pub fn set_word_range(&mut self, min: usize, max: usize) -> Result<(), ChainError> {
		if min > max {
			return Err(ChainError::InvalidWordRange { min, max });
		}
		self.min_words = min;
		self.max_words = max;
		Ok(())
	}

	/// Draws a word count uniformly in `[min_words, max_words]`.
	pub fn random_word_count<R: Rng + ?Sized>(&self, rng: &mut R) -> usize {
		rng.random_range(self.min_words..=self.max_words)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rand::SeedableRng;
	use rand::rngs::StdRng;

	#[test]
	fn defaults_match_historical_loop() {
		let input = GenerationInput::default();
		assert_eq!(input.sentence_count, 11);
		assert_eq!(input.word_range(), (16, 35));
		assert_eq!(input.start_seed, StartSeed::Random);
	}

	#[test]
	fn rejects_inverted_range() {
		let mut input = GenerationInput::default();
		assert!(matches!(
			input.set_word_range(10, 2),
			Err(ChainError::InvalidWordRange { min: 10, max: 2 })
		));
		// Unchanged on error
		assert_eq!(input.word_range(), (16, 35));
	}

	#[test]
	fn word_count_stays_in_range() {
		let mut input = GenerationInput::default();
		input.set_word_range(3, 5).unwrap();
		let mut rng = StdRng::seed_from_u64(1);
		for _ in 0..100 {
			let n = input.random_word_count(&mut rng);
			assert!((3..=5).contains(&n));
		}
	}

	#[test]
	fn single_value_range() {
		let mut input = GenerationInput::default();
		input.set_word_range(7, 7).unwrap();
		let mut rng = StdRng::seed_from_u64(1);
		assert_eq!(input.random_word_count(&mut rng), 7);
	}
}
