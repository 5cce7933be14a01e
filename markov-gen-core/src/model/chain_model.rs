use log::{debug, info, warn};
use rand::Rng;
use rand::seq::IndexedRandom;

use super::chain_map::ChainMap;
use super::context::{Context, SlidingWindow};
use super::error::ChainError;
use super::tokenizer;

/// Fixed suffix appended to every generated sentence.
pub const SENTENCE_TERMINATOR: &str = ". tx";

/// Second-order (two-word context) Markov chain over a text corpus.
///
/// The `ChainModel` owns the chain and the list of sentence starters. Both
/// are built once by `build` and never modified afterwards, so a model can be
/// shared freely between readers.
///
/// # Responsibilities
/// - Tokenize the corpus and record, for every two-word context, the words
///   that follow it
/// - Extract sentence starters from naive `.`-separated sentences
/// - Generate sentences from a random starter or from a seed word
///
/// # Randomness
/// Every random decision is drawn from the `rng` passed to the call.
#[derive(Clone, Debug, Default)]
pub struct ChainModel {
	chain: ChainMap,
	starters: Vec<Context>,
}

impl ChainModel {
	/// Builds a model from raw corpus strings.
	///
	/// Never fails: an empty corpus (or one with fewer than 3 accepted tokens)
	/// gives a model with an empty chain, and a corpus without any sentence of
	/// more than 2 words gives a model without starters.
	pub fn build<S: AsRef<str>>(corpus: &[S]) -> Self {
		let starters = tokenizer::sentence_starters(corpus);
		let chain = Self::build_chain(&tokenizer::tokenize(corpus));

		info!(
			"Built chain with {} contexts and {} sentence starters",
			chain.len(),
			starters.len()
		);
		if starters.is_empty() {
			warn!("Corpus yielded no sentence starters, random generation is unavailable");
		}

		Self { chain, starters }
	}

	/// Slides a two-word window over the accepted tokens and records each
	/// token as a successor of the window content.
	fn build_chain(tokens: &[String]) -> ChainMap {
		let mut chain = ChainMap::new();
		let mut window = SlidingWindow::new();

		for token in tokens.iter().filter(|token| tokenizer::is_accepted(token)) {
			// Key is an owned copy, the window keeps moving
			if let Some(context) = window.snapshot() {
				chain.record(context, token);
			}
			window.push(token);
		}

		chain
	}

	pub fn chain(&self) -> &ChainMap {
		&self.chain
	}

	pub fn starters(&self) -> &[Context] {
		&self.starters
	}

	/// True when the model can generate nothing at all.
	pub fn is_empty(&self) -> bool {
		self.chain.is_empty() && self.starters.is_empty()
	}

	/// Generates a sentence of up to `word_count` words from a random starter.
	///
	/// # Errors
	/// Returns `ChainError::NoStarters` if the corpus produced no starter.
	pub fn generate<R: Rng + ?Sized>(&self, word_count: usize, rng: &mut R) -> Result<String, ChainError> {
		let starter = self.starters.choose(rng).ok_or(ChainError::NoStarters)?;
		Ok(self.build_sentence(word_count, starter, rng))
	}

	/// Generates a sentence of up to `word_count` words starting from `seed`.
	///
	/// The seed is matched verbatim against the (normalized) tokens of the
	/// chain, see `search_single_word`. Returns an empty string if it cannot
	/// be resolved.
	pub fn generate_from_word<R: Rng + ?Sized>(&self, word_count: usize, seed: &str, rng: &mut R) -> String {
		match self.search_single_word(seed, rng) {
			Some(starter) => self.build_sentence(word_count, &starter, rng),
			None => {
				debug!("Seed word '{}' not found in chain", seed);
				String::new()
			}
		}
	}

	/// Resolves a single word into a context.
	///
	/// Priority order, scanning contexts in insertion order:
	/// 1. The first context whose first word is `seed`, returned as is.
	/// 2. Otherwise the first context whose second word is `seed`: returns
	///    `(seed, x)` with `x` a random successor of that context.
	/// 3. Otherwise `None`.
	pub fn search_single_word<R: Rng + ?Sized>(&self, seed: &str, rng: &mut R) -> Option<Context> {
		if let Some(context) = self.chain.contexts().find(|context| context.first() == seed) {
			return Some(context.clone());
		}

		let state = self.chain.states().find(|state| state.context().second() == seed)?;
		let next = state.predict(rng)?;
		Some(Context::new(seed, next))
	}

	/// Extends `starter` word by word until `word_count` words were attempted.
	///
	/// # Behavior
	/// - Always starts with both words of `starter`
	/// - Known context: appends a random successor
	/// - Unknown context: falls back to `search_single_word` on the last word
	///   and appends the second word of its result
	/// - Fallback miss: the step is skipped, so the sentence may be shorter
	///   than requested
	/// - Ends with `SENTENCE_TERMINATOR`
	fn build_sentence<R: Rng + ?Sized>(&self, word_count: usize, starter: &Context, rng: &mut R) -> String {
		let mut sentence = format!("{} {}", starter.first(), starter.second());
		let mut previous_words = starter.clone();

		for _ in 0..word_count.saturating_sub(2) {
			let next_word = match self.chain.get(&previous_words).and_then(|state| state.predict(rng)) {
				Some(word) => word.to_owned(),
				None => match self.search_single_word(previous_words.second(), rng) {
					Some(context) => context.second().to_owned(),
					None => {
						debug!("Dead end after '{}', skipping word", previous_words.second());
						continue;
					}
				},
			};

			sentence.push(' ');
			sentence.push_str(&next_word);
			previous_words = previous_words.shift(&next_word);
		}

		sentence.push_str(SENTENCE_TERMINATOR);
		sentence
	}
}
