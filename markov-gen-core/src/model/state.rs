use rand::Rng;
use rand::seq::IndexedRandom;

use serde::{Deserialize, Serialize};

use super::context::Context;

/// Represents a state in the word chain.
///
/// A `State` corresponds to a two-word `Context` and stores every word observed
/// right after it, in observation order.
///
/// Conceptually, this is a node in a Markov chain. Duplicates are kept, so the
/// number of times a word appears is its weight: a uniform pick over
/// `successors` is a frequency-weighted pick over distinct words.
///
/// ## Invariants
/// - A state stored in a `ChainMap` has at least one successor
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct State {
	/// The two-word prefix this state belongs to.
	context: Context,
	/// Words observed after `context`, duplicates retained.
	/// Example: (the, cat) => [sat, ran, sat]
	successors: Vec<String>,
}

impl State {
	/// Creates a state holding its first observed successor.
	pub fn new(context: Context, successor: &str) -> Self {
		Self {
			context,
			successors: vec![successor.to_owned()],
		}
	}

	pub fn context(&self) -> &Context {
		&self.context
	}

	pub fn successors(&self) -> &[String] {
		&self.successors
	}

	/// Records one more occurrence of `successor` after this context.
	pub fn add_successor(&mut self, successor: &str) {
		self.successors.push(successor.to_owned());
	}

	/// Picks the next word uniformly over the recorded successors.
	///
	/// Returns `None` only if the state has no successors.
	pub fn predict<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<&str> {
		self.successors.choose(rng).map(String::as_str)
	}
}
