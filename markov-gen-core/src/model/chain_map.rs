use std::collections::HashMap;

use super::context::Context;
use super::state::State;

/// Mapping from a `Context` to the words observed after it.
///
/// Keys keep their insertion order: iterating `contexts()` or `states()`
/// visits distinct contexts in the order they were first recorded. The
/// single-word search relies on that order to pick its "first match".
///
/// # Invariants
/// - `index[c] == i` iff `states[i].context() == c`
/// - Every state has at least one successor
#[derive(Clone, Debug, Default)]
pub struct ChainMap {
	states: Vec<State>,
	index: HashMap<Context, usize>,
}

impl ChainMap {
	pub fn new() -> Self {
		Self::default()
	}

	/// Appends `successor` to the slot of `context`, creating it if needed.
	pub fn record(&mut self, context: Context, successor: &str) {
		if let Some(&i) = self.index.get(&context) {
			self.states[i].add_successor(successor);
			return;
		}
		self.index.insert(context.clone(), self.states.len());
		self.states.push(State::new(context, successor));
	}

	pub fn get(&self, context: &Context) -> Option<&State> {
		self.index.get(context).map(|&i| &self.states[i])
	}

	/// States in insertion order of their contexts.
	pub fn states(&self) -> impl Iterator<Item = &State> {
		self.states.iter()
	}

	/// Distinct contexts in insertion order.
	pub fn contexts(&self) -> impl Iterator<Item = &Context> {
		self.states.iter().map(State::context)
	}

	pub fn len(&self) -> usize {
		self.states.len()
	}

	pub fn is_empty(&self) -> bool {
		self.states.is_empty()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn record_reuses_existing_slot() {
		let mut chain = ChainMap::new();
		chain.record(Context::new("the", "cat"), "sat");
		chain.record(Context::new("cat", "sat"), "the");
		chain.record(Context::new("the", "cat"), "ran");

		assert_eq!(chain.len(), 2);
		let state = chain.get(&Context::new("the", "cat")).unwrap();
		assert_eq!(state.successors(), ["sat", "ran"]);
	}

	#[test]
	fn contexts_follow_first_insertion() {
		let mut chain = ChainMap::new();
		chain.record(Context::new("b", "c"), "x");
		chain.record(Context::new("a", "b"), "x");
		chain.record(Context::new("b", "c"), "y");

		let order: Vec<&Context> = chain.contexts().collect();
		assert_eq!(order, [&Context::new("b", "c"), &Context::new("a", "b")]);
	}

	#[test]
	fn unknown_context_is_none() {
		let chain = ChainMap::new();
		assert!(chain.is_empty());
		assert!(chain.get(&Context::new("a", "b")).is_none());
	}
}
