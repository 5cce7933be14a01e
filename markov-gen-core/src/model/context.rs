use serde::{Deserialize, Serialize};

/// An ordered pair of two consecutive tokens, used as a chain lookup key.
///
/// A `Context` is an immutable value: equality and hashing are structural and
/// order matters, so `(a, b)` and `(b, a)` are distinct keys.
///
/// Moving the context forward by one word (`shift`) produces a new value
/// instead of mutating the existing one.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Context {
	first: String,
	second: String,
}

impl Context {
	/// Creates a context from two tokens, oldest first.
	pub fn new(first: &str, second: &str) -> Self {
		Self {
			first: first.to_owned(),
			second: second.to_owned(),
		}
	}

	/// The older of the two tokens.
	pub fn first(&self) -> &str {
		&self.first
	}

	/// The most recent token.
	pub fn second(&self) -> &str {
		&self.second
	}

	/// Returns the context that follows this one when `next` is emitted.
	///
	/// Example: `(the, cat).shift("sat")` → `(cat, sat)`
	pub fn shift(&self, next: &str) -> Self {
		Self::new(&self.second, next)
	}
}

/// Fixed two-slot window over the most recent accepted tokens.
///
/// Used while building the chain: once full, every new token is recorded as a
/// successor of `snapshot()`, then pushed (evicting the oldest slot).
///
/// # Invariants
/// - `second` is only set when `first` is set
#[derive(Debug, Default)]
pub(crate) struct SlidingWindow {
	first: Option<String>,
	second: Option<String>,
}

impl SlidingWindow {
	pub(crate) fn new() -> Self {
		Self::default()
	}

	/// True once two tokens have been pushed.
	pub(crate) fn is_full(&self) -> bool {
		self.second.is_some()
	}

	/// Pushes a token, dropping the oldest one when the window is full.
	pub(crate) fn push(&mut self, token: &str) {
		match (&self.first, &self.second) {
			(None, _) => self.first = Some(token.to_owned()),
			(Some(_), None) => self.second = Some(token.to_owned()),
			(Some(_), Some(_)) => {
				self.first = self.second.take();
				self.second = Some(token.to_owned());
			}
		}
	}

	/// Copies the window content into an owned `Context`.
	///
	/// Returns `None` until the window is full.
	pub(crate) fn snapshot(&self) -> Option<Context> {
		match (&self.first, &self.second) {
			(Some(first), Some(second)) => Some(Context::new(first, second)),
			_ => None,
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use std::collections::HashSet;

	#[test]
	fn order_matters_for_equality_and_hash() {
		let mut keys = HashSet::new();
		keys.insert(Context::new("a", "b"));
		keys.insert(Context::new("b", "a"));
		keys.insert(Context::new("a", "b"));
		assert_eq!(keys.len(), 2);
	}

	#[test]
	fn shift_drops_first_word() {
		let context = Context::new("the", "cat");
		let next = context.shift("sat");
		assert_eq!(next, Context::new("cat", "sat"));
		// Original value is untouched
		assert_eq!(context.first(), "the");
	}

	#[test]
	fn window_fills_then_slides() {
		let mut window = SlidingWindow::new();
		assert!(window.snapshot().is_none());

		window.push("the");
		assert!(!window.is_full());
		assert!(window.snapshot().is_none());

		window.push("cat");
		assert!(window.is_full());
		assert_eq!(window.snapshot(), Some(Context::new("the", "cat")));

		window.push("sat");
		assert_eq!(window.snapshot(), Some(Context::new("cat", "sat")));
	}

	#[test]
	fn snapshot_is_detached_from_window() {
		let mut window = SlidingWindow::new();
		window.push("a");
		window.push("b");
		let snapshot = window.snapshot();
		window.push("c");
		assert_eq!(snapshot, Some(Context::new("a", "b")));
	}
}
