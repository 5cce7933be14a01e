use std::sync::LazyLock;

use regex::Regex;

use super::context::Context;

/// Everything outside lowercase ASCII letters, digits, `-`, `'` and ASCII whitespace.
static FORBIDDEN_CHARS: LazyLock<Regex> = LazyLock::new(|| {
	// Constant pattern, cannot fail
	Regex::new(r"[^a-z0-9\-' \t\n\x0B\x0C\r]").unwrap()
});

/// Normalizes raw text before splitting.
///
/// - Lowercases
/// - Removes every character outside `[a-z0-9\-'\s]`
/// - Folds `\n` into a single space
///
/// Does not trim: callers split first, then trim each piece.
pub fn normalize(text: &str) -> String {
	let lower = text.to_lowercase();
	FORBIDDEN_CHARS.replace_all(&lower, "").replace('\n', " ")
}

/// Turns raw corpus strings into one flat, ordered sequence of tokens.
///
/// Blank inputs are skipped. Each remaining input is normalized, split on
/// literal spaces, and every non-blank piece is trimmed and kept in order.
pub fn tokenize<S: AsRef<str>>(inputs: &[S]) -> Vec<String> {
	inputs
		.iter()
		.map(AsRef::as_ref)
		.filter(|input| !input.trim().is_empty())
		.map(normalize)
		.flat_map(|text| {
			text.split(' ')
				.filter(|piece| !piece.trim().is_empty())
				.map(|piece| piece.trim().to_owned())
				.collect::<Vec<_>>()
		})
		.collect()
}

/// Whether a token may enter the chain.
///
/// Blank tokens and anything looking like a link (`http`, any case) are rejected.
pub fn is_accepted(token: &str) -> bool {
	!token.trim().is_empty() && !token.to_lowercase().contains("http")
}

/// Splits raw corpus strings on `.` into naive sentence fragments.
///
/// Fragments are returned raw (not normalized), blank ones included,
/// in input order.
pub fn split_sentences<S: AsRef<str>>(inputs: &[S]) -> Vec<String> {
	inputs
		.iter()
		.flat_map(|paragraph| paragraph.as_ref().split('.'))
		.map(str::to_owned)
		.collect()
}

/// Extracts one starter context per naive sentence.
///
/// Each fragment is normalized, blank ones dropped, then split on whitespace.
/// Only fragments with more than 2 words yield a starter: their first two words.
///
/// Runs of whitespace count as one separator, so empty words are never
/// counted nor used as a starter word. Splitting on every single whitespace
/// character would instead turn `"hi  there"` into `["hi", "", "there"]`
/// and yield the starter `(hi, "")`.
pub fn sentence_starters<S: AsRef<str>>(inputs: &[S]) -> Vec<Context> {
	split_sentences(inputs)
		.iter()
		.map(|fragment| normalize(fragment))
		.filter(|sentence| !sentence.trim().is_empty())
		.filter_map(|sentence| {
			let words: Vec<&str> = sentence.split_whitespace().collect();
			if words.len() > 2 {
				Some(Context::new(words[0], words[1]))
			} else {
				None
			}
		})
		.collect()
}
