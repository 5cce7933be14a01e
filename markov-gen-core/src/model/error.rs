use std::{fmt, io};

/// Errors reported by the chain model and its high-level wrappers.
///
/// Only genuine failures live here. An unresolved seed word and a dead-end
/// continuation are legitimate outcomes (empty or shorter sentences), not errors.
#[derive(Debug)]
pub enum ChainError {
	/// `generate` was called on a model that recorded no sentence starters.
	NoStarters,
	/// A word-count range with `min > max`.
	InvalidWordRange { min: usize, max: usize },
	/// A corpus path that is neither a file nor a directory.
	InvalidPath(String),
	Io(io::Error),
}

impl fmt::Display for ChainError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			ChainError::NoStarters => write!(f, "No sentence starters available for generation"),
			ChainError::InvalidWordRange { min, max } => {
				write!(f, "Invalid word range: min ({}) must be <= max ({})", min, max)
			}
			ChainError::InvalidPath(path) => write!(f, "Invalid corpus path: {}", path),
			ChainError::Io(err) => write!(f, "IO Error: {}", err),
		}
	}
}

impl std::error::Error for ChainError {
	fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
		match self {
			ChainError::Io(err) => Some(err),
			_ => None,
		}
	}
}

impl From<io::Error> for ChainError {
	fn from(err: io::Error) -> ChainError {
		ChainError::Io(err)
	}
}
