use crate::io;
use crate::model::chain_model::ChainModel;
use crate::model::error::ChainError;
use crate::model::generation_input::{GenerationInput, StartSeed};
use log::info;
use rand::Rng;
use serde::Serialize;
use std::path::Path;

/// Extension of the corpus files loaded from a directory.
pub const CORPUS_EXTENSION: &str = "txt";

/// One generated sentence and the word count it was drawn with.
///
/// `sentence` may hold fewer words than `word_count` (dead ends), or be empty
/// when a custom seed cannot be resolved.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct Prediction {
	pub sentence: String,
	pub word_count: usize,
}

/// High-level generator wrapping one `ChainModel`.
///
/// # Responsibilities
/// - Load raw corpus text from a file or a directory of `.txt` files
/// - Build the chain model once
/// - Generate sentences according to a `GenerationInput`
#[derive(Debug)]
pub struct Generator {
	model: ChainModel,
	corpus_names: Vec<String>,
}

impl Generator {
	/// Creates a generator from a corpus file or a directory of corpus files.
	///
	/// # Parameters
	/// - `filepath`: a text file, or a directory. Both `"folder"` and `"folder/"`
	///   are accepted.
	///
	/// # Behavior
	/// - A file is read whole and becomes the only corpus string.
	/// - A directory contributes every `.txt` file it directly contains, one
	///   corpus string per file, in file-name order.
	/// - The corpus name is the file name without extension.
	///
	/// # Errors
	/// - `ChainError::InvalidPath` if the path is neither a file nor a directory.
	/// - `ChainError::Io` if a file fails to load.
	pub fn new<P: AsRef<Path>>(filepath: P) -> Result<Self, ChainError> {
		let string_path = match filepath.as_ref().to_str() {
			Some(s) => s,
			None => return Err(ChainError::InvalidPath(filepath.as_ref().display().to_string())),
		};
		let path = io::normalize_folder(string_path);

		let files = if path.is_file() {
			vec![path.clone()]
		} else if path.is_dir() {
			io::list_files(&path, CORPUS_EXTENSION)?
				.into_iter()
				.map(|file| path.join(file))
				.collect()
		} else {
			return Err(ChainError::InvalidPath(path.display().to_string()));
		};

		let mut corpus = Vec::with_capacity(files.len());
		let mut corpus_names = Vec::with_capacity(files.len());
		for file in &files {
			corpus.push(io::read_file(file)?);
			corpus_names.push(io::get_filename(file)?);
		}
		info!("Loaded {} corpus file(s) from {}", files.len(), path.display());

		Ok(Self {
			model: ChainModel::build(&corpus),
			corpus_names,
		})
	}

	/// Creates a generator from in-memory corpus strings.
	pub fn from_corpus<S: AsRef<str>>(corpus: &[S]) -> Self {
		Self {
			model: ChainModel::build(corpus),
			corpus_names: Vec::new(),
		}
	}

	/// Names of the corpus files the model was built from.
	pub fn get_corpus_names(&self) -> &[String] {
		&self.corpus_names
	}

	pub fn model(&self) -> &ChainModel {
		&self.model
	}

	/// Creates a `GenerationInput` with default values.
	pub fn make_generation_input(&self) -> GenerationInput {
		GenerationInput::default()
	}

	/// Generates one sentence with a random word count from `input`.
	///
	/// # Returns
	/// - `Ok(Prediction)`: the sentence and the drawn word count. The sentence
	///   is empty if a custom seed cannot be resolved.
	/// - `Err(ChainError::NoStarters)`: random start requested on a model
	///   without starters.
	pub fn predict<R: Rng + ?Sized>(&self, input: &GenerationInput, rng: &mut R) -> Result<Prediction, ChainError> {
		let word_count = input.random_word_count(rng);
		let sentence = match &input.start_seed {
			StartSeed::Random => self.model.generate(word_count, rng)?,
			StartSeed::Custom(seed) => self.model.generate_from_word(word_count, seed, rng),
		};
		Ok(Prediction { sentence, word_count })
	}

	/// Generates `input.sentence_count` sentences.
	///
	/// Stops at the first error.
	pub fn predict_many<R: Rng + ?Sized>(&self, input: &GenerationInput, rng: &mut R) -> Result<Vec<String>, ChainError> {
		(0..input.sentence_count)
			.map(|_| self.predict(input, rng).map(|prediction| prediction.sentence))
			.collect()
	}
}
