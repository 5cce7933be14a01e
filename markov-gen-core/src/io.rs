use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::env;

/// Reads a whole text file as a single corpus string.
pub fn read_file<P: AsRef<Path>>(filename: P) -> io::Result<String> {
	fs::read_to_string(filename)
}

/// Corpus name of a file: its stem, as reported by `Generator::get_corpus_names`.
///
/// `"./data/alice.txt"` gives `"alice"`.
pub fn get_filename<P: AsRef<Path>>(input_path: P) -> io::Result<String> {
	let stem = input_path
		.as_ref()
		.file_stem()
		.ok_or_else(|| io::Error::new(io::ErrorKind::InvalidInput, "Path has no filename"))?;

	Ok(stem.to_string_lossy().to_string())
}

/// Turns a user-supplied corpus location into a path.
///
/// A bare `"."` (or `"./"`) becomes the absolute working directory so log
/// lines name the real folder. Anything else is kept verbatim.
pub fn normalize_folder(input: &str) -> PathBuf {
	if input == "." || input == "./" {
		env::current_dir().unwrap_or_else(|_| PathBuf::from("."))
	} else {
		PathBuf::from(input)
	}
}

/// Lists all files with a given extension in a directory.
///
/// Returns file names only (no paths), sorted so corpora load in a stable order.
pub fn list_files<P: AsRef<Path>>(dir: P, extension: &str) -> io::Result<Vec<String>> {
	let mut files = Vec::new();

	for entry in fs::read_dir(dir)? {
		let path = entry?.path();

		if path.is_file() && path.extension() == Some(std::ffi::OsStr::new(extension)) {
			if let Some(name) = path.file_name() {
				files.push(name.to_string_lossy().to_string());
			}
		}
	}

	files.sort();
	Ok(files)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn filename_without_extension() {
		assert_eq!(get_filename("./data/alice.txt").unwrap(), "alice");
		assert_eq!(get_filename("alice").unwrap(), "alice");
		assert!(get_filename("/").is_err());
	}

	#[test]
	fn lists_matching_files_sorted() {
		let dir = tempfile::tempdir().unwrap();
		fs::write(dir.path().join("b.txt"), "b").unwrap();
		fs::write(dir.path().join("a.txt"), "a").unwrap();
		fs::write(dir.path().join("notes.md"), "skip").unwrap();
		fs::create_dir(dir.path().join("nested.txt")).unwrap();

		assert_eq!(list_files(dir.path(), "txt").unwrap(), ["a.txt", "b.txt"]);
	}

	#[test]
	fn reads_whole_file() {
		let dir = tempfile::tempdir().unwrap();
		let path = dir.path().join("corpus.txt");
		fs::write(&path, "line one.\nline two.").unwrap();
		assert_eq!(read_file(&path).unwrap(), "line one.\nline two.");
	}

	#[test]
	fn dot_folder_is_current_dir() {
		assert_eq!(normalize_folder("data/"), PathBuf::from("data/"));
		assert!(normalize_folder(".").is_absolute());
	}
}
