use std::fs::{self, File};
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};
use std::{env, io};

use log::{debug, warn};

/// Reads a corpus line by line, degrading to what could be read.
///
/// - Splits on `\n` / `\r\n`, the file is closed when this returns
/// - Bytes that are not valid UTF-8 are decoded as `U+FFFD`, the line is kept
/// - A missing or unreadable file yields an empty corpus
/// - An I/O error mid-file keeps the lines read so far
///
/// Failures are logged, never returned.
pub fn load_corpus<P: AsRef<Path>>(filename: P) -> Vec<String> {
	let path = filename.as_ref();
	let file = match File::open(path) {
		Ok(file) => file,
		Err(e) => {
			warn!("Corpus {} unavailable, using an empty corpus: {}", path.display(), e);
			return Vec::new();
		}
	};

	let mut reader = BufReader::new(file);
	let mut lines = Vec::new();
	let mut buffer = Vec::new();
	loop {
		buffer.clear();
		match reader.read_until(b'\n', &mut buffer) {
			Ok(0) => break,
			Ok(_) => lines.push(decode_line(&buffer)),
			Err(e) => {
				warn!("Corpus {} truncated after {} lines: {}", path.display(), lines.len(), e);
				break;
			}
		}
	}

	debug!("Read {} lines from {}", lines.len(), path.display());
	lines
}

/// Decodes one raw line, dropping its `\n` or `\r\n` terminator.
fn decode_line(raw: &[u8]) -> String {
	let line = raw.strip_suffix(b"\n").unwrap_or(raw);
	let line = line.strip_suffix(b"\r").unwrap_or(line);
	String::from_utf8_lossy(line).into_owned()
}

/// Extracts the base filename without extension.
///
/// Examples:
/// - `"./data/alice.txt"` → `"alice"`
/// - `"alice.txt"` → `"alice"`
pub fn get_filename<P: AsRef<Path>>(input_path: P) -> io::Result<String> {
	let stem = input_path
		.as_ref()
		.file_stem()
		.ok_or_else(|| io::Error::new(io::ErrorKind::InvalidInput, "Path has no filename"))?;

	Ok(stem.to_string_lossy().to_string())
}

/// Normalize a folder path.
///
/// - `"."` or `"./"` resolves to the current working directory
/// - Other paths are returned as-is (not canonicalized)
pub fn normalize_folder(input: &str) -> PathBuf {
	if input == "." || input == "./" {
		env::current_dir().unwrap_or_else(|_| PathBuf::from("."))
	} else {
		PathBuf::from(input)
	}
}

/// Lists the stems of all files with a given extension in a directory.
///
/// Returns names only (no paths, no extension), sorted.
pub fn list_files<P: AsRef<Path>>(dir: P, extension: &str) -> io::Result<Vec<String>> {
	let mut files = Vec::new();

	for entry in fs::read_dir(dir)? {
		let path = entry?.path();

		if path.is_file() && path.extension() == Some(std::ffi::OsStr::new(extension)) {
			files.push(get_filename(&path)?);
		}
	}

	files.sort();
	Ok(files)
}
