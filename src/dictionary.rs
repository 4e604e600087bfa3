//! Persistence collaborator for the search core: a flat word ->
//! frequency table stored as one JSON object, no nesting, no schema
//! version. The core never touches the disk itself; the host loads
//! a mapping at startup and saves a snapshot after each learned
//! selection.

use std::collections::HashMap;
use std::fs::File;
use std::io::{BufReader, BufWriter, ErrorKind, Write};
use std::path::{Path, PathBuf};

use crate::WordFrequency;

/// What can go wrong around the dictionary file.
/// The search core itself never produces these: its own signaling
/// stays on plain return values.
#[derive(Debug, thiserror::Error)]
pub enum DictionaryError {
    #[error("can't access dictionary file: {0}")]
    Io(#[from] std::io::Error),
    #[error("dictionary file is not a valid word table: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Handle on the dictionary file holding the persisted word table.
pub struct Dictionary {
    path: PathBuf,
}

impl Dictionary {
    /// Create a dictionary over the given file.
    /// Nothing is read until [`Dictionary::load`] is called.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Dictionary { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the stored word table.
    pub fn load(&self) -> Result<HashMap<String, WordFrequency>, DictionaryError> {
        let file = File::open(&self.path)?;
        Ok(serde_json::from_reader(BufReader::new(file))?)
    }

    /// Read the stored word table, falling back to the built-in
    /// default words when the file is missing or can't be read.
    pub fn load_or_default(&self) -> HashMap<String, WordFrequency> {
        match self.load() {
            Ok(words) => {
                log::info!("loaded {} words from {}", words.len(), self.path.display());
                words
            }
            Err(DictionaryError::Io(error)) if error.kind() == ErrorKind::NotFound => {
                log::info!(
                    "no dictionary file at {}, using default words",
                    self.path.display()
                );
                default_words()
            }
            Err(error) => {
                log::warn!(
                    "can't read {} ({}), using default words",
                    self.path.display(),
                    error
                );
                default_words()
            }
        }
    }

    /// Write the word table, replacing the previous snapshot.
    pub fn save(&self, words: &HashMap<String, WordFrequency>) -> Result<(), DictionaryError> {
        let file = File::create(&self.path)?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer(&mut writer, words)?;
        writer.flush()?;

        log::debug!("saved {} words to {}", words.len(), self.path.display());
        Ok(())
    }
}

/// The words seeded on a first start, before anything was learned.
pub fn default_words() -> HashMap<String, WordFrequency> {
    [
        ("bear", 5),
        ("bell", 2),
        ("bid", 8),
        ("buy", 10),
        ("car", 7),
        ("care", 3),
        ("camp", 1),
        ("can", 4),
        ("camera", 6),
        ("cancel", 2),
        ("butter", 3),
    ]
    .into_iter()
    .map(|(word, frequency)| (word.to_string(), frequency))
    .collect()
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::{default_words, Dictionary, DictionaryError};

    #[test]
    fn save_and_load_round_trip() {
        let directory = tempfile::tempdir().expect("can't create temp directory");
        let dictionary = Dictionary::new(directory.path().join("words.json"));

        let words = default_words();
        dictionary.save(&words).expect("save should succeed");

        assert_eq!(words, dictionary.load().expect("load should succeed"));
    }

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let directory = tempfile::tempdir().expect("can't create temp directory");
        let dictionary = Dictionary::new(directory.path().join("absent.json"));

        assert!(matches!(
            dictionary.load(),
            Err(DictionaryError::Io(_))
        ));
        assert_eq!(default_words(), dictionary.load_or_default());
    }

    #[test]
    fn malformed_file_falls_back_to_defaults() {
        let directory = tempfile::tempdir().expect("can't create temp directory");
        let path = directory.path().join("broken.json");

        let mut file = std::fs::File::create(&path).expect("can't create file");
        file.write_all(b"{ not json").expect("can't write file");

        let dictionary = Dictionary::new(path);
        assert!(matches!(
            dictionary.load(),
            Err(DictionaryError::Parse(_))
        ));
        assert_eq!(default_words(), dictionary.load_or_default());
    }
}
