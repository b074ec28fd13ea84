//! Plain-text word lists: one word per line, case-insensitive, blank lines
//! ignored. The same format backs both the user's dictionary file and the
//! append-only log of learned corrections.

use crate::error::{Error, Result};
use std::collections::BTreeSet;
use std::fs::{self, File, OpenOptions};
use std::io::{BufRead, BufReader, ErrorKind, Read, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Trims and uppercases a word; `None` if nothing is left.
pub fn normalize(word: &str) -> Option<String> {
    let trimmed = word.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_uppercase())
    }
}

/// A de-duplicated, uppercase set of words.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordCollection {
    words: BTreeSet<String>,
}

impl WordCollection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let mut collection = WordCollection::new();
        for line in BufReader::new(reader).lines() {
            if let Some(word) = normalize(&line?) {
                collection.words.insert(word);
            }
        }
        Ok(collection)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let collection = Self::from_reader(File::open(path)?)?;
        info!(path = %path.display(), words = collection.len(), "loaded word list");
        Ok(collection)
    }

    /// Adds a word after normalizing it. Returns `false` if it was already present.
    pub fn insert(&mut self, word: &str) -> Result<bool> {
        let word = normalize(word)
            .ok_or_else(|| Error::InvalidArgument("cannot add an empty word".into()))?;
        Ok(self.words.insert(word))
    }

    pub fn contains(&self, word: &str) -> bool {
        normalize(word).is_some_and(|w| self.words.contains(&w))
    }

    pub fn merge(&mut self, other: WordCollection) {
        self.words.extend(other.words);
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }
}

impl<S: AsRef<str>> FromIterator<S> for WordCollection {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let words = iter
            .into_iter()
            .filter_map(|w| normalize(w.as_ref()))
            .collect();
        WordCollection { words }
    }
}

impl IntoIterator for WordCollection {
    type Item = String;
    type IntoIter = std::collections::btree_set::IntoIter<String>;

    fn into_iter(self) -> Self::IntoIter {
        self.words.into_iter()
    }
}

/// Append-only file of words the user supplied when a suggestion was wrong.
#[derive(Debug, Clone)]
pub struct CorrectionLog {
    path: PathBuf,
}

impl CorrectionLog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        CorrectionLog { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Appends one normalized word, creating the file (and its directory) if needed.
    pub fn append(&self, word: &str) -> Result<String> {
        let word = normalize(word)
            .ok_or_else(|| Error::InvalidArgument("cannot save an empty correction".into()))?;
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        writeln!(file, "{word}")?;
        debug!(path = %self.path.display(), %word, "appended correction");
        Ok(word)
    }

    /// Reads every logged correction. A log that does not exist yet is empty.
    pub fn read(&self) -> Result<WordCollection> {
        match File::open(&self.path) {
            Ok(file) => WordCollection::from_reader(file),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "no correction log yet");
                Ok(WordCollection::new())
            }
            Err(e) => Err(e.into()),
        }
    }
}

/// The word list at `path` merged with every logged correction.
pub fn load_dictionary(path: impl AsRef<Path>, log: &CorrectionLog) -> Result<WordCollection> {
    let mut words = WordCollection::load(path)?;
    let corrections = log.read()?;
    let learned = corrections.len();
    words.merge(corrections);
    info!(words = words.len(), learned, "dictionary ready");
    Ok(words)
}
