//! Long-lived autocorrect state for a front-end: the current word collection,
//! its index, and the correction log.
//!
//! The index lives behind an `Arc` snapshot. Rebuilding constructs a complete
//! new [`WordIndex`] first and only then swaps it in, so a caller still holding
//! the previous snapshot keeps searching a complete tree.

use crate::bktree::SearchResult;
use crate::config::Config;
use crate::decoder::{DecodedWord, decode_str};
use crate::dictionary::{CorrectionLog, WordCollection, load_dictionary};
use crate::error::{Error, Result};
use crate::spellcheck::{SuggestedCorrection, WordIndex};
use parking_lot::{Mutex, RwLock};
use std::path::Path;
use std::sync::Arc;
use tracing::{info, warn};

/// What a front-end shows after one line of chord input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    pub decoded: DecodedWord,
    pub suggestion: SuggestedCorrection,
}

struct Loaded {
    words: WordCollection,
    index: Arc<WordIndex>,
}

pub struct Autocorrect {
    config: Config,
    log: CorrectionLog,
    state: RwLock<Option<Loaded>>,
    // Held across every read-build-swap so loads and corrections apply in order.
    rebuild_guard: Mutex<()>,
}

impl Autocorrect {
    pub fn new(config: Config) -> Self {
        let log = CorrectionLog::new(config.correction_log.clone());
        Autocorrect {
            config,
            log,
            state: RwLock::new(None),
            rebuild_guard: Mutex::new(()),
        }
    }

    /// Creates the engine and, if the config names a word list, loads it.
    pub fn from_config(config: Config) -> Result<Self> {
        let word_list = config.word_list.clone();
        let engine = Self::new(config);
        if let Some(path) = word_list {
            engine.load(path)?;
        }
        Ok(engine)
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn correction_log(&self) -> &CorrectionLog {
        &self.log
    }

    /// Reads `word_list`, merges the correction log into it and rebuilds.
    /// Returns the number of indexed words.
    pub fn load(&self, word_list: impl AsRef<Path>) -> Result<usize> {
        let _guard = self.rebuild_guard.lock();
        let words = load_dictionary(word_list, &self.log)?;
        Ok(self.install(words))
    }

    /// Replaces the current collection and index wholesale.
    pub fn rebuild(&self, words: WordCollection) -> usize {
        let _guard = self.rebuild_guard.lock();
        self.install(words)
    }

    // Caller holds `rebuild_guard`.
    fn install(&self, words: WordCollection) -> usize {
        let index = Arc::new(WordIndex::build(words.clone()));
        let count = index.len();
        *self.state.write() = Some(Loaded { words, index });
        count
    }

    pub fn is_loaded(&self) -> bool {
        self.state.read().is_some()
    }

    /// The current index, shared with any other reader.
    pub fn snapshot(&self) -> Result<Arc<WordIndex>> {
        self.state
            .read()
            .as_ref()
            .map(|loaded| Arc::clone(&loaded.index))
            .ok_or(Error::EmptyIndex)
    }

    pub fn search(&self, query: &str, max_distance: usize) -> Result<Vec<SearchResult>> {
        Ok(self.snapshot()?.search(query, max_distance))
    }

    pub fn suggest(&self, decoded: &DecodedWord) -> Result<SuggestedCorrection> {
        Ok(self
            .snapshot()?
            .suggest_decoded(decoded, self.config.max_distance))
    }

    /// Decodes one line of chords and finds the best dictionary match for it.
    pub fn process(&self, line: &str) -> Result<Outcome> {
        let index = self.snapshot()?;
        let decoded = decode_str(line);
        let suggestion = index.suggest_decoded(&decoded, self.config.max_distance);
        Ok(Outcome {
            decoded,
            suggestion,
        })
    }

    /// Records a word the user typed in place of a wrong suggestion.
    ///
    /// The word goes to the correction log; if an index is loaded it is
    /// rebuilt from the current collection plus the new word. Learning and
    /// loading are serialized, so a concurrent load never drops a logged
    /// correction. Readers keep the previous snapshot during the rebuild.
    pub fn learn(&self, word: &str) -> Result<String> {
        let _guard = self.rebuild_guard.lock();
        let word = self.log.append(word)?;
        let current = self
            .state
            .read()
            .as_ref()
            .map(|loaded| loaded.words.clone());
        match current {
            Some(mut words) => {
                if words.insert(&word)? {
                    self.install(words);
                }
                info!(%word, "learned correction");
            }
            None => warn!(%word, "correction saved but no dictionary is loaded"),
        }
        Ok(word)
    }
}
