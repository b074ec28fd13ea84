use crate::bktree::{BkTree, SearchResult};
use crate::decoder::DecodedWord;
use crate::dictionary::WordCollection;
use rayon::prelude::*;
use serde::Serialize;
use std::time::Instant;
use tracing::info;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Suggestion {
    pub word: String,
    pub distance: usize,
}

impl From<SearchResult> for Suggestion {
    fn from(result: SearchResult) -> Self {
        Suggestion {
            word: result.word,
            distance: result.distance,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SuggestedCorrection {
    NoMatch,
    Suggestion(Suggestion),
}

impl SuggestedCorrection {
    pub fn word(&self) -> Option<&str> {
        match self {
            SuggestedCorrection::NoMatch => None,
            SuggestedCorrection::Suggestion(s) => Some(&s.word),
        }
    }
}

// Dictionary words are stored trimmed and uppercase; queries are matched the same way.
fn normalize_query(query: &str) -> String {
    query.trim().to_uppercase()
}

/// An immutable edit-distance index over one word collection.
///
/// Rebuilding means building a new `WordIndex`; an existing one is never
/// modified, so it can be shared freely between readers.
#[derive(Debug, Clone)]
pub struct WordIndex {
    tree: BkTree,
}

impl WordIndex {
    pub fn build(words: WordCollection) -> Self {
        let start = Instant::now();
        let mut tree = BkTree::default();
        tree.extend(words);
        info!(
            words = tree.len(),
            depth = tree.depth(),
            elapsed = ?start.elapsed(),
            "built word index"
        );
        WordIndex { tree }
    }

    pub fn len(&self) -> usize {
        self.tree.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tree.is_empty()
    }

    /// All indexed words within `max_distance` of `query`, closest first.
    pub fn search(&self, query: &str, max_distance: usize) -> Vec<SearchResult> {
        self.tree.search(&normalize_query(query), max_distance)
    }

    /// The single best match for `word`: smallest distance, then alphabetical.
    pub fn suggest(&self, word: &str, max_distance: usize) -> SuggestedCorrection {
        match self.tree.nearest(&normalize_query(word), max_distance) {
            Some(best) => SuggestedCorrection::Suggestion(best.into()),
            None => SuggestedCorrection::NoMatch,
        }
    }

    pub fn suggest_decoded(
        &self,
        decoded: &DecodedWord,
        max_distance: usize,
    ) -> SuggestedCorrection {
        self.suggest(&decoded.to_string(), max_distance)
    }

    /// Up to `n_suggestions` matches in ranked order.
    pub fn suggest_ranked(
        &self,
        word: &str,
        max_distance: usize,
        n_suggestions: usize,
    ) -> Vec<Suggestion> {
        let mut results = self.search(word, max_distance);
        results.truncate(n_suggestions);
        results.into_iter().map(Suggestion::from).collect()
    }

    /// Best match for each word, computed in parallel. Output order follows input order.
    pub fn suggest_many(
        &self,
        words: &[String],
        max_distance: usize,
    ) -> Vec<SuggestedCorrection> {
        words
            .par_iter()
            .map(|word| self.suggest(word, max_distance))
            .collect()
    }
}
