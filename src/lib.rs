//! Decodes six-dot chord input into letters and suggests the nearest
//! dictionary word by edit distance.
//!
//! ```
//! use braillecorrect::{WordIndex, decode_str};
//!
//! let index = WordIndex::build(["cat", "car", "card", "dog"].into_iter().collect());
//! let decoded = decode_str("DK D WQKO");
//! assert_eq!(decoded.to_string(), "CAT");
//! assert_eq!(index.suggest_decoded(&decoded, 2).word(), Some("CAT"));
//! ```

pub mod bktree;
pub mod cell;
pub mod chord;
pub mod config;
pub mod decoder;
pub mod dictionary;
pub mod distance;
pub mod engine;
pub mod error;
pub mod spellcheck;

pub use bktree::{BkTree, SearchResult};
pub use cell::{DotPattern, Symbol, canonical_pattern, dots_to_pattern, pattern_to_chord};
pub use chord::{Chord, nearest_symbol, resolve_chord};
pub use config::{Config, DEFAULT_MAX_DISTANCE};
pub use decoder::{DecodedWord, decode, decode_str, parse_chords};
pub use dictionary::{CorrectionLog, WordCollection, load_dictionary};
pub use distance::{Levenshtein, Metric, levenshtein};
pub use engine::{Autocorrect, Outcome};
pub use error::{Error, Result};
pub use spellcheck::{SuggestedCorrection, Suggestion, WordIndex};
