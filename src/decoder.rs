use crate::cell::Symbol;
use crate::chord::{Chord, resolve_chord};
use std::fmt;

/// Letters produced by decoding a chord sequence, one per chord.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct DecodedWord(Vec<Symbol>);

impl DecodedWord {
    pub fn symbols(&self) -> &[Symbol] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for DecodedWord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for symbol in &self.0 {
            write!(f, "{symbol}")?;
        }
        Ok(())
    }
}

/// Splits a line of input into chords: whitespace separates chords, each
/// character of a token is one key.
pub fn parse_chords(input: &str) -> Vec<Chord> {
    input
        .split_whitespace()
        .map(|token| token.chars().collect())
        .collect()
}

/// Resolves each chord on its own, in order.
pub fn decode(chords: &[Chord]) -> DecodedWord {
    DecodedWord(chords.iter().map(resolve_chord).collect())
}

pub fn decode_str(input: &str) -> DecodedWord {
    decode(&parse_chords(input))
}
