use crate::cell::{CANONICAL_TABLE, DotPattern, Symbol, key_to_dot};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

/// Keys pressed together for a single cell. Keys are stored uppercased, so
/// `"dk"` and `"KD"` are the same chord.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Chord {
    keys: BTreeSet<char>,
}

impl Chord {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn press(&mut self, key: char) {
        self.keys.insert(key.to_ascii_uppercase());
    }

    pub fn keys(&self) -> impl Iterator<Item = char> + '_ {
        self.keys.iter().copied()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// The dots raised by this chord. Keys missing from the key map add nothing.
    pub fn pattern(&self) -> DotPattern {
        let mut pattern = DotPattern::EMPTY;
        for dot in self.keys.iter().filter_map(|&k| key_to_dot(k)) {
            pattern = pattern.with_dot(dot);
        }
        pattern
    }
}

impl FromIterator<char> for Chord {
    fn from_iter<I: IntoIterator<Item = char>>(iter: I) -> Self {
        let mut chord = Chord::new();
        for key in iter {
            chord.press(key);
        }
        chord
    }
}

impl FromStr for Chord {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(s.chars().filter(|c| !c.is_whitespace()).collect())
    }
}

impl fmt::Display for Chord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for key in &self.keys {
            write!(f, "{key}")?;
        }
        Ok(())
    }
}

/// The canonical symbol closest to `pattern`, with its distance.
///
/// Scans the whole table; among equally close symbols the alphabetically
/// first one wins.
pub fn nearest_symbol(pattern: DotPattern) -> (Symbol, usize) {
    let (first, rest) = CANONICAL_TABLE.split_at(1);
    let mut best = (first[0].0, pattern.distance(first[0].1));
    for &(symbol, canonical) in rest {
        let distance = pattern.distance(canonical);
        if distance < best.1 {
            best = (symbol, distance);
        }
    }
    best
}

/// Resolves a chord to a letter. Never fails: unknown keys are dropped and an
/// empty pattern still has a nearest symbol.
pub fn resolve_chord(chord: &Chord) -> Symbol {
    nearest_symbol(chord.pattern()).0
}
