//! Six-dot cell encoding: the fixed letter alphabet and the key-to-dot map.
//!
//! Dot positions are numbered 1 through 6. A [`DotPattern`] stores dot `n`
//! in bit `n - 1`, and prints as a string of six `0`/`1` characters with
//! dot 1 first, so `A` (dot 1) prints as `100000`.

use crate::chord::Chord;
use crate::distance::edit_distance;
use crate::error::{Error, Result};
use std::fmt;

pub const DOT_COUNT: usize = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct DotPattern(u8);

impl DotPattern {
    pub const EMPTY: DotPattern = DotPattern(0);

    pub fn bits(self) -> u8 {
        self.0
    }

    pub fn is_raised(self, dot: u8) -> bool {
        (1..=DOT_COUNT as u8).contains(&dot) && self.0 & (1 << (dot - 1)) != 0
    }

    /// Copy of this pattern with `dot` raised. `dot` must be in 1..=6.
    pub(crate) fn with_dot(self, dot: u8) -> DotPattern {
        debug_assert!((1..=DOT_COUNT as u8).contains(&dot));
        DotPattern(self.0 | 1 << (dot - 1))
    }

    /// Raised dot positions in ascending order.
    pub fn dots(self) -> impl Iterator<Item = u8> {
        (1..=DOT_COUNT as u8).filter(move |&d| self.is_raised(d))
    }

    fn cells(self) -> [bool; DOT_COUNT] {
        std::array::from_fn(|i| self.0 & (1 << i) != 0)
    }

    /// Edit distance between the two six-position bit strings.
    pub fn distance(self, other: DotPattern) -> usize {
        edit_distance(&self.cells(), &other.cells())
    }

    const fn from_valid_dots(dots: &[u8]) -> DotPattern {
        let mut bits = 0u8;
        let mut i = 0;
        while i < dots.len() {
            assert!(dots[i] >= 1 && dots[i] <= DOT_COUNT as u8);
            bits |= 1 << (dots[i] - 1);
            i += 1;
        }
        DotPattern(bits)
    }
}

impl fmt::Display for DotPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for raised in self.cells() {
            f.write_str(if raised { "1" } else { "0" })?;
        }
        Ok(())
    }
}

/// Builds a pattern with dot `n` raised for each `n` in `dots`.
///
/// Repeated positions are harmless. A position outside 1..=6 is rejected.
pub fn dots_to_pattern<I>(dots: I) -> Result<DotPattern>
where
    I: IntoIterator<Item = u8>,
{
    let mut bits = 0u8;
    for dot in dots {
        if !(1..=DOT_COUNT as u8).contains(&dot) {
            return Err(Error::InvalidArgument(format!(
                "dot position {dot} is outside 1..={DOT_COUNT}"
            )));
        }
        bits |= 1 << (dot - 1);
    }
    Ok(DotPattern(bits))
}

#[rustfmt::skip]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Symbol {
    A, B, C, D, E, F, G, H, I, J, K, L, M,
    N, O, P, Q, R, S, T, U, V, W, X, Y, Z,
}

impl Symbol {
    /// Every symbol in canonical (alphabetical) order. Nearest-symbol ties
    /// resolve to whichever comes first here.
    #[rustfmt::skip]
    pub const ALL: [Symbol; 26] = [
        Symbol::A, Symbol::B, Symbol::C, Symbol::D, Symbol::E, Symbol::F, Symbol::G,
        Symbol::H, Symbol::I, Symbol::J, Symbol::K, Symbol::L, Symbol::M, Symbol::N,
        Symbol::O, Symbol::P, Symbol::Q, Symbol::R, Symbol::S, Symbol::T, Symbol::U,
        Symbol::V, Symbol::W, Symbol::X, Symbol::Y, Symbol::Z,
    ];

    pub fn as_char(self) -> char {
        (b'A' + self as u8) as char
    }

    pub fn from_char(c: char) -> Result<Symbol> {
        let upper = c.to_ascii_uppercase();
        if upper.is_ascii_uppercase() {
            Ok(Symbol::ALL[(upper as u8 - b'A') as usize])
        } else {
            Err(Error::UnknownSymbol(c))
        }
    }

    pub fn dots(self) -> &'static [u8] {
        CELL_DOTS[self as usize]
    }

    pub fn pattern(self) -> DotPattern {
        CANONICAL_TABLE[self as usize].1
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

const CELL_DOTS: [&[u8]; 26] = [
    &[1],             // A
    &[1, 2],          // B
    &[1, 4],          // C
    &[1, 4, 5],       // D
    &[1, 5],          // E
    &[1, 2, 4],       // F
    &[1, 2, 4, 5],    // G
    &[1, 2, 5],       // H
    &[2, 4],          // I
    &[2, 4, 5],       // J
    &[1, 3],          // K
    &[1, 2, 3],       // L
    &[1, 3, 4],       // M
    &[1, 3, 4, 5],    // N
    &[1, 3, 5],       // O
    &[1, 2, 3, 4],    // P
    &[1, 2, 3, 4, 5], // Q
    &[1, 2, 3, 5],    // R
    &[2, 3, 4],       // S
    &[2, 3, 4, 5],    // T
    &[1, 3, 6],       // U
    &[1, 2, 3, 6],    // V
    &[2, 4, 5, 6],    // W
    &[1, 3, 4, 6],    // X
    &[1, 3, 4, 5, 6], // Y
    &[1, 3, 5, 6],    // Z
];

const fn build_canonical_table() -> [(Symbol, DotPattern); 26] {
    let mut table = [(Symbol::A, DotPattern::EMPTY); 26];
    let mut i = 0;
    while i < 26 {
        table[i] = (Symbol::ALL[i], DotPattern::from_valid_dots(CELL_DOTS[i]));
        i += 1;
    }
    table
}

/// Symbol to cell pattern, in [`Symbol::ALL`] order. Evaluated at compile time.
pub static CANONICAL_TABLE: [(Symbol, DotPattern); 26] = build_canonical_table();

/// Physical key to dot position.
const KEY_MAP: [(char, u8); DOT_COUNT] =
    [('D', 1), ('W', 2), ('Q', 3), ('K', 4), ('O', 5), ('P', 6)];

/// Case-insensitive key lookup; `None` for keys that are not part of the map.
pub fn key_to_dot(key: char) -> Option<u8> {
    let key = key.to_ascii_uppercase();
    KEY_MAP.iter().find(|(k, _)| *k == key).map(|&(_, dot)| dot)
}

pub fn dot_to_key(dot: u8) -> Option<char> {
    KEY_MAP.iter().find(|(_, d)| *d == dot).map(|&(k, _)| k)
}

pub fn canonical_pattern(symbol: Symbol) -> DotPattern {
    symbol.pattern()
}

/// The chord whose keys raise exactly the dots of `pattern`.
pub fn pattern_to_chord(pattern: DotPattern) -> Chord {
    pattern.dots().filter_map(dot_to_key).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_dots_to_pattern() {
        assert_eq!(dots_to_pattern([1]).unwrap().to_string(), "100000");
        assert_eq!(dots_to_pattern([1, 2]).unwrap().to_string(), "110000");
        assert_eq!(dots_to_pattern([6, 1, 6]).unwrap().to_string(), "100001");
        assert_eq!(
            dots_to_pattern(std::iter::empty()).unwrap(),
            DotPattern::EMPTY
        );
    }

    #[test]
    fn test_dots_to_pattern_rejects_out_of_range() {
        assert!(matches!(
            dots_to_pattern([0]),
            Err(Error::InvalidArgument(_))
        ));
        assert!(matches!(
            dots_to_pattern([1, 7]),
            Err(Error::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_canonical_table_matches_dot_lists() {
        for &(symbol, pattern) in CANONICAL_TABLE.iter() {
            let rebuilt = dots_to_pattern(symbol.dots().iter().copied()).unwrap();
            assert_eq!(pattern, rebuilt, "mismatch for {symbol}");
            assert_eq!(pattern.dots().collect::<Vec<_>>(), symbol.dots());
        }
    }

    #[test]
    fn test_canonical_patterns_are_unique() {
        let patterns: HashSet<_> = Symbol::ALL.iter().map(|s| s.pattern()).collect();
        assert_eq!(patterns.len(), 26);
    }

    #[test]
    fn test_symbol_chars() {
        assert_eq!(Symbol::A.as_char(), 'A');
        assert_eq!(Symbol::Z.as_char(), 'Z');
        assert_eq!(Symbol::from_char('q').unwrap(), Symbol::Q);
        assert!(matches!(
            Symbol::from_char('1'),
            Err(Error::UnknownSymbol('1'))
        ));
    }

    #[test]
    fn test_key_map() {
        assert_eq!(key_to_dot('d'), Some(1));
        assert_eq!(key_to_dot('P'), Some(6));
        assert_eq!(key_to_dot('x'), None);
        for dot in 1..=6 {
            assert_eq!(key_to_dot(dot_to_key(dot).unwrap()), Some(dot));
        }
    }

    #[test]
    fn test_pattern_distance() {
        assert_eq!(Symbol::A.pattern().distance(Symbol::B.pattern()), 1);
        assert_eq!(Symbol::A.pattern().distance(DotPattern::EMPTY), 1);
        assert_eq!(Symbol::T.pattern().distance(Symbol::T.pattern()), 0);
    }

    #[test]
    fn test_pattern_to_chord() {
        let chord = pattern_to_chord(Symbol::D.pattern());
        assert_eq!(chord.to_string(), "DKO");
    }
}
