/// Levenshtein distance over arbitrary slices with unit insert, delete and substitute costs.
pub fn edit_distance<T: PartialEq>(a: &[T], b: &[T]) -> usize {
    let (shorter, longer) = if a.len() <= b.len() { (a, b) } else { (b, a) };
    if shorter.is_empty() {
        return longer.len();
    }

    let n = longer.len();
    let mut prev: Vec<usize> = (0..=n).collect();
    let mut curr = vec![0; n + 1];

    for (i, sc) in shorter.iter().enumerate() {
        curr[0] = i + 1;
        for j in 1..=n {
            let cost = if *sc == longer[j - 1] { 0 } else { 1 };
            let ins = curr[j - 1] + 1;
            let del = prev[j] + 1;
            let sub = prev[j - 1] + cost;
            curr[j] = ins.min(del).min(sub);
        }
        std::mem::swap(&mut prev, &mut curr);
    }
    prev[n]
}

/// Edit distance over Unicode scalar values.
pub fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    edit_distance(&a, &b)
}

/// A distance function over strings.
///
/// Implementations must be a true metric (non-negative, symmetric, zero only
/// for equal inputs, triangle inequality) or [`crate::bktree::BkTree`] search
/// will prune subtrees that still hold matches.
pub trait Metric {
    fn distance(&self, a: &str, b: &str) -> usize;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Levenshtein;

impl Metric for Levenshtein {
    fn distance(&self, a: &str, b: &str) -> usize {
        levenshtein(a, b)
    }
}

impl<F> Metric for F
where
    F: Fn(&str, &str) -> usize,
{
    fn distance(&self, a: &str, b: &str) -> usize {
        self(a, b)
    }
}
