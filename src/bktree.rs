//! Burkhard-Keller tree over strings.
//!
//! Each node keeps its children keyed by their distance to the node's word,
//! at most one child per distance. A radius search visits a child only when
//! its key lies within `d - radius ..= d + radius` of the query's distance
//! `d` to the parent; by the triangle inequality no other child subtree can
//! hold a word within the radius.

use crate::distance::{Levenshtein, Metric};
use serde::Serialize;
use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::collections::btree_map::Entry;

/// One match: ordered by distance, then by word.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct SearchResult {
    pub distance: usize,
    pub word: String,
}

impl Ord for SearchResult {
    fn cmp(&self, other: &Self) -> Ordering {
        self.distance
            .cmp(&other.distance)
            .then_with(|| self.word.cmp(&other.word))
    }
}

impl PartialOrd for SearchResult {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

#[derive(Debug, Clone)]
struct Node {
    word: String,
    children: BTreeMap<usize, Node>,
}

impl Node {
    fn new(word: String) -> Self {
        Node {
            word,
            children: BTreeMap::new(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct BkTree<M = Levenshtein> {
    root: Option<Node>,
    metric: M,
    len: usize,
}

impl Default for BkTree<Levenshtein> {
    fn default() -> Self {
        Self::new(Levenshtein)
    }
}

impl<M: Metric> BkTree<M> {
    pub fn new(metric: M) -> Self {
        BkTree {
            root: None,
            metric,
            len: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    pub fn metric(&self) -> &M {
        &self.metric
    }

    /// Adds `word` to the tree. Returns `false` if an equal word is already
    /// indexed, in which case the tree is left unchanged.
    pub fn insert(&mut self, word: impl Into<String>) -> bool {
        let word = word.into();
        let Some(mut node) = self.root.as_mut() else {
            self.root = Some(Node::new(word));
            self.len = 1;
            return true;
        };

        loop {
            let d = self.metric.distance(&word, &node.word);
            if d == 0 && word == node.word {
                return false;
            }
            match node.children.entry(d) {
                Entry::Occupied(child) => node = child.into_mut(),
                Entry::Vacant(slot) => {
                    slot.insert(Node::new(word));
                    self.len += 1;
                    return true;
                }
            }
        }
    }

    /// Every indexed word within `max_distance` of `query`, sorted by
    /// distance and then by word.
    pub fn search(&self, query: &str, max_distance: usize) -> Vec<SearchResult> {
        let mut found = Vec::new();
        let Some(root) = self.root.as_ref() else {
            return found;
        };

        let mut stack = vec![root];
        while let Some(node) = stack.pop() {
            let d = self.metric.distance(query, &node.word);
            if d <= max_distance {
                found.push(SearchResult {
                    distance: d,
                    word: node.word.clone(),
                });
            }

            let lo = d.saturating_sub(max_distance);
            let hi = d.saturating_add(max_distance);
            stack.extend(node.children.range(lo..=hi).map(|(_, child)| child));
        }

        found.sort_unstable();
        found
    }

    /// The closest indexed word within `max_distance`, if any.
    pub fn nearest(&self, query: &str, max_distance: usize) -> Option<SearchResult> {
        self.search(query, max_distance).into_iter().next()
    }

    /// Longest root-to-leaf path, counting the root as depth 1.
    pub fn depth(&self) -> usize {
        let Some(root) = self.root.as_ref() else {
            return 0;
        };
        let mut deepest = 0;
        let mut stack = vec![(root, 1)];
        while let Some((node, depth)) = stack.pop() {
            deepest = deepest.max(depth);
            stack.extend(node.children.values().map(|child| (child, depth + 1)));
        }
        deepest
    }

    /// Indexed words in depth-first order.
    pub fn words(&self) -> Vec<&str> {
        let mut words = Vec::with_capacity(self.len);
        let mut stack: Vec<&Node> = self.root.iter().collect();
        while let Some(node) = stack.pop() {
            words.push(node.word.as_str());
            stack.extend(node.children.values());
        }
        words
    }
}

impl<S: Into<String>> FromIterator<S> for BkTree<Levenshtein> {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut tree: BkTree = BkTree::default();
        tree.extend(iter);
        tree
    }
}

impl<M: Metric, S: Into<String>> Extend<S> for BkTree<M> {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        for word in iter {
            self.insert(word);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::distance::levenshtein;

    const WORDS: [&str; 16] = [
        "CAT", "CAR", "CARD", "DOG", "CART", "BAT", "HAT", "CHAT", "COAT", "DOT", "DOGS", "BOOK",
        "BACK", "CASTLE", "CAST", "A",
    ];

    fn brute_force(query: &str, max_distance: usize) -> Vec<SearchResult> {
        let mut expected: Vec<SearchResult> = WORDS
            .iter()
            .map(|w| SearchResult {
                distance: levenshtein(query, w),
                word: w.to_string(),
            })
            .filter(|r| r.distance <= max_distance)
            .collect();
        expected.sort();
        expected
    }

    #[test]
    fn test_empty_tree() {
        let tree: BkTree = BkTree::default();
        assert!(tree.is_empty());
        assert_eq!(tree.len(), 0);
        assert_eq!(tree.depth(), 0);
        assert!(tree.search("CAT", 2).is_empty());
        assert!(tree.nearest("CAT", 2).is_none());
    }

    #[test]
    fn test_search_scenario() {
        let tree: BkTree = ["CAT", "CAR", "CARD", "DOG"].into_iter().collect();
        let results = tree.search("CAT", 1);
        assert_eq!(
            results,
            vec![
                SearchResult {
                    distance: 0,
                    word: "CAT".into(),
                },
                SearchResult {
                    distance: 1,
                    word: "CAR".into(),
                },
            ]
        );
    }

    #[test]
    fn test_search_matches_brute_force() {
        let tree: BkTree = WORDS.into_iter().collect();
        for query in ["CAT", "CASLTE", "DIG", "BOKO", "", "XYZZY", "CHART"] {
            for max_distance in 0..=4 {
                assert_eq!(
                    tree.search(query, max_distance),
                    brute_force(query, max_distance),
                    "query {query:?} within {max_distance}"
                );
            }
        }
    }

    #[test]
    fn test_insertion_order_does_not_change_results() {
        let forward: BkTree = WORDS.into_iter().collect();
        let backward: BkTree = WORDS.into_iter().rev().collect();
        for query in ["CAT", "BOOT", "DOGE"] {
            for max_distance in 0..=3 {
                assert_eq!(
                    forward.search(query, max_distance),
                    backward.search(query, max_distance)
                );
            }
        }
    }

    #[test]
    fn test_results_sorted_with_word_tiebreak() {
        let tree: BkTree = ["HAT", "BAT", "CAT", "MAT"].into_iter().collect();
        let words: Vec<_> = tree.search("XAT", 1).into_iter().map(|r| r.word).collect();
        assert_eq!(words, ["BAT", "CAT", "HAT", "MAT"]);
        assert!(tree.search("CAT", 3).windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn test_duplicate_insert_is_ignored() {
        let mut tree: BkTree = BkTree::default();
        assert!(tree.insert("CAT"));
        assert!(tree.insert("CAR"));
        assert!(!tree.insert("CAT"));
        assert!(!tree.insert("CAR"));
        assert_eq!(tree.len(), 2);
        assert_eq!(tree.search("CAT", 0).len(), 1);
    }

    #[test]
    fn test_children_keyed_by_distance() {
        // CAR and BAT are both one edit from CAT, so BAT lands under CAR.
        let tree: BkTree = ["CAT", "CAR", "BAT"].into_iter().collect();
        assert_eq!(tree.depth(), 3);
        let mut words = tree.words();
        words.sort();
        assert_eq!(words, ["BAT", "CAR", "CAT"]);
    }

    #[test]
    fn test_zero_radius_is_exact_lookup() {
        let tree: BkTree = WORDS.into_iter().collect();
        assert_eq!(tree.search("CARD", 0).len(), 1);
        assert!(tree.search("CARDS", 0).is_empty());
    }

    #[test]
    fn test_custom_metric() {
        fn case_insensitive(a: &str, b: &str) -> usize {
            levenshtein(&a.to_lowercase(), &b.to_lowercase())
        }
        let mut tree = BkTree::new(case_insensitive);
        tree.extend(["Cat", "Dog"]);
        let best = tree.nearest("cat", 0).unwrap();
        assert_eq!(best.word, "Cat");
    }
}
