//! Word graph construction
//!
//! Edges are discovered through a wildcard index instead of comparing every pair
//! of words: each word is filed under one pattern per position (`CAT` under
//! `*AT`, `C*T` and `CA*`), and words sharing a bucket are exactly one
//! substitution apart. Total work is the sum of squared bucket sizes, which for
//! natural-language dictionaries is far below N².

use rustc_hash::FxHashMap;
use std::collections::BTreeSet;
use std::io::BufRead;

use super::WordGraph;
use crate::core::Word;
use crate::error::Result;

/// Mapping from wildcard pattern to the words matching it
///
/// Only lives for the duration of a graph build.
#[derive(Debug, Default)]
pub struct PatternIndex {
    buckets: FxHashMap<String, BTreeSet<Word>>,
}

impl PatternIndex {
    /// Index every word under each of its wildcard patterns
    #[must_use]
    pub fn build(words: &[Word]) -> Self {
        let mut buckets: FxHashMap<String, BTreeSet<Word>> = FxHashMap::default();

        for word in words {
            for position in 0..word.len() {
                buckets
                    .entry(word.wildcard(position))
                    .or_default()
                    .insert(word.clone());
            }
        }

        Self { buckets }
    }

    /// Words filed under a pattern, if any
    #[must_use]
    pub fn bucket(&self, pattern: &str) -> Option<&BTreeSet<Word>> {
        self.buckets.get(pattern)
    }

    /// Iterate over `(pattern, words)` pairs in arbitrary order
    pub fn buckets(&self) -> impl Iterator<Item = (&str, &BTreeSet<Word>)> {
        self.buckets.iter().map(|(pattern, words)| (pattern.as_str(), words))
    }

    /// Number of distinct patterns
    #[must_use]
    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    /// Check whether no pattern was indexed
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }
}

/// Builds word graphs from word lists
#[derive(Debug, Default, Clone, Copy)]
pub struct GraphBuilder;

impl GraphBuilder {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Read whitespace-delimited words from a source
    ///
    /// Keeps tokens whose length equals `length_filter` (0 keeps everything),
    /// normalized to uppercase, in source order. Tokens that are not purely
    /// alphabetic are skipped, including bytes that are not valid UTF-8.
    ///
    /// # Errors
    ///
    /// Returns [`LadderError::Read`](crate::error::LadderError::Read) if the
    /// source fails while being read.
    ///
    /// # Examples
    /// ```
    /// use word_ladder::graph::GraphBuilder;
    ///
    /// let words = GraphBuilder::load_words("cat\nCOT\n cog\nhorse".as_bytes(), 3).unwrap();
    /// let texts: Vec<&str> = words.iter().map(|w| w.text()).collect();
    /// assert_eq!(texts, ["CAT", "COT", "COG"]);
    /// ```
    pub fn load_words<R: BufRead>(source: R, length_filter: usize) -> Result<Vec<Word>> {
        let mut words = Vec::new();
        let mut skipped = 0usize;

        for line in source.split(b'\n') {
            let line = line?;
            for raw in line.split(u8::is_ascii_whitespace).filter(|t| !t.is_empty()) {
                let Ok(token) = std::str::from_utf8(raw) else {
                    log::debug!(
                        "Skipping token {:?}: not valid UTF-8",
                        String::from_utf8_lossy(raw)
                    );
                    skipped += 1;
                    continue;
                };
                if length_filter != 0 && token.chars().count() != length_filter {
                    continue;
                }
                match Word::new(token) {
                    Ok(word) => words.push(word),
                    Err(e) => {
                        log::debug!("Skipping token {token:?}: {e}");
                        skipped += 1;
                    }
                }
            }
        }

        if skipped > 0 {
            log::debug!("Skipped {skipped} invalid tokens");
        }
        Ok(words)
    }

    /// Build the wildcard index for a word list
    #[must_use]
    pub fn build_pattern_index(&self, words: &[Word]) -> PatternIndex {
        PatternIndex::build(words)
    }

    /// Build the one-substitution graph over a word list
    ///
    /// Every word becomes a node, including words with no neighbors.
    /// Duplicates collapse into one node.
    #[must_use]
    pub fn build_graph(&self, words: &[Word]) -> WordGraph {
        let index = self.build_pattern_index(words);
        let mut graph = WordGraph::new();

        for word in words {
            graph.add_node(word.clone());
        }

        for (_, bucket) in index.buckets().filter(|(_, bucket)| bucket.len() >= 2) {
            let members: Vec<&Word> = bucket.iter().collect();
            for (i, a) in members.iter().enumerate() {
                for b in &members[i + 1..] {
                    graph.add_edge((*a).clone(), (*b).clone());
                }
            }
        }

        log::debug!(
            "Built graph: {} words, {} patterns, {} edges",
            graph.node_count(),
            index.len(),
            graph.edge_count()
        );
        graph
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LadderError;
    use std::io::{self, BufReader, Read};

    fn words(list: &[&str]) -> Vec<Word> {
        list.iter().map(|w| Word::new(w).unwrap()).collect()
    }

    fn texts(words: &[Word]) -> Vec<&str> {
        words.iter().map(Word::text).collect()
    }

    #[test]
    fn load_words_filters_and_normalizes() {
        let loaded = GraphBuilder::load_words("cat\nCOT\n cog".as_bytes(), 3).unwrap();
        assert_eq!(texts(&loaded), ["CAT", "COT", "COG"]);
    }

    #[test]
    fn load_words_no_filter_keeps_all_lengths() {
        let loaded = GraphBuilder::load_words("cat cold\n\nwarm  a".as_bytes(), 0).unwrap();
        assert_eq!(texts(&loaded), ["CAT", "COLD", "WARM", "A"]);
    }

    #[test]
    fn load_words_length_filter_excludes_others() {
        let loaded = GraphBuilder::load_words("cat cold dog words".as_bytes(), 4).unwrap();
        assert_eq!(texts(&loaded), ["COLD"]);
    }

    #[test]
    fn load_words_skips_invalid_tokens() {
        let loaded = GraphBuilder::load_words("cat c4t dog it's".as_bytes(), 0).unwrap();
        assert_eq!(texts(&loaded), ["CAT", "DOG"]);
    }

    #[test]
    fn load_words_skips_non_utf8_tokens() {
        let loaded = GraphBuilder::load_words(&b"cat cot caf\xe9 cog dog\n"[..], 3).unwrap();
        assert_eq!(texts(&loaded), ["CAT", "COT", "COG", "DOG"]);

        let latin1 = GraphBuilder::load_words(&b"cold\r\nna\xefve\r\nwarm"[..], 0).unwrap();
        assert_eq!(texts(&latin1), ["COLD", "WARM"]);
    }

    struct BrokenReader;

    impl Read for BrokenReader {
        fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "connection dropped"))
        }
    }

    #[test]
    fn load_words_propagates_read_failure() {
        let source = BufReader::new("cat cot\ncog".as_bytes().chain(BrokenReader));
        let err = GraphBuilder::load_words(source, 3).unwrap_err();

        match err {
            LadderError::Read(e) => assert_eq!(e.kind(), io::ErrorKind::BrokenPipe),
            other => panic!("expected Read error, got {other:?}"),
        }
    }

    #[test]
    fn load_words_keeps_duplicates_in_order() {
        let loaded = GraphBuilder::load_words("dog cat DOG".as_bytes(), 3).unwrap();
        assert_eq!(texts(&loaded), ["DOG", "CAT", "DOG"]);
    }

    #[test]
    fn pattern_index_buckets() {
        let index = GraphBuilder::new().build_pattern_index(&words(&["cat", "cot", "cog"]));

        // 3 words x 3 positions, with C*T shared by CAT and COT, CO* by COT and COG
        assert_eq!(index.len(), 7);
        assert_eq!(index.bucket("C*T").map(BTreeSet::len), Some(2));
        assert_eq!(index.bucket("CO*").map(BTreeSet::len), Some(2));
        assert_eq!(index.bucket("*AT").map(BTreeSet::len), Some(1));
        assert!(index.bucket("D*G").is_none());
    }

    #[test]
    fn each_word_fills_one_bucket_per_position() {
        let list = words(&["cold"]);
        let index = PatternIndex::build(&list);
        assert_eq!(index.len(), 4);
        for (pattern, bucket) in index.buckets() {
            assert_eq!(pattern.len(), 4);
            assert!(bucket.contains(&list[0]));
        }
    }

    #[test]
    fn build_graph_connects_single_substitutions() {
        let graph = GraphBuilder::new().build_graph(&words(&["cat", "cot", "cog", "dog"]));
        let cat = Word::new("cat").unwrap();
        let cot = Word::new("cot").unwrap();
        let dog = Word::new("dog").unwrap();

        assert_eq!(graph.node_count(), 4);
        assert_eq!(graph.edge_count(), 3);
        assert!(graph.neighbors(&cat).contains(&cot));
        assert!(!graph.neighbors(&cat).contains(&dog));
    }

    #[test]
    fn build_graph_keeps_isolated_words() {
        let graph = GraphBuilder::new().build_graph(&words(&["cat", "elk"]));
        assert_eq!(graph.node_count(), 2);
        assert_eq!(graph.edge_count(), 0);
        assert!(graph.contains(&Word::new("elk").unwrap()));
    }

    #[test]
    fn duplicates_create_no_self_or_double_edges() {
        let graph = GraphBuilder::new().build_graph(&words(&["cat", "cat", "cot", "CAT"]));
        let cat = Word::new("cat").unwrap();

        assert_eq!(graph.node_count(), 2);
        assert_eq!(graph.edge_count(), 1);
        assert!(!graph.neighbors(&cat).contains(&cat));
    }

    #[test]
    fn mixed_lengths_never_connect() {
        let graph = GraphBuilder::new().build_graph(&words(&["cat", "cart", "car", "care"]));

        for node in graph.nodes() {
            for neighbor in graph.neighbors(node) {
                assert_eq!(node.len(), neighbor.len());
                assert!(node.is_adjacent(neighbor));
            }
        }
        assert_eq!(graph.edge_count(), 2); // CAT-CAR, CART-CARE
    }

    #[test]
    fn every_edge_is_a_single_substitution() {
        let list = words(&["cold", "cord", "card", "ward", "warm", "word", "worm", "corm"]);
        let graph = GraphBuilder::new().build_graph(&list);

        for node in graph.nodes() {
            for neighbor in graph.neighbors(node) {
                assert_ne!(node, neighbor);
                assert!(node.is_adjacent(neighbor), "{node} - {neighbor}");
                assert!(graph.neighbors(neighbor).contains(node));
            }
        }

        // Compare against the brute-force relation
        for (i, a) in list.iter().enumerate() {
            for b in &list[i + 1..] {
                assert_eq!(graph.neighbors(a).contains(b), a.is_adjacent(b));
            }
        }
    }
}
