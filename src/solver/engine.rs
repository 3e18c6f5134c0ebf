//! Query façade over a built word graph

use std::sync::Arc;

use crate::core::Word;
use crate::graph::WordGraph;

/// Next step along a shortest ladder
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hint {
    /// Word to move to
    pub next_word: Word,
    /// Index of the letter that changes
    pub position: usize,
}

/// Word ladder solver
///
/// Holds an immutable graph behind an `Arc`: clones are cheap and share the
/// graph, and a rebuilt graph means a new `Solver` rather than a mutated one.
#[derive(Debug, Clone)]
pub struct Solver {
    graph: Arc<WordGraph>,
}

impl Solver {
    /// Create a solver that takes ownership of a graph
    #[must_use]
    pub fn new(graph: WordGraph) -> Self {
        Self {
            graph: Arc::new(graph),
        }
    }

    /// Create a solver over an already shared graph
    #[must_use]
    pub const fn from_shared(graph: Arc<WordGraph>) -> Self {
        Self { graph }
    }

    /// The underlying graph
    #[must_use]
    pub fn graph(&self) -> &Arc<WordGraph> {
        &self.graph
    }

    /// Check whether a word (in any case) is in the dictionary
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        Word::new(word).is_ok_and(|w| self.graph.contains(&w))
    }

    /// Shortest ladder from `start` to `end`
    ///
    /// Inputs are normalized to uppercase. Returns an empty vector if either
    /// word is unknown or no ladder exists, and `[start]` when both are the
    /// same word.
    ///
    /// # Examples
    /// ```
    /// use word_ladder::core::Word;
    /// use word_ladder::graph::GraphBuilder;
    /// use word_ladder::solver::Solver;
    ///
    /// let words: Vec<Word> = ["cat", "cot", "cog", "dog"]
    ///     .iter()
    ///     .map(|w| Word::new(w).unwrap())
    ///     .collect();
    /// let solver = Solver::new(GraphBuilder::new().build_graph(&words));
    ///
    /// let path = solver.find_shortest_path("cat", "dog");
    /// assert_eq!(path.len(), 4);
    /// ```
    #[must_use]
    pub fn find_shortest_path(&self, start: &str, end: &str) -> Vec<Word> {
        let (Ok(start), Ok(end)) = (Word::new(start), Word::new(end)) else {
            return Vec::new();
        };

        if !self.graph.contains(&start) || !self.graph.contains(&end) {
            log::debug!("No ladder: {start} or {end} not in dictionary");
            return Vec::new();
        }

        self.graph.shortest_path(&start, &end)
    }

    /// Number of moves on a shortest ladder, or `None` if there is none
    #[must_use]
    pub fn optimal_moves(&self, start: &str, end: &str) -> Option<usize> {
        let path = self.find_shortest_path(start, end);
        (!path.is_empty()).then(|| path.len() - 1)
    }

    /// Next word on a shortest ladder from `current` to `target`
    ///
    /// Returns `None` when no ladder exists or `current` already is the target.
    #[must_use]
    pub fn hint(&self, current: &str, target: &str) -> Option<Hint> {
        let path = self.find_shortest_path(current, target);
        if path.len() < 2 {
            return None;
        }

        let next_word = path[1].clone();
        let position = path[0].first_difference(&next_word)?;

        Some(Hint {
            next_word,
            position,
        })
    }
}
