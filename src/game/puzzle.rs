//! Random puzzle selection

use rand::Rng;
use rand::seq::IndexedRandom;

use crate::core::Word;
use crate::solver::Solver;

/// Give up looking for a connected pair after this many draws
pub const MAX_PUZZLE_ATTEMPTS: usize = 1000;

/// A start/target pair known to be connected
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Puzzle {
    pub start: Word,
    pub target: Word,
    /// One shortest ladder from start to target
    pub solution: Vec<Word>,
}

impl Puzzle {
    /// Minimum number of moves to solve the puzzle
    #[must_use]
    pub fn optimal_moves(&self) -> usize {
        self.solution.len().saturating_sub(1)
    }

    /// Draw distinct word pairs until one is connected by a ladder
    ///
    /// Returns `None` if fewer than two words are given or no connected pair
    /// turns up within [`MAX_PUZZLE_ATTEMPTS`] draws.
    pub fn random<R: Rng + ?Sized>(words: &[Word], solver: &Solver, rng: &mut R) -> Option<Self> {
        if words.len() < 2 {
            return None;
        }

        for _ in 0..MAX_PUZZLE_ATTEMPTS {
            let (Some(start), Some(target)) = (words.choose(rng), words.choose(rng)) else {
                return None;
            };
            if start == target {
                continue;
            }

            let solution = solver.find_shortest_path(start.text(), target.text());
            if !solution.is_empty() {
                return Some(Self {
                    start: start.clone(),
                    target: target.clone(),
                    solution,
                });
            }
        }

        log::warn!("No connected word pair found in {MAX_PUZZLE_ATTEMPTS} attempts");
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::GraphBuilder;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn words(list: &[&str]) -> Vec<Word> {
        list.iter().map(|w| Word::new(w).unwrap()).collect()
    }

    #[test]
    fn random_puzzle_is_connected() {
        let list = words(&["cat", "cot", "cog", "dog", "dot", "cow", "elk"]);
        let solver = Solver::new(GraphBuilder::new().build_graph(&list));
        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..20 {
            let puzzle = Puzzle::random(&list, &solver, &mut rng).unwrap();
            assert_ne!(puzzle.start, puzzle.target);
            assert_eq!(puzzle.solution.first(), Some(&puzzle.start));
            assert_eq!(puzzle.solution.last(), Some(&puzzle.target));
            assert!(puzzle.optimal_moves() >= 1);
        }
    }

    #[test]
    fn random_puzzle_needs_two_words() {
        let list = words(&["cat"]);
        let solver = Solver::new(GraphBuilder::new().build_graph(&list));
        let mut rng = StdRng::seed_from_u64(1);

        assert!(Puzzle::random(&list, &solver, &mut rng).is_none());
    }

    #[test]
    fn random_puzzle_gives_up_without_edges() {
        let list = words(&["cat", "elk", "ivy"]);
        let solver = Solver::new(GraphBuilder::new().build_graph(&list));
        let mut rng = StdRng::seed_from_u64(1);

        assert!(Puzzle::random(&list, &solver, &mut rng).is_none());
    }
}
