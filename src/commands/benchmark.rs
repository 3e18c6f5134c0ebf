//! Benchmark command
//!
//! Solves many random word pairs in parallel against one shared graph.

use crate::core::Word;
use crate::solver::Solver;
use indicatif::{ProgressBar, ProgressStyle};
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;
use std::collections::BTreeMap;
use std::time::{Duration, Instant};

/// Configuration for a benchmark run
pub struct BenchmarkConfig {
    /// Number of random pairs to solve
    pub count: usize,
    /// Seed for reproducible pair selection
    pub seed: Option<u64>,
    /// Draw a progress bar on stderr
    pub show_progress: bool,
}

impl BenchmarkConfig {
    #[must_use]
    pub const fn new(count: usize) -> Self {
        Self {
            count,
            seed: None,
            show_progress: true,
        }
    }
}

/// Result of a benchmark run
pub struct BenchmarkResult {
    pub total_pairs: usize,
    pub connected: usize,
    pub unreachable: usize,
    /// Ladder length (moves) to number of pairs
    pub distribution: BTreeMap<usize, usize>,
    pub average_moves: f64,
    pub longest: Option<(Word, Word, usize)>,
    pub duration: Duration,
    pub pairs_per_second: f64,
}

/// Draw `count` random pairs of distinct entries
///
/// Empty unless at least two different words are available.
fn sample_pairs<R: Rng + ?Sized>(words: &[Word], count: usize, rng: &mut R) -> Vec<(Word, Word)> {
    if words.iter().all(|w| *w == words[0]) {
        return Vec::new();
    }

    let mut pairs = Vec::with_capacity(count);
    while pairs.len() < count {
        let (Some(start), Some(target)) = (words.choose(rng), words.choose(rng)) else {
            break;
        };
        if start != target {
            pairs.push((start.clone(), target.clone()));
        }
    }
    pairs
}

/// Run the benchmark over a dictionary's words
#[must_use]
pub fn run_benchmark(config: &BenchmarkConfig, solver: &Solver, words: &[Word]) -> BenchmarkResult {
    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_rng(&mut rand::rng()),
    };
    let pairs = sample_pairs(words, config.count, &mut rng);

    let pb = if config.show_progress {
        ProgressBar::new(pairs.len() as u64)
    } else {
        ProgressBar::hidden()
    };
    if let Ok(style) = ProgressStyle::default_bar()
        .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
    {
        pb.set_style(style.progress_chars("█▓▒░"));
    }

    let start = Instant::now();

    let lengths: Vec<Option<usize>> = pairs
        .par_iter()
        .map(|(a, b)| {
            let moves = solver.optimal_moves(a.text(), b.text());
            pb.inc(1);
            moves
        })
        .collect();

    pb.finish_with_message("Complete!");
    let duration = start.elapsed();

    let mut distribution: BTreeMap<usize, usize> = BTreeMap::new();
    let mut longest: Option<(Word, Word, usize)> = None;
    let mut total_moves = 0;

    for ((a, b), moves) in pairs.iter().zip(&lengths) {
        let Some(moves) = *moves else { continue };

        *distribution.entry(moves).or_insert(0) += 1;
        total_moves += moves;

        if longest.as_ref().is_none_or(|(_, _, best)| moves > *best) {
            longest = Some((a.clone(), b.clone(), moves));
        }
    }

    let connected = distribution.values().sum();
    let total_pairs = pairs.len();

    BenchmarkResult {
        total_pairs,
        connected,
        unreachable: total_pairs - connected,
        distribution,
        average_moves: if connected > 0 {
            total_moves as f64 / connected as f64
        } else {
            0.0
        },
        longest,
        duration,
        pairs_per_second: total_pairs as f64 / duration.as_secs_f64().max(f64::EPSILON),
    }
}
