//! Command implementations

pub mod benchmark;
pub mod hint;
pub mod play;
pub mod solve;
pub mod stats;

pub use benchmark::{BenchmarkConfig, BenchmarkResult, run_benchmark};
pub use hint::{HintResult, hint_word};
pub use play::run_play;
pub use solve::{SolveConfig, SolveResult, solve_ladder};
pub use stats::{GraphStats, graph_stats};
