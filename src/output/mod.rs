//! Terminal output formatting
//!
//! Display utilities for CLI results and pretty-printing.

pub mod display;
pub mod formatters;

pub use display::{
    print_analytics, print_benchmark_result, print_graph_stats, print_hint, print_hint_result,
    print_path, print_session_summary, print_solve_result,
};
