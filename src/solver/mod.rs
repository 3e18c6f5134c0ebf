//! Word ladder queries
//!
//! Shortest ladders and next-step hints over a prebuilt word graph.

mod engine;

pub use engine::{Hint, Solver};
