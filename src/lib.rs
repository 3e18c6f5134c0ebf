//! Word Ladder Solver
//!
//! Finds the shortest chain of single-letter substitutions between two words,
//! where every step is a dictionary word.
//!
//! # Quick Start
//!
//! ```rust
//! use word_ladder::graph::GraphBuilder;
//! use word_ladder::solver::Solver;
//!
//! let words = GraphBuilder::load_words("cat cot cog dog".as_bytes(), 3).unwrap();
//! let solver = Solver::new(GraphBuilder::new().build_graph(&words));
//!
//! let path = solver.find_shortest_path("cat", "dog");
//! assert_eq!(path.len(), 4);
//!
//! let hint = solver.hint("cat", "dog").unwrap();
//! assert_eq!(hint.next_word.text(), "COT");
//! assert_eq!(hint.position, 1);
//! ```

// Core domain types
pub mod core;

// Error types
pub mod error;

// Word graph and its construction
pub mod graph;

// Ladder queries
pub mod solver;

// Word lists
pub mod wordlists;

// Game sessions
pub mod game;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Logger setup
pub mod logging;
