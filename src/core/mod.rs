//! Core domain types for word ladders
//!
//! This module contains the fundamental word type with zero external dependencies.

mod word;

pub use word::{BLANK, Word, WordError};
