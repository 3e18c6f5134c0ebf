//! Formatting utilities for terminal output

use crate::core::Word;
use colored::{Color, Colorize};

/// Join a ladder into `A → B → C`
#[must_use]
pub fn format_path(path: &[Word]) -> String {
    path.iter().map(Word::text).collect::<Vec<_>>().join(" → ")
}

/// Render a word with the letter at `position` colored and bold
///
/// Out-of-range positions leave the word uncolored.
#[must_use]
pub fn highlight_position(word: &Word, position: usize, color: Color) -> String {
    let text = word.text();
    if position >= text.len() {
        return text.to_string();
    }

    format!(
        "{}{}{}",
        &text[..position],
        text[position..=position].color(color).bold(),
        &text[position + 1..]
    )
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(list: &[&str]) -> Vec<Word> {
        list.iter().map(|w| Word::new(w).unwrap()).collect()
    }

    #[test]
    fn format_path_joins_with_arrows() {
        assert_eq!(format_path(&words(&["cat", "cot", "cog"])), "CAT → COT → COG");
        assert_eq!(format_path(&words(&["cat"])), "CAT");
        assert_eq!(format_path(&[]), "");
    }

    #[test]
    fn highlight_keeps_letters() {
        colored::control::set_override(false);
        let word = Word::new("cat").unwrap();
        assert_eq!(highlight_position(&word, 1, Color::Red), "CAT");
        assert_eq!(highlight_position(&word, 9, Color::Red), "CAT");
    }

    #[test]
    fn progress_bar_empty() {
        let bar = create_progress_bar(0.0, 100.0, 10);
        assert_eq!(bar, "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        let bar = create_progress_bar(100.0, 100.0, 10);
        assert_eq!(bar, "██████████");
    }

    #[test]
    fn progress_bar_half() {
        let bar = create_progress_bar(50.0, 100.0, 10);
        assert_eq!(bar, "█████░░░░░");
    }
}
