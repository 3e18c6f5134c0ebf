//! Aggregate report over the games played in one run

use rustc_hash::FxHashSet;

use super::SessionSummary;
use crate::core::Word;

/// Totals and averages across a player's games
#[derive(Debug, Clone, PartialEq)]
pub struct Analytics {
    pub games_played: usize,
    pub games_completed: usize,
    /// Distinct words visited across every path, start words included
    pub unique_words: usize,
    pub total_moves: usize,
    pub total_optimal_moves: usize,
    pub total_hints: usize,
    pub average_hints: f64,
    pub average_moves: f64,
    pub average_optimal_moves: f64,
    /// Optimal moves as a percentage of moves played, over all games
    pub efficiency: Option<f64>,
}

/// Summarize a list of finished games
///
/// Returns `None` when no game has been played.
#[must_use]
pub fn game_analytics(games: &[SessionSummary]) -> Option<Analytics> {
    if games.is_empty() {
        return None;
    }

    let unique: FxHashSet<&str> = games
        .iter()
        .flat_map(|game| game.path.iter().map(Word::text))
        .collect();

    let total_moves: usize = games.iter().map(|g| g.moves).sum();
    let total_optimal_moves: usize = games.iter().map(|g| g.optimal_moves).sum();
    let total_hints: usize = games.iter().map(|g| g.hints_used).sum();
    let count = games.len() as f64;

    Some(Analytics {
        games_played: games.len(),
        games_completed: games.iter().filter(|g| g.completed).count(),
        unique_words: unique.len(),
        total_moves,
        total_optimal_moves,
        total_hints,
        average_hints: total_hints as f64 / count,
        average_moves: total_moves as f64 / count,
        average_optimal_moves: total_optimal_moves as f64 / count,
        efficiency: (total_moves > 0)
            .then(|| total_optimal_moves as f64 / total_moves as f64 * 100.0),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn game(path: &[&str], optimal: usize, hints: usize, completed: bool) -> SessionSummary {
        let path: Vec<Word> = path.iter().map(|w| Word::new(w).unwrap()).collect();
        let moves = path.len() - 1;
        SessionSummary {
            player: "Ada".to_string(),
            start: path[0].clone(),
            target: Word::new("dog").unwrap(),
            moves,
            optimal_moves: optimal,
            hints_used: hints,
            completed,
            efficiency: (moves > 0).then(|| optimal as f64 / moves as f64 * 100.0),
            path,
        }
    }

    #[test]
    fn no_games_no_report() {
        assert!(game_analytics(&[]).is_none());
    }

    #[test]
    fn totals_and_averages() {
        let games = [
            game(&["cat", "cot", "cog", "dog"], 3, 1, true),
            game(&["cat", "cot", "cow", "cog", "dog"], 3, 2, true),
            game(&["dot", "cot"], 2, 0, false),
        ];
        let report = game_analytics(&games).unwrap();

        assert_eq!(report.games_played, 3);
        assert_eq!(report.games_completed, 2);
        assert_eq!(report.unique_words, 6); // CAT COT COG DOG COW DOT
        assert_eq!(report.total_moves, 8);
        assert_eq!(report.total_optimal_moves, 8);
        assert_eq!(report.total_hints, 3);
        assert!((report.average_hints - 1.0).abs() < 1e-9);
        assert!((report.average_moves - 8.0 / 3.0).abs() < 1e-9);
        assert_eq!(report.efficiency, Some(100.0));
    }

    #[test]
    fn efficiency_undefined_without_moves() {
        let games = [game(&["cat"], 3, 0, false), game(&["dog"], 2, 1, false)];
        let report = game_analytics(&games).unwrap();

        assert_eq!(report.total_moves, 0);
        assert_eq!(report.unique_words, 2);
        assert_eq!(report.efficiency, None);
        assert!((report.average_hints - 0.5).abs() < 1e-9);
    }
}
