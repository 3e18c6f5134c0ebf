//! Interactive play mode
//!
//! Text-based word ladder game on stdin/stdout.

use crate::game::{GameSession, MoveOutcome, Puzzle, SessionSummary, game_analytics};
use crate::output::{print_analytics, print_hint, print_path, print_session_summary};
use crate::wordlists::Dictionary;
use colored::Colorize;
use std::io::{self, Write};

/// What the player asked for at the prompt
#[derive(Debug, Clone, PartialEq, Eq)]
enum Command {
    Quit,
    New,
    Hint,
    GiveUp,
    Stats,
    Length(usize),
    Move(String),
}

fn parse_command(input: &str) -> Command {
    let lower = input.trim().to_lowercase();
    let mut parts = lower.split_whitespace();

    match (parts.next(), parts.next()) {
        (Some("quit" | "q" | "exit"), None) => Command::Quit,
        (Some("new" | "n"), None) => Command::New,
        (Some("hint" | "h" | "?"), None) => Command::Hint,
        (Some("giveup" | "give-up" | "solve"), None) => Command::GiveUp,
        (Some("stats" | "analytics"), None) => Command::Stats,
        (Some("length" | "len"), Some(n)) => match n.parse() {
            Ok(length) => Command::Length(length),
            Err(_) => Command::Move(input.trim().to_string()),
        },
        _ => Command::Move(input.trim().to_string()),
    }
}

/// Run the interactive game loop
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input.
pub fn run_play(mut dictionary: Dictionary) -> Result<(), String> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                  Word Ladder - Play Mode                     ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!("Change one letter at a time to get from the start word to the target.");
    println!("Every step must be a dictionary word.\n");
    println!("Commands: 'hint', 'giveup', 'new', 'stats', 'length N', 'quit'\n");

    let player = loop {
        let name = get_user_input("Player name")?;
        if !name.is_empty() {
            break name;
        }
        println!("Please enter your name\n");
    };

    let mut rng = rand::rng();
    let mut history: Vec<SessionSummary> = Vec::new();

    'games: loop {
        let Some(puzzle) = Puzzle::random(dictionary.words(), dictionary.solver(), &mut rng)
        else {
            println!("❌ Not enough connected words of length {}.", dictionary.length());
            report(&player, &history);
            return Ok(());
        };

        let mut session = GameSession::new(
            player.clone(),
            puzzle.start.clone(),
            puzzle.target.clone(),
            puzzle.optimal_moves(),
        );

        println!("────────────────────────────────────────────────────────────");
        println!(
            "Game started: {} → {} (best possible: {} moves)",
            session.start().text().bright_white().bold(),
            session.target().text().bright_green().bold(),
            session.optimal_moves()
        );
        println!("────────────────────────────────────────────────────────────");

        loop {
            println!(
                "\nCurrent: {}   Target: {}   Moves: {}/{}   Hints: {}",
                session.current_word().text().bright_white().bold(),
                session.target().text().bright_green(),
                session.move_count(),
                session.optimal_moves(),
                session.hints_used()
            );

            match parse_command(&get_user_input("Your move")?) {
                Command::Quit => {
                    finish(&session, &mut history);
                    report(&player, &history);
                    println!("\n👋 Thanks for playing!\n");
                    return Ok(());
                }
                Command::New => {
                    finish(&session, &mut history);
                    println!("\n🔄 New game started!\n");
                    continue 'games;
                }
                Command::Hint => match session.request_hint(dictionary.solver()) {
                    Some(hint) => print_hint(session.current_word(), &hint),
                    None => println!("No hint available"),
                },
                Command::GiveUp => {
                    println!("\nOptimal solution:");
                    print_path(&puzzle.solution);
                    finish(&session, &mut history);
                    continue 'games;
                }
                Command::Stats => {
                    // The game in progress counts too
                    let mut games = history.clone();
                    games.push(session.summary());
                    report(&player, &games);
                }
                Command::Length(length) => match dictionary.with_length(length) {
                    Ok(reloaded) => {
                        finish(&session, &mut history);
                        dictionary = reloaded;
                        println!("\n🔄 Switched to {length}-letter words\n");
                        continue 'games;
                    }
                    Err(e) => println!("❌ {e}"),
                },
                Command::Move(word) => match session.try_move(&word, dictionary.solver()) {
                    Ok(MoveOutcome::Reached) => {
                        println!("\n🎉 Congratulations! You reached the target word.");
                        finish(&session, &mut history);
                        continue 'games;
                    }
                    Ok(MoveOutcome::Continue) => {
                        println!("✓ Moved to {}", session.current_word());
                    }
                    Err(e) => println!("❌ {e}"),
                },
            }
        }
    }
}

/// Print a finished game and keep it for the run's analytics
fn finish(session: &GameSession, history: &mut Vec<SessionSummary>) {
    let summary = session.summary();
    print_session_summary(&summary);
    history.push(summary);
}

fn report(player: &str, games: &[SessionSummary]) {
    match game_analytics(games) {
        Some(analytics) => print_analytics(player, games, &analytics),
        None => println!("No games played yet"),
    }
}

/// Get user input with a prompt
fn get_user_input(prompt: &str) -> Result<String, String> {
    print!("{prompt}: ");
    io::stdout().flush().map_err(|e| e.to_string())?;

    let mut input = String::new();
    let read = io::stdin()
        .read_line(&mut input)
        .map_err(|e| e.to_string())?;
    if read == 0 {
        return Ok("quit".to_string());
    }

    Ok(input.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_commands() {
        assert_eq!(parse_command("quit"), Command::Quit);
        assert_eq!(parse_command(" Q "), Command::Quit);
        assert_eq!(parse_command("new"), Command::New);
        assert_eq!(parse_command("hint"), Command::Hint);
        assert_eq!(parse_command("giveup"), Command::GiveUp);
        assert_eq!(parse_command("stats"), Command::Stats);
        assert_eq!(parse_command("length 4"), Command::Length(4));
    }

    #[test]
    fn parse_moves() {
        assert_eq!(parse_command("cot"), Command::Move("cot".to_string()));
        assert_eq!(parse_command("length x"), Command::Move("length x".to_string()));
        assert_eq!(parse_command(""), Command::Move(String::new()));
    }
}
