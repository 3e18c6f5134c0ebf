//! Display functions for command results

use super::formatters::{create_progress_bar, format_path, highlight_position};
use crate::commands::{BenchmarkResult, GraphStats, HintResult, SolveResult};
use crate::core::Word;
use crate::game::{Analytics, SessionSummary};
use crate::solver::Hint;
use colored::{Color, Colorize};

/// Print a ladder on one line
pub fn print_path(path: &[Word]) {
    println!("  {}", format_path(path).bright_white().bold());
}

/// Print the result of solving a ladder
pub fn print_solve_result(result: &SolveResult) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Solving: {} → {}",
        result.start.to_uppercase().bright_yellow().bold(),
        result.target.to_uppercase().bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    if result.is_trivial() {
        println!("\nStart and target words are the same");
        print_path(&result.path);
        return;
    }

    if !result.found() {
        println!("\n{}", "❌ No ladder exists between these words".red().bold());
        return;
    }

    for (i, word) in result.path.iter().enumerate() {
        println!("  {:>2}. {}", i, word.text().bright_white());
    }

    println!();
    println!(
        "{}",
        format!("✅ Solved in {} moves!", result.moves()).green().bold()
    );
}

/// Print a single hint: the letter to change and what it becomes
pub fn print_hint(current: &Word, hint: &Hint) {
    println!(
        "💡 Change {} to {}",
        highlight_position(current, hint.position, Color::Red),
        highlight_position(&hint.next_word, hint.position, Color::Green)
    );
}

/// Print the result of the hint command
pub fn print_hint_result(result: &HintResult) {
    match &result.hint {
        Some(hint) => {
            print_hint(&result.current, hint);
            if let Some(remaining) = result.remaining {
                println!("   {remaining} moves left to {}", result.target.bright_green());
            }
        }
        None if result.remaining == Some(0) => {
            println!("✅ {} is already the target", result.current);
        }
        None => println!("No hint available"),
    }
}

/// Print an end-of-game summary
pub fn print_session_summary(summary: &SessionSummary) {
    println!("\n{}", "═".repeat(60).bright_cyan());
    println!(" {} ", "GAME SUMMARY".bright_cyan().bold());
    println!("{}", "═".repeat(60).bright_cyan());

    println!("  Player:     {}", summary.player);
    println!("  Start:      {}", summary.start);
    println!("  Target:     {}", summary.target);
    println!(
        "  Moves:      {} (Optimal: {})",
        summary.moves, summary.optimal_moves
    );
    println!("  Hints used: {}", summary.hints_used);
    println!("  Your path:  {}", format_path(&summary.path));

    if summary.completed {
        if let Some(efficiency) = summary.efficiency {
            println!(
                "  Efficiency: [{}] {}",
                create_progress_bar(efficiency, 100.0, 20).green(),
                format!("{efficiency:.1}%").bright_yellow()
            );
        }
    } else {
        println!("  {}", "Not completed".yellow());
    }
}

/// Print every game played this run followed by the aggregate totals
pub fn print_analytics(player: &str, games: &[SessionSummary], analytics: &Analytics) {
    println!("\n{}", "═".repeat(60).bright_cyan());
    println!(
        " {} {} ",
        "ANALYTICS:".bright_cyan().bold(),
        player.bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).bright_cyan());

    for (i, game) in games.iter().enumerate() {
        let status = if game.completed {
            "✓".green()
        } else {
            "✗".yellow()
        };
        println!(
            "\n  {status} Game {}: {} → {}",
            i + 1,
            game.start.text().bright_white(),
            game.target.text().bright_green()
        );
        println!(
            "     Moves: {} (Optimal: {})   Hints used: {}",
            game.moves, game.optimal_moves, game.hints_used
        );
    }

    println!("\n📊 {}", "Summary:".bright_cyan().bold());
    println!(
        "   Games played:       {} ({} completed)",
        analytics.games_played, analytics.games_completed
    );
    println!("   Unique words used:  {}", analytics.unique_words);
    println!("   Hints per game:     {:.2}", analytics.average_hints);
    println!(
        "   Moves per game:     {:.2} (Optimal: {:.2})",
        analytics.average_moves, analytics.average_optimal_moves
    );
    match analytics.efficiency {
        Some(efficiency) => println!(
            "   Efficiency:         [{}] {}",
            create_progress_bar(efficiency, 100.0, 20).green(),
            format!("{efficiency:.1}%").bright_yellow()
        ),
        None => println!("   Efficiency:         n/a"),
    }
}

/// Print graph statistics
pub fn print_graph_stats(stats: &GraphStats, length: usize) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "DICTIONARY GRAPH:".bright_cyan().bold(),
        format!("{length}-letter words").bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 Structure:");
    println!("   Words:             {}", stats.words);
    println!("   Edges:             {}", stats.edges);
    println!("   Average degree:    {:.2}", stats.average_degree);
    println!("   Isolated words:    {}", stats.isolated);
    println!("   Components:        {}", stats.components);
    println!("   Largest component: {}", stats.largest_component);

    if stats.words > 0 {
        let share = stats.largest_component as f64 / stats.words as f64 * 100.0;
        println!(
            "   Reachable share:   [{}] {share:.1}%",
            create_progress_bar(share, 100.0, 30).green()
        );
    }

    if let Some((word, degree)) = &stats.most_connected {
        println!(
            "\n✨ Most connected: {} ({degree} neighbors)",
            word.text().bright_green().bold()
        );
    }
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Pairs tested:     {}", result.total_pairs);
    println!(
        "   Connected:        {}",
        format!("{}", result.connected).green()
    );
    println!(
        "   Unreachable:      {}",
        format!("{}", result.unreachable).yellow()
    );
    println!(
        "   Average ladder:   {}",
        format!("{:.2} moves", result.average_moves)
            .bright_yellow()
            .bold()
    );
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Pairs/second:     {:.1}", result.pairs_per_second);

    if let Some((start, target, moves)) = &result.longest {
        println!(
            "   Longest ladder:   {} → {} ({moves} moves)",
            start.text().bright_white(),
            target.text().bright_white()
        );
    }

    println!("\n📈 {}", "Distribution:".bright_cyan().bold());
    for (&moves, &count) in &result.distribution {
        let pct = count as f64 / result.total_pairs as f64 * 100.0;
        let bar_width = (pct / 2.5) as usize;
        let bar = format!(
            "{}{}",
            "█".repeat(bar_width).green(),
            "░"
                .repeat(40_usize.saturating_sub(bar_width))
                .bright_black()
        );
        println!("   {moves:2}: {bar} {count:4} ({pct:5.1}%)");
    }
}
