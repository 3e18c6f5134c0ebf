//! Word Ladder - CLI
//!
//! Solve word ladders, get hints, or play interactively.

use anyhow::Result;
use clap::{Parser, Subcommand};
use word_ladder::{
    commands::{
        BenchmarkConfig, SolveConfig, graph_stats, hint_word, run_benchmark, run_play,
        solve_ladder,
    },
    logging::init_logger,
    output::{print_benchmark_result, print_graph_stats, print_hint_result, print_solve_result},
    wordlists::{Dictionary, DictionarySource},
};

/// Word length used when none is given and none can be inferred
const DEFAULT_LENGTH: usize = 3;

#[derive(Parser)]
#[command(
    name = "word_ladder",
    about = "Word ladder solver: shortest single-letter transformation chains",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Dictionary: 'embedded' (default) or path to a whitespace-separated word file
    #[arg(short = 'd', long, global = true, default_value = "embedded")]
    dictionary: String,

    /// Word length (default: length of the given word, or 3)
    #[arg(short = 'l', long, global = true)]
    length: Option<usize>,

    /// Enable debug logging
    #[arg(long, global = true)]
    debug: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive game mode (default)
    Play,

    /// Find the shortest ladder between two words
    Solve {
        /// Starting word
        start: String,

        /// Target word
        target: String,
    },

    /// Show the next step from one word toward another
    Hint {
        /// Current word
        current: String,

        /// Target word
        target: String,
    },

    /// Show connectivity statistics for the dictionary
    Stats,

    /// Solve random word pairs and report ladder lengths
    Benchmark {
        /// Number of random pairs to solve
        #[arg(short = 'n', long, default_value = "200")]
        count: usize,

        /// Seed for reproducible pair selection
        #[arg(short, long)]
        seed: Option<u64>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logger(cli.debug);

    let source = DictionarySource::from_arg(&cli.dictionary);

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => {
            let dictionary = Dictionary::load(source, cli.length.unwrap_or(DEFAULT_LENGTH))?;
            run_play(dictionary).map_err(|e| anyhow::anyhow!(e))
        }
        Commands::Solve { start, target } => {
            let config = SolveConfig::new(start, target);
            let dictionary = Dictionary::load(source, cli.length.unwrap_or(config.word_length()))?;
            print_solve_result(&solve_ladder(config, dictionary.solver()));
            Ok(())
        }
        Commands::Hint { current, target } => {
            let length = cli.length.unwrap_or_else(|| current.trim().chars().count());
            let dictionary = Dictionary::load(source, length)?;
            let result = hint_word(&current, &target, dictionary.solver())
                .map_err(|e| anyhow::anyhow!(e))?;
            print_hint_result(&result);
            Ok(())
        }
        Commands::Stats => {
            let length = cli.length.unwrap_or(DEFAULT_LENGTH);
            let dictionary = Dictionary::load(source, length)?;
            print_graph_stats(&graph_stats(dictionary.solver().graph()), length);
            Ok(())
        }
        Commands::Benchmark { count, seed } => {
            let dictionary = Dictionary::load(source, cli.length.unwrap_or(DEFAULT_LENGTH))?;
            let config = BenchmarkConfig {
                seed,
                ..BenchmarkConfig::new(count)
            };

            println!(
                "Running benchmark on {count} random pairs of {}-letter words...",
                dictionary.length()
            );
            let result = run_benchmark(&config, dictionary.solver(), dictionary.words());
            print_benchmark_result(&result);
            Ok(())
        }
    }
}
