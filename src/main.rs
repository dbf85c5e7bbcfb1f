//! Literaki CLI
//!
//! Interactive command-line front end for the word finder. Every line typed
//! is treated as a new value of the input field.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use literaki::{
    load_dictionary, DeliveryPolicy, DisplaySink, DisplayUpdate, FinderConfig, InputOutcome,
    Language, SearchCoordinator, Tone, WordIndex, POLISH_LETTERS,
};
use tracing::info;

const BANNER_TEXT: &str = include_str!("text/banner.txt");
const WORDS_PER_ROW: usize = 8;

#[derive(Parser)]
#[command(name = "literaki")]
#[command(about = "Find every word spelled by a set of letters", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Word list file (whitespace-separated words); the built-in list if omitted
    #[arg(short, long, env = "LITERAKI_WORDS", global = true)]
    words: Option<PathBuf>,

    /// Letters of the alphabet, in order
    #[arg(long, env = "LITERAKI_ALPHABET", default_value = POLISH_LETTERS, global = true)]
    alphabet: String,

    /// Search worker threads (defaults to the number of CPUs)
    #[arg(long, global = true)]
    threads: Option<usize>,

    /// Language of status messages (pl or en)
    #[arg(long, default_value_t = Language::Polish, global = true)]
    language: Language,

    /// Show results of older searches even if a newer one finished first
    #[arg(long, global = true)]
    last_writer_wins: bool,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Only log errors
    #[arg(long, global = true)]
    quiet: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Look up one set of letters and exit
    Find {
        /// Letters to use; one space stands for any letter
        letters: String,
    },
    /// Read letters line by line (default)
    Interactive,
}

/// Prints display updates to stdout.
struct TerminalSink;

impl DisplaySink for TerminalSink {
    fn show(&mut self, update: DisplayUpdate) {
        if !update.message.is_empty() {
            let marker = match update.status.tone() {
                Tone::Success => "✓",
                Tone::Notice => "•",
                Tone::Plain => "",
            };
            println!("{} {}", marker, update.message);
        }
        if let Some(words) = update.words {
            print_words(&words);
        }
    }
}

fn print_words(words: &[String]) {
    for (i, word) in words.iter().enumerate() {
        if i > 0 && i % WORDS_PER_ROW == 0 {
            println!();
        }
        print!("{:>10}", word);
    }
    if !words.is_empty() {
        println!();
    }
}

fn init_logging(cli: &Cli) {
    let filter = if cli.quiet {
        tracing_subscriber::EnvFilter::new("error")
    } else if cli.verbose {
        tracing_subscriber::EnvFilter::new("debug")
    } else {
        tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn build_config(cli: &Cli) -> Result<FinderConfig> {
    let mut config = FinderConfig::new()
        .with_alphabet(&cli.alphabet)
        .context("invalid --alphabet")?
        .with_language(cli.language);
    if let Some(threads) = cli.threads {
        config = config.with_worker_threads(threads);
    }
    if cli.last_writer_wins {
        config = config.with_delivery(DeliveryPolicy::LastWriterWins);
    }
    Ok(config)
}

fn load_index(cli: &Cli) -> WordIndex {
    match &cli.words {
        Some(path) => {
            let index = WordIndex::open_or_empty(path);
            if index.original().is_empty() {
                eprintln!("Warning: no words loaded from {}", path.display());
            }
            index
        }
        None => {
            let index = WordIndex::new(load_dictionary());
            info!(words = index.original().len(), "loaded built-in word list");
            index
        }
    }
}

fn run_find(coordinator: &mut SearchCoordinator<TerminalSink>, letters: &str) {
    if let InputOutcome::Rejected { corrected } = coordinator.on_input_changed(letters) {
        println!("Corrected input: [{}]", corrected);
        return;
    }
    coordinator.wait_until_idle();
}

fn run_interactive(coordinator: &mut SearchCoordinator<TerminalSink>) -> Result<()> {
    print!("{}", BANNER_TEXT);
    println!(
        "{} words available.",
        coordinator.index().original().len()
    );
    println!();

    let stdin = io::stdin();
    let mut stdout = io::stdout();

    loop {
        print!("> ");
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        // Spaces are meaningful, only the line ending is dropped.
        let text = line.trim_end_matches(['\n', '\r']);

        match text {
            ":quit" | ":q" | ":exit" => {
                println!("Do widzenia!");
                break;
            }
            ":help" | ":h" => {
                print!("{}", BANNER_TEXT);
            }
            ":clear" | ":c" => {
                coordinator.clear();
            }
            _ => {
                run_find(coordinator, text);
                println!();
            }
        }
    }

    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(&cli);

    let config = build_config(&cli)?;
    let index = Arc::new(load_index(&cli));
    let mut coordinator = SearchCoordinator::new(&config, index, TerminalSink)
        .context("failed to start search workers")?;

    match &cli.command {
        Some(Commands::Find { letters }) => {
            run_find(&mut coordinator, letters);
            Ok(())
        }
        Some(Commands::Interactive) | None => run_interactive(&mut coordinator),
    }
}
