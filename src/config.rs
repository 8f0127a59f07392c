use std::path::PathBuf;

use clap::Parser;

/// Command-line configuration for the `drill` binary.
#[derive(Debug, Clone, Parser)]
#[command(name = "drill")]
#[command(about = "Vocabulary flashcards and quizzes from tab-separated word lists")]
pub struct Config {
    /// File of items (prompt, answer, characters)
    #[arg(short, long, default_value = "items.txt")]
    pub items: PathBuf,

    /// File of words (prompt, answer, part of speech, characters)
    #[arg(short, long, default_value = "lexicon.txt")]
    pub lexicon: PathBuf,

    /// Number of items to study or quiz
    #[arg(short = 'n', long, default_value = "10")]
    pub count: usize,

    /// Quiz mode; flashcards otherwise
    #[arg(short, long)]
    pub quiz: bool,

    /// Seed for the random source (for reproducible sessions)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Print the generated entries as JSON instead of starting a session
    #[arg(long)]
    pub json: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "warn")]
    pub log_level: String,
}
