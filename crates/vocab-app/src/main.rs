use std::io;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;
use vocab_config::Config;
use vocab_core::merge::merge_document;
use vocab_core::store;
use vocab_core::table::VocabTable;
use vocab_words_academic::AcademicWordList;

#[derive(Debug, Parser)]
#[command(version, about = "Fill missing definitions in a word document from a word list")]
struct Args {
    /// The word document to fill [default: vocab.json]
    #[arg(short, long)]
    file: Option<PathBuf>,

    /// Word-list file to use instead of the embedded academic list
    #[arg(short, long)]
    words: Option<PathBuf>,
}

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(why) => {
            tracing::error!("{why}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let args = Args::parse();
    init_tracing();

    let config = Config::new();
    let vocab_path = args
        .file
        .unwrap_or_else(|| PathBuf::from(&config.store.vocab_path));
    let words_path = args
        .words
        .or_else(|| config.words.data_path.as_deref().map(PathBuf::from));

    let table = load_table(words_path.as_deref())?;

    let mut doc = store::load_document(&vocab_path)?;
    tracing::info!(
        "Loaded {} with {} words",
        vocab_path.display(),
        doc.words.len()
    );

    let outcome = merge_document(&mut doc, &table);
    if config.warn_unmatched && !outcome.unmatched.is_empty() {
        tracing::warn!(
            "{} unfilled words had no word-list entry",
            outcome.unmatched.len()
        );
    }

    store::save_document(&vocab_path, &doc)?;

    println!("Updated {} words", outcome.updated);
    println!(
        "Words with definitions: {}/{}",
        doc.filled_count(),
        doc.words.len()
    );

    Ok(())
}

/// Use the configured word list when it exists, embedded entries otherwise
fn load_table(path: Option<&Path>) -> anyhow::Result<VocabTable> {
    let table = match path {
        Some(path) if path.exists() => AcademicWordList::load_from_file(path)?,
        Some(path) => {
            tracing::warn!(
                "word list {} not found, falling back to embedded entries",
                path.display()
            );
            AcademicWordList::load_embedded()?
        }
        None => AcademicWordList::load_embedded()?,
    };
    Ok(table)
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    // Human-readable on a terminal, JSON lines otherwise
    if atty::is(atty::Stream::Stderr) {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(io::stderr)
            .init();
    } else {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .with_writer(io::stderr)
            .init();
    }
}
