use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use mimalloc::MiMalloc;
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;
use tracing::{error, warn};
use tracing_subscriber::EnvFilter;

use vsm_search::{
    RankedDocument, SearchEngine,
    config::{Config, load_config},
};

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

const PROMPT: &str = "Enter your search query (or type 'exit' to quit): ";

/// Ranks a directory of text documents against free-text queries using
/// TF-IDF weights and cosine similarity.
#[derive(Parser)]
#[command(name = "vsm_search", version, about)]
struct Cli {
    /// Path of the JSON configuration file
    #[arg(long, default_value = "config.json")]
    config: PathBuf,

    /// Directory holding one text file per document
    #[arg(long)]
    corpus_dir: Option<String>,

    /// Where to write the postings report
    #[arg(long)]
    postings: Option<String>,

    /// Skip writing the postings report
    #[arg(long)]
    no_postings: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn resolve_config(cli: &Cli) -> Config {
    let mut config = load_config(&cli.config);
    if let Some(corpus_dir) = &cli.corpus_dir {
        config.corpus_dir = corpus_dir.clone();
    }
    if let Some(postings) = &cli.postings {
        config.postings_path = postings.clone();
    }
    if cli.no_postings {
        config.write_postings = false;
    }
    config
}

/// The session ends on `exit` in any letter case. The line is not trimmed, so
/// `" exit"` is an ordinary query.
fn is_exit_command(line: &str) -> bool {
    line.to_lowercase() == "exit"
}

fn print_results(results: &[RankedDocument]) {
    println!("Ranked Documents:");
    for result in results {
        println!("Document ID: {}, Score: {:.4}", result.doc_id, result.score);
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let config = resolve_config(&cli);

    println!("\nCurrent Configuration:");
    println!("  Corpus Directory:  {}", config.corpus_dir);
    if config.write_postings {
        println!("  Postings Report:   {}", config.postings_path);
    } else {
        println!("  Postings Report:   disabled");
    }

    let search_engine = SearchEngine::from_directory(&config.corpus_dir)
        .with_context(|| format!("Failed to load corpus from {}", config.corpus_dir))?;

    let metadata = search_engine.get_index_metadata();
    println!(
        "  Indexed {} documents, {} terms\n",
        metadata.no_of_docs, metadata.no_of_terms
    );

    if config.write_postings {
        search_engine
            .write_postings(&config.postings_path)
            .with_context(|| format!("Failed to write postings to {}", config.postings_path))?;
    }

    let mut rl = DefaultEditor::new().context("Failed to initialise line editor")?;
    loop {
        match rl.readline(PROMPT) {
            Ok(line) => {
                if is_exit_command(&line) {
                    println!("Goodbye!");
                    break;
                }
                if !line.trim().is_empty() {
                    if let Err(err) = rl.add_history_entry(line.as_str()) {
                        warn!(error = %err, "failed to record query history");
                    }
                }

                let results = search_engine.handle_query(&line);
                print_results(&results);
            }
            Err(ReadlineError::Interrupted) => {
                println!("CTRL-C");
                break;
            }
            Err(ReadlineError::Eof) => {
                println!("CTRL-D");
                break;
            }
            Err(err) => {
                error!(error = %err, "failed to read query");
                break;
            }
        }
    }

    Ok(())
}
