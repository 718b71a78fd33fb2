//! articled CLI
//!
//! `serve` runs the ingest server; `analyze` and `export` read the
//! archive back for reporting.

use std::path::PathBuf;
use std::sync::Arc;

use clap::{Parser, Subcommand};

use articled::analysis::{ArticleCollection, export::export_csv};
use articled::config::Config;
use articled::error::Result;
use articled::ingest::IngestService;
use articled::server;
use articled::storage::ArticleStore;

/// articled - article ingest server and archive analyzer
#[derive(Parser, Debug)]
#[command(name = "articled", version, about = "Article ingest server with a text-file archive")]
struct Cli {
    /// Path to the configuration file
    #[arg(short, long, default_value = "config.toml")]
    config: PathBuf,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the HTTP ingest server
    Serve {
        /// Override the configured bind address (e.g. 0.0.0.0:8080)
        #[arg(long)]
        bind: Option<String>,
    },

    /// Print aggregate statistics over the stored articles
    Analyze,

    /// Export stored articles to CSV
    Export {
        /// Output path (default: export.output from the config)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Validate the configuration file
    Validate,
}

/// Initialize logging based on verbosity flag.
fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp_secs()
        .init();
}

/// Main entry point for the CLI application.
#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut config = Config::load_or_default(&cli.config);

    match cli.command {
        Command::Serve { bind } => {
            if let Some(bind) = bind {
                config.server.bind = bind;
            }
            let addr = config.bind_addr()?;

            // Refuse to serve if the store cannot establish its index.
            let store = ArticleStore::open(&config.storage.dir).await?;
            let service = Arc::new(IngestService::new(Arc::new(store)));

            server::serve(addr, service).await?;
        }

        Command::Analyze => {
            let store = ArticleStore::open(&config.storage.dir).await?;
            let collection = ArticleCollection::new(store.scan().await?);
            print_report(&collection);
        }

        Command::Export { output } => {
            let store = ArticleStore::open(&config.storage.dir).await?;
            let collection = ArticleCollection::new(store.scan().await?);

            let path = output.unwrap_or_else(|| PathBuf::from(&config.export.output));
            export_csv(&collection, &path)?;
        }

        Command::Validate => {
            log::info!("Validating configuration...");
            if let Err(e) = config.validate() {
                log::error!("Config validation failed: {e}");
                return Err(e);
            }
            log::info!("All validations passed!");
        }
    }

    Ok(())
}

/// Print the analysis report to stdout.
fn print_report(collection: &ArticleCollection) {
    println!("--- Articles by Author ---");
    let mut authors: Vec<_> = collection.by_author().into_iter().collect();
    authors.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    for (author, count) in authors {
        println!("{author}: {count} articles");
    }

    println!("\n--- Articles by Category ---");
    let mut categories: Vec<_> = collection.by_category().into_iter().collect();
    categories.sort();
    for (category, count) in &categories {
        println!("{category}: {count} articles");
    }

    println!("\n--- Average Word Count by Category ---");
    let mut averages: Vec<_> = collection.avg_word_count_by_category().into_iter().collect();
    averages.sort_by(|a, b| a.0.cmp(&b.0));
    for (category, avg) in averages {
        println!("{category}: {avg:.0} words");
    }

    println!("\n--- Top 5 Longest Articles ---");
    for article in collection.top_by_word_count(5) {
        println!("{} ({} words)", article.title, article.word_count);
    }

    println!("\nTotal articles: {}", collection.total());
}
