use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use versefind::index::{CorpusStore, stats};
use versefind::output;
use versefind::query::{Query, SearchEngine};
use versefind::render::{BatchRenderer, Renderer};
use versefind::server;
use versefind::utils::AppConfig;

#[derive(Parser)]
#[command(name = "versefind")]
#[command(about = "Suffix-array full-text search over a single static corpus")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Corpus file to load and index
    #[arg(long, global = true, env = "VERSEFIND_CORPUS")]
    corpus: Option<PathBuf>,

    /// Number of snippets per page
    #[arg(long, global = true)]
    page_size: Option<usize>,

    /// Config file (defaults to the platform config directory)
    #[arg(long, global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Serve the search API and static assets over HTTP (default)
    Serve {
        /// Port to listen on
        #[arg(short, long, env = "PORT")]
        port: Option<u16>,

        /// Directory of static assets
        #[arg(long)]
        static_dir: Option<PathBuf>,
    },
    /// Run one search and print the matches
    Search {
        /// Search query
        #[arg(required = true, trailing_var_arg = true)]
        query: Vec<String>,

        /// Zero-based page number
        #[arg(short, long, default_value_t = 0)]
        page: usize,

        /// Print the page as the JSON array the HTTP API returns
        #[arg(long)]
        json: bool,

        /// Disable colored output
        #[arg(long)]
        no_color: bool,
    },
    /// Show corpus and index statistics
    Stats,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let serving = matches!(cli.command, None | Some(Commands::Serve { .. }));
    init_tracing(serving);

    let mut config = match &cli.config {
        Some(path) => AppConfig::load_from(path)?,
        None => AppConfig::load()?,
    };
    if let Some(corpus) = cli.corpus {
        config.corpus_path = corpus;
    }
    if let Some(page_size) = cli.page_size {
        config.page_size = page_size;
    }

    let command = cli.command.unwrap_or(Commands::Serve {
        port: None,
        static_dir: None,
    });

    match command {
        Commands::Serve { port, static_dir } => {
            if let Some(port) = port {
                config.port = port;
            }
            if let Some(static_dir) = static_dir {
                config.static_dir = static_dir;
            }

            // Index before binding: a bad corpus must stop the process here
            let engine = Arc::new(load_engine(&config, false)?);

            let runtime = tokio::runtime::Runtime::new().context("Failed to start runtime")?;
            runtime.block_on(server::serve(engine, &config))?;
        }
        Commands::Search {
            query,
            page,
            json,
            no_color,
        } => {
            let engine = load_engine(&config, !json)?;
            let query = Query::parse(&query.join(" "))?;
            let total = engine.locator().count(&query);
            let result = engine.search(query, page);

            if json {
                println!("{}", BatchRenderer.render(&result).body);
            } else {
                output::print_matches(
                    engine.store().text(),
                    &result.offsets,
                    result.query.len(),
                    !no_color,
                )?;
                output::print_page_footer(&result, total)?;
            }
        }
        Commands::Stats => {
            let engine = load_engine(&config, true)?;
            stats::show_stats(engine.store());
        }
    }

    Ok(())
}

fn load_engine(config: &AppConfig, show_progress: bool) -> Result<SearchEngine> {
    let store = CorpusStore::open_with_progress(&config.corpus_path, show_progress)
        .context("Failed to load corpus")?;
    Ok(SearchEngine::new(store, config.page_size))
}

fn init_tracing(serving: bool) {
    let default_filter = if serving {
        "versefind=info,tower_http=info"
    } else {
        "versefind=warn"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
