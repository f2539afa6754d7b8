//! CLI entrypoint for Trivia Board
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, bail};
use clap::Parser;
use std::io::IsTerminal;
use std::sync::Arc;
use std::time::Duration;
use tracing::info;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;
use trivia_application::{
    BuildBoardInput, BuildBoardUseCase, BuildProgressNotifier, CategoryFetcher, NoProgress,
};
use trivia_domain::CategoryId;
use trivia_infrastructure::{
    ConfigLoader, FileCategoryFetcher, FileConfig, HttpCategoryFetcher, SourceKind,
};
use trivia_presentation::{Cli, GameRepl, ProgressReporter, SimpleProgress};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Keep the guard alive so buffered log lines are flushed on exit
    let _log_guard = init_logging(&cli)?;

    if cli.show_config {
        ConfigLoader::print_config_sources();
        return Ok(());
    }

    info!("Starting Trivia Board");

    // === Configuration ===
    let mut config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        if let Some(path) = &cli.config {
            if !path.exists() {
                bail!("Config file not found: {}", path.display());
            }
        }
        ConfigLoader::load(cli.config.as_deref()).context("Failed to load configuration")?
    };
    apply_cli_overrides(&mut config, &cli);
    config.validate()?;

    let params = config.board_params().with_shuffle_seed(cli.seed);
    let input = BuildBoardInput::new(config.game.categories.iter().copied()).with_params(params);
    let reveal_delay = config.reveal_delay();
    let progress = ProgressKind::select(cli.quiet, std::io::stderr().is_terminal());

    // === Dependency Injection ===
    match config.source.kind {
        SourceKind::Http => {
            let fetcher =
                HttpCategoryFetcher::new(config.source.base_url.clone(), config.source.timeout())?;
            info!("Using category API at {}", fetcher.base_url());
            play(Arc::new(fetcher), input, reveal_delay, progress).await
        }
        SourceKind::File => {
            let Some(path) = config.source.path.as_ref() else {
                bail!("source.path is required when source.kind = \"file\"");
            };
            let fetcher = FileCategoryFetcher::from_path(path)?;
            play(Arc::new(fetcher), input, reveal_delay, progress).await
        }
    }
}

/// Initialize logging based on verbosity level
fn init_logging(cli: &Cli) -> Result<Option<WorkerGuard>> {
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    match &cli.log_file {
        Some(path) => {
            let file = std::fs::File::create(path)
                .with_context(|| format!("Failed to create log file {}", path.display()))?;
            let (writer, guard) = tracing_appender::non_blocking(file);
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_target(false)
                .with_ansi(false)
                .with_writer(writer)
                .init();
            Ok(Some(guard))
        }
        None => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_target(false)
                .with_writer(std::io::stderr)
                .init();
            Ok(None)
        }
    }
}

/// Command line flags win over every config file
fn apply_cli_overrides(config: &mut FileConfig, cli: &Cli) {
    if !cli.categories.is_empty() {
        config.game.categories = cli.categories.iter().copied().map(CategoryId::new).collect();
    }
    if let Some(clues) = cli.clues {
        config.game.clues_per_category = clues;
    }
    if let Some(delay) = cli.reveal_delay {
        config.game.reveal_delay_ms = delay;
    }
    if let Some(url) = &cli.api_url {
        config.source.kind = SourceKind::Http;
        config.source.base_url = url.clone();
    }
    if let Some(path) = &cli.offline {
        config.source.kind = SourceKind::File;
        config.source.path = Some(path.clone());
    }
}

/// How board construction progress is shown
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ProgressKind {
    Hidden,
    /// Line-per-event output when stderr is not a terminal (pipes, CI logs)
    Plain,
    Bar,
}

impl ProgressKind {
    fn select(quiet: bool, interactive: bool) -> Self {
        match (quiet, interactive) {
            (true, _) => ProgressKind::Hidden,
            (false, false) => ProgressKind::Plain,
            (false, true) => ProgressKind::Bar,
        }
    }

    fn notifier(self) -> Box<dyn BuildProgressNotifier> {
        match self {
            ProgressKind::Hidden => Box::new(NoProgress),
            ProgressKind::Plain => Box::new(SimpleProgress),
            ProgressKind::Bar => Box::new(ProgressReporter::new()),
        }
    }
}

/// Build the board from `fetcher` and hand the session to the REPL
async fn play<F: CategoryFetcher + 'static>(
    fetcher: Arc<F>,
    input: BuildBoardInput,
    reveal_delay: Duration,
    progress: ProgressKind,
) -> Result<()> {
    let use_case = BuildBoardUseCase::new(fetcher);
    let progress = progress.notifier();

    let session = use_case
        .start_game(input, progress.as_ref())
        .await
        .context("Could not build the board")?;
    info!("Board ready with {} clues", session.store().len());

    let mut repl = GameRepl::new(session).with_reveal_delay(reveal_delay);
    repl.run().await?;

    Ok(())
}
