//! CLI entrypoint for vehicle-advisor
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use advisor_application::{
    ConversationLogger, DispatchProgress, FilterEngine, InventoryStore, LlmGateway,
    NoConversationLogger, NoProgress, RecommendVehicles, ResilientExecutor,
    SpecialistOrchestrator, SystemClock,
};
use advisor_domain::{IntentClassifier, canonical_fleet};
use advisor_infrastructure::{
    ConfigLoader, FileConfig, JsonFileInventorySource, JsonlConversationLogger, OpenAiGateway,
    VehicleToolbox,
};
use advisor_presentation::{
    ChatRepl, Cli, CliMode, ConsoleFormatter, ProgressReporter, SimpleProgress,
};
use anyhow::{Result, anyhow, bail};
use clap::Parser;
use std::io::IsTerminal;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

const LOG_FILE_PREFIX: &str = "vehicle-advisor.log";

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let mode = cli.mode();

    if mode == CliMode::ShowConfig {
        ConfigLoader::print_config_sources(cli.config.as_deref());
        return Ok(());
    }

    // === Configuration ===
    let mut config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_deref()).map_err(|e| anyhow!("{}", e))?
    };
    if let Some(path) = &cli.data {
        config.inventory.path = path.display().to_string();
    }

    let _log_guard = init_tracing(cli.verbose, config.logging.log_dir.as_deref());
    info!("Starting vehicle-advisor");

    let issues = config.validate();
    for issue in issues.iter().filter(|i| !i.is_error()) {
        warn!("{}", issue);
        eprintln!("{}", issue);
    }
    if issues.iter().any(|i| i.is_error()) {
        for issue in issues.iter().filter(|i| i.is_error()) {
            eprintln!("{}", issue);
        }
        bail!("Invalid configuration");
    }

    if !config.output.color {
        colored::control::set_override(false);
    }

    // === Dependency Injection: inventory ===
    let source = Arc::new(JsonFileInventorySource::new(&config.inventory.path));
    let store = Arc::new(
        InventoryStore::new(source.clone(), Arc::new(SystemClock))
            .with_ttl_secs(config.inventory.cache_ttl_secs),
    );
    let filters = Arc::new(FilterEngine::new(store.clone()));

    match mode {
        // Printed before configuration is loaded
        CliMode::ShowConfig => {}
        CliMode::Usage => {
            bail!("A query is required. Use --chat for interactive mode or --help for options.")
        }
        CliMode::SeedInventory => {
            let fleet = canonical_fleet();
            source.write_seed(&fleet).await?;
            println!(
                "Wrote {} vehicles to {}",
                fleet.len(),
                source.path().display()
            );
        }
        CliMode::Inventory => {
            store.refresh().await;
            print!("{}", ConsoleFormatter::format_summary(&store.summary().await));
        }
        CliMode::Search(text) => {
            let parsed = filters.explain(&text).await;
            print!("{}", ConsoleFormatter::format_search_filter(&parsed));
            print!("{}", ConsoleFormatter::format_vehicles(&filters.general(&text).await));
        }
        CliMode::Classify(query) => {
            print!(
                "{}",
                ConsoleFormatter::format_categories(&IntentClassifier::explain(&query))
            );
        }
        CliMode::Chat => {
            let (recommend, reporter) = build_advisor(&config, &cli, filters)?;
            let mut repl = ChatRepl::new(recommend, store);
            if let Some(reporter) = reporter {
                repl = repl.with_progress(reporter);
            }
            repl.run().await?;
        }
        CliMode::Ask(query) => {
            let (recommend, reporter) = build_advisor(&config, &cli, filters)?;
            if !cli.quiet {
                eprint!("{}", ConsoleFormatter::format_summary(&store.summary().await));
            }

            let answer = recommend.answer(&query, &[]).await;
            if let Some(reporter) = reporter {
                reporter.finish();
            }
            println!("{}", ConsoleFormatter::format_answer(&query, &answer?));
        }
    }

    Ok(())
}

/// Wire the agent stack: gateway, toolboxes, orchestrator, executor.
///
/// Also returns the spinner reporter when one is in use, so callers can clear
/// it after each answer.
fn build_advisor(
    config: &FileConfig,
    cli: &Cli,
    filters: Arc<FilterEngine>,
) -> Result<(Arc<RecommendVehicles>, Option<Arc<ProgressReporter>>)> {
    let gateway: Arc<dyn LlmGateway> = Arc::new(OpenAiGateway::new(&config.providers.openai)?);

    let logger: Arc<dyn ConversationLogger> = match &config.logging.conversation_log {
        Some(path) => match JsonlConversationLogger::new(path) {
            Some(logger) => {
                info!("Conversation log: {}", logger.path().display());
                Arc::new(logger)
            }
            None => Arc::new(NoConversationLogger),
        },
        None => Arc::new(NoConversationLogger),
    };

    let mut reporter = None;
    let progress: Arc<dyn DispatchProgress> = if cli.quiet || !config.output.show_progress {
        Arc::new(NoProgress)
    } else if std::io::stderr().is_terminal() {
        let spinner = Arc::new(ProgressReporter::new());
        reporter = Some(spinner.clone());
        spinner
    } else {
        Arc::new(SimpleProgress)
    };

    let params = config.executor.to_execution_params();

    let specialist_tools =
        Arc::new(VehicleToolbox::inventory(filters.clone()).with_logger(logger.clone()));
    let orchestrator = Arc::new(
        SpecialistOrchestrator::new(
            gateway.clone(),
            specialist_tools,
            &config.models.specialist,
            params.specialist_timeout,
        )
        .with_logger(logger.clone())
        .with_progress(progress.clone()),
    );
    let manager_tools =
        Arc::new(VehicleToolbox::manager(filters, orchestrator).with_logger(logger.clone()));

    let executor = ResilientExecutor::new(gateway, params.retry)
        .with_logger(logger)
        .with_progress(progress);

    let recommend = RecommendVehicles::new(executor, manager_tools, &config.models.manager);
    Ok((Arc::new(recommend), reporter))
}

/// Console logging by verbosity (or `RUST_LOG` without `-v`), plus a daily
/// log file when `log_dir` is set.
fn init_tracing(verbose: u8, log_dir: Option<&str>) -> Option<WorkerGuard> {
    let filter = match verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    let console = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false);

    match log_dir {
        Some(dir) => {
            let appender = tracing_appender::rolling::daily(dir, LOG_FILE_PREFIX);
            let (writer, guard) = tracing_appender::non_blocking(appender);
            tracing_subscriber::registry()
                .with(filter)
                .with(console)
                .with(fmt::layer().with_writer(writer).with_ansi(false))
                .init();
            Some(guard)
        }
        None => {
            tracing_subscriber::registry()
                .with(filter)
                .with(console)
                .init();
            None
        }
    }
}
