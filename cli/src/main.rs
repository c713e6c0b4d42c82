//! CLI entrypoint for photofeed
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result};
use clap::Parser;
use photofeed_application::{
    ActivityLogger, FeedUseCase, NoActivityLogger, NoProgress, ProgressNotifier, Session,
    SessionUseCase, SimulatedLatency,
};
use photofeed_domain::{OutputFormat, Severity};
use photofeed_infrastructure::{
    ConfigLoader, FileConfig, InMemoryIdentityRepository, InMemoryLikeRepository,
    InMemoryPostRepository, JsonlActivityLogger, system_ports,
};
use photofeed_presentation::{
    Cli, Command, ConsoleFormatter, FeedShell, ProgressReporter, SimpleProgress, run_demo,
};
use std::io::IsTerminal;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    if cli.show_config {
        ConfigLoader::print_config_sources();
        return Ok(());
    }

    let config: FileConfig = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref())
            .map_err(|e| anyhow::anyhow!("{}", e))
            .context("failed to load configuration")?
    };

    for issue in config.validate() {
        match issue.severity {
            Severity::Error => anyhow::bail!("{}", issue.message),
            Severity::Warning => warn!("{}", issue.message),
        }
    }

    info!("Starting photofeed");

    ConsoleFormatter::set_color(config.output.color);
    let format: OutputFormat = cli
        .output
        .map(Into::into)
        .or(config.output.format)
        .unwrap_or_default();

    // === Dependency Injection ===
    let latency = if cli.no_latency {
        SimulatedLatency::none()
    } else {
        config.latency.to_latency()
    };
    let (liked_flag, _) = config.feed.parse_liked_flag();

    let activity: Arc<dyn ActivityLogger> = match config
        .logging
        .activity_log
        .as_deref()
        .and_then(JsonlActivityLogger::new)
    {
        Some(logger) => Arc::new(logger),
        None => Arc::new(NoActivityLogger),
    };
    let progress: Arc<dyn ProgressNotifier> = if cli.quiet || format == OutputFormat::Json {
        Arc::new(NoProgress)
    } else if std::io::stderr().is_terminal() {
        Arc::new(ProgressReporter::new())
    } else {
        Arc::new(SimpleProgress)
    };

    let session = Session::new();
    let system = system_ports();
    let identities = Arc::new(InMemoryIdentityRepository::seeded());

    let sessions = Arc::new(
        SessionUseCase::new(identities.clone(), session.clone(), system.clone())
            .with_latency(latency.clone())
            .with_activity_logger(activity.clone())
            .with_progress(progress.clone()),
    );
    let feed = Arc::new(
        FeedUseCase::new(
            Arc::new(InMemoryPostRepository::seeded()),
            Arc::new(InMemoryLikeRepository::new()),
            identities,
            session,
            system,
        )
        .with_latency(latency)
        .with_liked_flag_policy(liked_flag)
        .with_activity_logger(activity)
        .with_progress(progress),
    );

    if let (Some(email), Some(password)) = (&cli.email, &cli.password) {
        sessions
            .authenticate(email, password)
            .await
            .context("sign in failed")?;
    }

    match cli.command.unwrap_or(Command::Feed) {
        Command::Feed => {
            let posts = feed.list_all().await?;
            println!("{}", ConsoleFormatter::format_feed(&posts, format));
        }
        Command::Profile { handle } => {
            let identity = sessions
                .find_by_handle(&handle)
                .await?
                .with_context(|| format!("no user named '{}'", handle))?;
            let profile = feed.profile(&identity.id).await?;
            println!("{}", ConsoleFormatter::format_profile(&profile, format));
        }
        Command::Demo => {
            let report = run_demo(&sessions, &feed).await?;
            println!("{}", report.render(format));
        }
        Command::Shell => {
            FeedShell::new(sessions, feed)
                .with_format(format)
                .run()
                .await?;
        }
    }

    Ok(())
}
