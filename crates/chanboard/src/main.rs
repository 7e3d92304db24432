//! chanboard - Live rate-limit dashboard for a pool of API channels

mod cli;

use anyhow::{Context, Result};
use chanboard_core::{
    run_pass, ChannelSource, ServerConfig, SourceConfig, SqliteChannelSource, ViewQuery,
};
use chanboard_web::AppState;
use clap::{Parser, Subcommand};
use std::net::IpAddr;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "chanboard",
    version,
    about = "Live rate-limit dashboard for a pool of API channels",
    long_about = "Reads per-channel minute/day usage counters from a SQLite store and serves a\n\
                  ranked, categorized dashboard with pool-wide statistics.\n\
                  \n\
                  Examples:\n\
                    chanboard                              # Serve dashboard on 0.0.0.0:8080 (default)\n\
                    chanboard --port 9000 serve            # Custom port\n\
                    chanboard summary                      # Print summary and ranked channels\n\
                    chanboard summary --filter paid --json # Paid channels as JSON\n\
                  \n\
                  Environment Variables:\n\
                    CHANBOARD_DB_PATH                      # SQLite database with the channels table\n\
                    SERVER_PORT                            # HTTP port\n\
                    CHANBOARD_BIND                         # Bind address\n\
                    CHANBOARD_REFRESH_SECS                 # Dashboard auto-refresh interval\n\
                    CHANBOARD_NO_COLOR                     # Disable ANSI colors\n\
                    RUST_LOG                               # Log filter (default: info)"
)]
struct Cli {
    #[command(subcommand)]
    mode: Option<Mode>,

    /// SQLite database holding the channels table
    #[arg(long, env = "CHANBOARD_DB_PATH", default_value = "chanboard.db")]
    db_path: PathBuf,

    /// Port for the web server
    #[arg(long, env = "SERVER_PORT", default_value_t = 8080)]
    port: u16,

    /// Address to bind the web server to
    #[arg(long, env = "CHANBOARD_BIND", default_value = "0.0.0.0")]
    bind: IpAddr,

    /// Dashboard auto-refresh interval in seconds
    #[arg(long, env = "CHANBOARD_REFRESH_SECS", default_value_t = 60)]
    refresh_secs: u64,
}

#[derive(Subcommand)]
enum Mode {
    /// Serve the web dashboard (default)
    Serve,
    /// Run one pass, print it and exit
    Summary {
        /// Channel subset: all, available, unavailable, paid, normal
        #[arg(long, short = 'f', default_value = "all")]
        filter: String,
        /// Only channels whose ID contains this text
        #[arg(long, short = 'q')]
        search: Option<String>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
        /// Disable ANSI colors
        #[arg(long, env = "CHANBOARD_NO_COLOR")]
        no_color: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();

    let cli = Cli::parse();

    let source_config = SourceConfig {
        db_path: cli.db_path,
    };
    let server_config = ServerConfig {
        bind: cli.bind,
        port: cli.port,
        refresh_secs: cli.refresh_secs,
    };

    match cli.mode.unwrap_or(Mode::Serve) {
        Mode::Serve => {
            run_serve(source_config, server_config).await?;
        }
        Mode::Summary {
            filter,
            search,
            json,
            no_color,
        } => {
            run_summary(source_config, &filter, search.as_deref(), json, no_color)?;
        }
    }

    Ok(())
}

/// Logs go to stderr so `summary --json` output stays parseable
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn open_source(config: &SourceConfig) -> Result<SqliteChannelSource> {
    config.validate()?;
    let source = SqliteChannelSource::open(&config.db_path).with_context(|| {
        format!(
            "Failed to open channel store: {}",
            config.db_path.display()
        )
    })?;
    Ok(source)
}

async fn run_serve(source_config: SourceConfig, server_config: ServerConfig) -> Result<()> {
    server_config.validate()?;

    let source = open_source(&source_config)?;
    source
        .ping()
        .context("Channel store connectivity check failed")?;
    info!(path = %source.db_path().display(), "Channel store reachable");

    let state = AppState::new(Arc::new(source), server_config.refresh_secs);
    chanboard_web::run(state, server_config.socket_addr()).await
}

fn run_summary(
    source_config: SourceConfig,
    filter: &str,
    search: Option<&str>,
    json: bool,
    no_color: bool,
) -> Result<()> {
    let query = ViewQuery::parse(Some(filter), search).context("Invalid channel filter")?;
    let source = open_source(&source_config)?;

    let mut dashboard = run_pass(&source).context("Pass failed")?;
    dashboard.channels = query.apply(&dashboard.channels);

    println!("{}", cli::format_dashboard(&dashboard, json, no_color));

    Ok(())
}
