//! `kairos-triage` server binary.
//!
//! Reads `.env` and the optional config file, installs the stdout log layer,
//! and hands off to [`kairos_triage::start`], which serves `GET /` and
//! `POST /triage` until Ctrl-C.

use clap::Parser;
use kairos_triage::base::{config::Config, types::Void};
use tracing_subscriber::{fmt::format::FmtSpan, layer::SubscriberExt, util::SubscriberInitExt};

/// Symptom triage gateway backed by a hosted LLM.
///
/// Settings come from environment variables (a local `.env` is honored) and an
/// optional TOML file.  Set `GEMINI_API_KEY`, or `LLM_PROVIDER=openai` with
/// `OPENAI_API_KEY`; `SERVER_HOST` / `SERVER_PORT` choose the listen address.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// TOML file layered over the environment.
    ///
    /// Falls back to `.hidden/config.toml` when present.
    #[arg(short, long)]
    config: Option<std::path::PathBuf>,
    /// Log verbosity: INFO by default, `-v` for DEBUG (model reply sizes), `-vv` for TRACE.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[tokio::main]
async fn main() -> Void {
    let args = Args::parse();

    // A missing `.env` is fine; the real environment still applies.
    dotenvy::dotenv().ok();

    let level = match args.verbose {
        0 => tracing::Level::INFO,
        1 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };

    let level_filter = tracing_subscriber::filter::LevelFilter::from_level(level);

    let stdout = tracing_subscriber::fmt::layer()
        .without_time()
        .with_ansi(true)
        .with_level(true)
        .with_file(false)
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false)
        .with_span_events(FmtSpan::CLOSE);

    // Request spans from the router and the triage adapter close with timings.
    tracing_subscriber::registry().with(level_filter).with(stdout).init();

    let config = Config::load(args.config.as_deref())?;

    kairos_triage::start(config).await
}
