//! Binary entrypoint kept minimal. The full runtime lives in `app`.

use std::sync::OnceLock;

use clap::Parser;

use banchan::args::Args;
use banchan::config::{self, Settings};

/// Keeps the non-blocking log writer alive for the process lifetime.
static LOG_GUARD: OnceLock<tracing_appender::non_blocking::WorkerGuard> = OnceLock::new();

/// Initialize tracing to `~/.config/banchan/logs/banchan.log`, falling
/// back to stderr when the file cannot be opened.
fn init_logging() {
    let mut log_path = config::logs_dir();
    log_path.push("banchan.log");
    let env_filter = || {
        tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"))
    };
    match std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)
    {
        Ok(file) => {
            let (non_blocking, guard) = tracing_appender::non_blocking(file);
            tracing_subscriber::fmt()
                .with_env_filter(env_filter())
                .with_target(false)
                .with_ansi(false)
                .with_writer(non_blocking)
                .init();
            let _ = LOG_GUARD.set(guard);
            tracing::info!(path = %log_path.display(), "logging initialized");
        }
        Err(e) => {
            tracing_subscriber::fmt()
                .with_env_filter(env_filter())
                .with_target(false)
                .init();
            tracing::warn!(error = %e, "failed to open log file; using stderr");
        }
    }
}

#[tokio::main]
async fn main() {
    init_logging();
    let args = Args::parse();
    let settings = match args.settings.as_deref() {
        Some(path) => Settings::load_from(path),
        None => Settings::load(),
    };
    tracing::info!(screen = ?args.screen, "banchan starting");
    if let Err(err) = banchan::app::run(settings, args.screen.into()).await {
        tracing::error!(error = ?err, "application error");
    }
    tracing::info!("banchan exited");
}
