//! Process-wide file logging for the CLI driver and long perft runs.

use std::{path::Path, sync::OnceLock};
use tracing_subscriber::{EnvFilter, fmt};

static GUARD: OnceLock<tracing_appender::non_blocking::WorkerGuard> = OnceLock::new();
static INIT: OnceLock<()> = OnceLock::new();

/// Initializes logging once for the whole process; later calls are
/// no-ops. `RUST_LOG` overrides `filter` when set, e.g.
/// `RUST_LOG="outpost::moves::perft=debug,info"`.
pub fn init_logging<P: AsRef<Path>>(path: P, filter: &str) {
    INIT.get_or_init(|| {
        let path = path.as_ref();
        if let Some(dir) = path.parent() {
            let _ = std::fs::create_dir_all(dir);
        }

        let file = match std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
        {
            Ok(f) => f,
            Err(err) => {
                eprintln!("could not open log file {}: {err}", path.display());
                return;
            }
        };

        let (writer, guard) = tracing_appender::non_blocking(file);
        // the guard must outlive the process or buffered lines are lost
        let _ = GUARD.set(guard);

        let env_filter = if std::env::var_os("RUST_LOG").is_some() {
            EnvFilter::from_default_env()
        } else {
            EnvFilter::try_new(filter).unwrap_or_else(|_| EnvFilter::new("info"))
        };

        let subscriber = fmt()
            .with_env_filter(env_filter)
            .with_ansi(false)
            .with_target(true)
            .with_writer(writer)
            .finish();

        // idempotent across tests that race to install a subscriber
        let _ = tracing::subscriber::set_global_default(subscriber);
    });
}
