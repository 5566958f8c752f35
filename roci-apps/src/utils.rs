use tracing_subscriber::filter::{EnvFilter, LevelFilter};

/// Initializes the global tracing subscriber. Respects `RUST_LOG` and
/// defaults to `info`.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::INFO.into())
                .from_env_lossy(),
        )
        .init();
}
