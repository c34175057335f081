pub mod auth;
pub mod booking;
pub mod call;
pub mod config;
pub mod dashboard;
pub mod directory;
pub mod models;
pub mod records;
pub mod session; // Session/Navigation Controller
pub mod timers;
pub mod verification;

use tracing_subscriber::EnvFilter;

/// Initialize tracing for an embedding shell (desktop app, test harness).
///
/// Call once at process start before constructing the
/// [`session::SessionController`].
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config::default_log_filter())),
        )
        .init();

    tracing::info!("{} core starting v{}", config::APP_NAME, config::APP_VERSION);
}
