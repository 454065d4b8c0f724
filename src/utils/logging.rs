use crate::config::Config;
use crate::dn::Dn;
use tracing::{debug, error, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Installs the global tracing subscriber. `RUST_LOG` wins over the config filter.
///
/// Returns false if a subscriber was already installed.
pub fn init_tracing(config: &Config) -> bool {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.log_filter.as_str().into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .try_init()
        .is_ok()
}

/// Logs a remote object operation with consistent format
pub fn log_mo_operation(operation: &str, dn: &Dn, details: Option<&str>) {
    match details {
        Some(d) => debug!("MO_OP: {} on {} - {}", operation, dn, d),
        None => debug!("MO_OP: {} on {}", operation, dn),
    }
}

/// Logs an admin call that changed remote state
pub fn log_admin_success(method: &str, dn: &Dn, details: Option<&str>) {
    match details {
        Some(d) => info!("ADMIN: {} on {} - {}", method, dn, d),
        None => info!("ADMIN: {} on {}", method, dn),
    }
}

/// Logs an operation error raised by this crate
pub fn log_operation_error(method: &str, dn: &Dn, error: &str) {
    error!("MO_ERROR: {} on {} failed: {}", method, dn, error);
}

/// Logs a commit outcome
pub fn log_commit(operations: usize, failure: Option<&str>) {
    match failure {
        Some(f) => warn!("COMMIT: {} pending operation(s) rejected - {}", operations, f),
        None => debug!("COMMIT: {} operation(s) applied", operations),
    }
}
