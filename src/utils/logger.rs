/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 20/10/25
******************************************************************************/

use once_cell::sync::OnceCell;
use tracing_subscriber::EnvFilter;

static LOGGER_INIT: OnceCell<()> = OnceCell::new();

/// Initializes the global tracing subscriber
///
/// The filter comes from `RUST_LOG` when set, defaulting to `info`.
/// Subsequent calls are no-ops, so tests can call this freely.
pub fn setup_logger() {
    LOGGER_INIT.get_or_init(|| {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
        // try_init: another subscriber may already be installed by the host application
        let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
    });
}
