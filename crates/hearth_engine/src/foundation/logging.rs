//! Logging utilities and structured logging support

pub use log::{debug, error, info, trace, warn};

/// Initialize the logging system
pub fn init() {
    env_logger::init();
}

/// Initialize the logging system with an explicit level filter
/// (e.g. `"debug"`, `"hearth_engine=trace"`).
pub fn init_with_level(filter: &str) {
    env_logger::Builder::from_default_env()
        .parse_filters(filter)
        .init();
}
