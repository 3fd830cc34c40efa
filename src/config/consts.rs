/// Separator between bodies when none is configured: the platform line feed
#[cfg(windows)]
pub const DEFAULT_SEPARATOR: &str = "\r\n";
/// Separator between bodies when none is configured: the platform line feed
#[cfg(not(windows))]
pub const DEFAULT_SEPARATOR: &str = "\n";
/// Targets processed at once when `executor_options.max_concurrency` is absent
pub const DEFAULT_MAX_CONCURRENCY: usize = 1;
/// `tracing` filter used when `RUST_LOG` is unset
pub const DEFAULT_LOG_FILTER: &str = "info";
