/// Environment variable naming the YAML config file used by the binary
pub const CONFIG_PATH_ENV: &str = "TEAMCITY_MESSAGES_CONFIG";
/// Filter used for the crate's own diagnostics when `RUST_LOG` is unset
pub const DEFAULT_LOG_FILTER: &str = "warn";
