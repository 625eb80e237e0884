//! General application configuration.

use serde::{Deserialize, Serialize};

/// Default tracing filter when neither `LEXON_LOG` nor a CLI flag sets one.
fn default_log_level() -> String {
    "warn".to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GeneralConfig {
    /// Tracing filter directive (e.g., "warn", "lex_engine=debug").
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Emit a debug event with the latency of every engine query.
    #[serde(default)]
    pub trace_queries: bool,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            trace_queries: false,
        }
    }
}
