use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Stores user-configurable console preferences.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Config {
    /// `tracing_subscriber::EnvFilter` directive used when `RUST_LOG` is unset.
    #[serde(default = "Config::default_log_filter")]
    pub log_filter: String,
    #[serde(default = "Config::default_ui_color_enabled")]
    pub ui_color_enabled: bool,
    #[serde(default)]
    pub plain_output: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// Snapshot imported into the stores when the console starts.
    pub seed_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_filter: Self::default_log_filter(),
            ui_color_enabled: Self::default_ui_color_enabled(),
            plain_output: false,
            seed_path: None,
        }
    }
}

impl Config {
    pub fn default_log_filter() -> String {
        "spendcat=info".into()
    }

    pub fn default_ui_color_enabled() -> bool {
        true
    }

    /// Colour is used only when enabled and plain output was not requested.
    pub fn use_color(&self) -> bool {
        self.ui_color_enabled && !self.plain_output
    }
}
