use serde::{Deserialize, Serialize};
use crate::helpers::config_helper::ConfigHelper;

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct HistoryConfig {
    #[serde(default = "ConfigHelper::default_history_capacity")]
    pub capacity: usize,

    #[serde(default = "ConfigHelper::default_display_window")]
    pub display_window: usize,
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            capacity: ConfigHelper::default_history_capacity(),
            display_window: ConfigHelper::default_display_window(),
        }
    }
}
