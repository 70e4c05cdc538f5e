use std::fmt;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum)]
pub enum DetailLevel {
    Basic,
    Medium,
    Advanced,
}

impl Default for DetailLevel {
    fn default() -> Self {
        DetailLevel::Medium
    }
}

impl DetailLevel {
    pub fn name(&self) -> &'static str {
        match self {
            DetailLevel::Basic => "Basic",
            DetailLevel::Medium => "Medium",
            DetailLevel::Advanced => "Advanced",
        }
    }
}

impl fmt::Display for DetailLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
