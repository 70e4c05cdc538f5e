use std::fmt;
use serde::{Deserialize, Serialize};
use crate::config::constants::{AUTO_DETECT_LABEL, SUPPORTED_LANGUAGES, UNKNOWN_LABEL};

/// A display name for a source language, or one of the `Auto-detect` / `Unknown` sentinels.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LanguageLabel(String);

impl LanguageLabel {
    pub fn new(label: impl Into<String>) -> Self {
        Self(label.into())
    }

    pub fn auto_detect() -> Self {
        Self(AUTO_DETECT_LABEL.to_string())
    }

    pub fn unknown() -> Self {
        Self(UNKNOWN_LABEL.to_string())
    }

    /// Case-insensitive lookup in the selectable catalog; returns the canonical spelling.
    pub fn from_catalog(name: &str) -> Option<Self> {
        let wanted = name.trim();
        SUPPORTED_LANGUAGES
            .iter()
            .find(|candidate| candidate.eq_ignore_ascii_case(wanted))
            .map(|candidate| Self((*candidate).to_string()))
    }

    pub fn catalog() -> Vec<Self> {
        SUPPORTED_LANGUAGES.iter().map(|name| Self((*name).to_string())).collect()
    }

    pub fn is_auto_detect(&self) -> bool {
        self.0 == AUTO_DETECT_LABEL
    }

    pub fn is_unknown(&self) -> bool {
        self.0 == UNKNOWN_LABEL
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for LanguageLabel {
    fn default() -> Self {
        Self::auto_detect()
    }
}

impl fmt::Display for LanguageLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
