//! Toggle configuration: storage key, marker class, and marker target.
//!
//! Pages may override the defaults with a JSON document embedded before the
//! module script:
//!
//! ```html
//! <script id="dark-mode-config" type="application/json">
//!   {"storage_key": "darkMode", "marker_class": "dark-mode", "target": "body"}
//! </script>
//! ```
//!
//! Every field is optional.

use serde::Deserialize;

use crate::error::DarkModeError;

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_STORAGE_KEY: &str = "darkMode";
pub const DEFAULT_MARKER_CLASS: &str = "dark-mode";

/// Element id of the optional embedded config document.
pub const CONFIG_ELEMENT_ID: &str = "dark-mode-config";

/// Element that receives the marker class.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MarkerTarget {
    /// `<body>`. Absent while the head is still parsing.
    #[default]
    Body,
    /// `<html>`. Present as soon as any script runs.
    Html,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DarkModeConfig {
    pub storage_key: String,
    pub marker_class: String,
    pub target: MarkerTarget,
}

impl Default for DarkModeConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_owned(),
            marker_class: DEFAULT_MARKER_CLASS.to_owned(),
            target: MarkerTarget::Body,
        }
    }
}

impl DarkModeConfig {
    /// Parse and validate a JSON config document. Missing fields take defaults.
    pub fn from_json(raw: &str) -> Result<Self, DarkModeError> {
        let config: Self = serde_json::from_str(raw).map_err(|e| DarkModeError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Resolve the page's embedded config text. A missing element gives the
    /// defaults; an invalid document is logged and also gives the defaults.
    pub fn from_embedded(raw: Option<&str>) -> Self {
        let Some(raw) = raw.map(str::trim).filter(|raw| !raw.is_empty()) else {
            return Self::default();
        };
        match Self::from_json(raw) {
            Ok(config) => config,
            Err(e) => {
                log::warn!("dark mode: ignoring embedded config: {e}");
                Self::default()
            }
        }
    }

    /// Reject values the browser would refuse at toggle time.
    ///
    /// `DOMTokenList` raises on empty tokens and tokens containing whitespace,
    /// so both are caught here rather than on the first click.
    pub fn validate(&self) -> Result<(), DarkModeError> {
        if self.storage_key.is_empty() {
            return Err(DarkModeError::Config("storage_key must not be empty".into()));
        }
        if self.marker_class.is_empty() {
            return Err(DarkModeError::Config("marker_class must not be empty".into()));
        }
        if self.marker_class.chars().any(char::is_whitespace) {
            return Err(DarkModeError::Config(format!(
                "marker_class '{}' must be a single class name",
                self.marker_class
            )));
        }
        Ok(())
    }
}
