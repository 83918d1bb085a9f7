//! The persisted dark mode preference.
//!
//! DESIGN
//! ======
//! The stored value is plain text. Only the exact string `"true"` enables
//! dark mode; anything else, including a missing entry, reads as disabled.

#[cfg(test)]
#[path = "preference_test.rs"]
mod preference_test;

const STORED_TRUE: &str = "true";
const STORED_FALSE: &str = "false";

/// Two-state theme preference.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ThemeState {
    #[default]
    Disabled,
    Enabled,
}

impl ThemeState {
    /// Interpret a stored value. Absent or unrecognized text is `Disabled`.
    pub fn from_stored(raw: Option<&str>) -> Self {
        match raw {
            Some(STORED_TRUE) => Self::Enabled,
            _ => Self::Disabled,
        }
    }

    /// The literal text persisted for this state.
    pub fn as_stored(self) -> &'static str {
        match self {
            Self::Enabled => STORED_TRUE,
            Self::Disabled => STORED_FALSE,
        }
    }

    pub fn is_enabled(self) -> bool {
        self == Self::Enabled
    }
}

impl From<bool> for ThemeState {
    fn from(enabled: bool) -> Self {
        if enabled { Self::Enabled } else { Self::Disabled }
    }
}
