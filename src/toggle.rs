//! Preference toggle: restore on load, confirm on ready, flip on demand.
//!
//! DESIGN
//! ======
//! The preference is read from storage exactly once, at initialize. When it
//! is enabled the marker goes on immediately if the target element already
//! exists (so the first paint is themed), and again when the document
//! reports structural ready, using the captured value. A toggle flips the
//! marker first and persists whatever the marker ended up as, so the stored
//! value always follows the page.
//!
//! TRADE-OFFS
//! ==========
//! Storage failures never surface to the page. A read failure degrades to
//! disabled; a write failure is logged and the on-screen flip stands.

use std::rc::Rc;

use crate::config::DarkModeConfig;
use crate::error::DarkModeError;
use crate::host::{PreferenceStore, ThemeDocument};
use crate::preference::ThemeState;

#[cfg(test)]
#[path = "toggle_test.rs"]
mod toggle_test;

/// Object-safe view of a running toggle, used by the page-wide runtime.
pub trait ThemeSwitch {
    fn state(&self) -> ThemeState;
    fn toggle(&self) -> Result<ThemeState, DarkModeError>;
}

pub struct PreferenceToggle<S, D> {
    config: DarkModeConfig,
    store: S,
    document: D,
    initial: ThemeState,
}

impl<S: PreferenceStore, D: ThemeDocument> PreferenceToggle<S, D> {
    /// Read the stored preference and apply it early if the target exists.
    pub fn initialize(config: DarkModeConfig, store: S, document: D) -> Self {
        let initial = match store.get(&config.storage_key) {
            Ok(raw) => ThemeState::from_stored(raw.as_deref()),
            Err(e) => {
                log::warn!("dark mode: reading preference failed: {e}");
                ThemeState::Disabled
            }
        };
        let toggle = Self { config, store, document, initial };
        if initial.is_enabled() && toggle.document.root_available() {
            toggle.apply_marker();
        }
        log::debug!("dark mode: initialized {initial:?}");
        toggle
    }

    /// Preference captured at initialize.
    pub fn initial_state(&self) -> ThemeState {
        self.initial
    }

    /// Structural-ready handler: re-apply the captured preference.
    ///
    /// Uses the value read at initialize, never storage. Safe to call more
    /// than once.
    pub fn confirm_on_ready(&self) {
        if self.initial.is_enabled() {
            self.apply_marker();
        }
    }

    /// Current state: marker presence once the target exists, the captured
    /// preference before that.
    pub fn state(&self) -> ThemeState {
        if self.document.root_available() {
            ThemeState::from(self.document.has_marker(&self.config.marker_class))
        } else {
            self.initial
        }
    }

    /// Flip the marker and persist the resulting state.
    pub fn toggle(&self) -> Result<ThemeState, DarkModeError> {
        let state = ThemeState::from(self.document.toggle_marker(&self.config.marker_class)?);
        if let Err(e) = self.store.set(&self.config.storage_key, state.as_stored()) {
            log::warn!("dark mode: persisting {state:?} failed: {e}");
        }
        log::debug!("dark mode: toggled to {state:?}");
        Ok(state)
    }

    fn apply_marker(&self) {
        if let Err(e) = self.document.add_marker(&self.config.marker_class) {
            log::warn!("dark mode: applying marker failed: {e}");
        }
    }
}

impl<S: PreferenceStore + 'static, D: ThemeDocument + 'static> PreferenceToggle<S, D> {
    /// Initialize, then hook [`Self::confirm_on_ready`] to the document's
    /// structural-ready notification.
    pub fn start(config: DarkModeConfig, store: S, document: D) -> Rc<Self> {
        let toggle = Rc::new(Self::initialize(config, store, document));
        let handle = Rc::downgrade(&toggle);
        let confirm = Box::new(move || {
            if let Some(toggle) = handle.upgrade() {
                toggle.confirm_on_ready();
            }
        });
        if let Err(e) = toggle.document.on_ready(confirm) {
            log::warn!("dark mode: registering ready handler failed: {e}");
        }
        toggle
    }
}

impl<S: PreferenceStore, D: ThemeDocument> ThemeSwitch for PreferenceToggle<S, D> {
    fn state(&self) -> ThemeState {
        PreferenceToggle::state(self)
    }

    fn toggle(&self) -> Result<ThemeState, DarkModeError> {
        PreferenceToggle::toggle(self)
    }
}
