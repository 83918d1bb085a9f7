//! Collaborator seams between the toggle logic and the page.
//!
//! SYSTEM CONTEXT
//! ==============
//! A script would reach straight for `localStorage` and `document.body`.
//! Here both are traits: [`browser`] binds them to `web-sys` under the
//! `hydrate` feature, and [`memory`] provides fakes that tests and SSR
//! builds drive directly.

#[cfg(feature = "hydrate")]
pub mod browser;
pub mod memory;

use crate::error::DarkModeError;

/// Synchronous string key-value store that survives reloads.
pub trait PreferenceStore {
    /// Read the entry for `key`; `Ok(None)` when it was never written.
    fn get(&self, key: &str) -> Result<Option<String>, DarkModeError>;

    /// Write `value` under `key`, replacing any previous entry.
    fn set(&self, key: &str, value: &str) -> Result<(), DarkModeError>;
}

/// The marker target element and the document's structural-ready hook.
pub trait ThemeDocument {
    /// Whether the marker target element exists yet.
    fn root_available(&self) -> bool;

    /// Whether the target currently carries `class`. `false` without a target.
    fn has_marker(&self, class: &str) -> bool;

    /// Attach `class` to the target. Adding a present class is a no-op.
    fn add_marker(&self, class: &str) -> Result<(), DarkModeError>;

    /// Flip `class` on the target and return whether it is now present.
    fn toggle_marker(&self, class: &str) -> Result<bool, DarkModeError>;

    /// Run `callback` once the document's markup has finished parsing.
    fn on_ready(&self, callback: Box<dyn FnOnce()>) -> Result<(), DarkModeError>;
}
