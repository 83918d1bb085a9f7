//! # darkmode-toggle
//!
//! Persisted dark mode toggle for server-rendered pages, compiled to WASM.
//!
//! On module start the stored preference is read from `localStorage`, the
//! `dark-mode` class is applied to `<body>` when enabled, and a global
//! `toggleDarkMode()` is exported for buttons elsewhere on the page.
//!
//! SYSTEM CONTEXT
//! ==============
//! Browser globals are reached only through the [`host`] traits, so the
//! [`toggle`] logic runs natively in tests against the in-memory fakes and
//! in the browser against `web-sys` under the `hydrate` feature.

pub mod components;
pub mod config;
pub mod error;
pub mod host;
pub mod preference;
pub mod runtime;
pub mod toggle;

pub use config::DarkModeConfig;
pub use error::DarkModeError;
pub use preference::ThemeState;
pub use toggle::{PreferenceToggle, ThemeSwitch};
