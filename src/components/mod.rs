//! Leptos components bound to the page-wide toggle.

pub mod dark_mode_toggle;
