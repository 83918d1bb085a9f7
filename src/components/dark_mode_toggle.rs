//! Toolbar button that flips dark mode.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pages that mount Leptos views get a ready-made control; plain pages call
//! the exported `toggleDarkMode()` from their own markup instead. Both go
//! through the same installed toggle, and the button follows the runtime's
//! change notifications, so a flip from either side shows up on both.
//!
//! TRADE-OFFS
//! ==========
//! The server has no stored preference, so it always renders the disabled
//! glyph. The client starts from the same value and binds to the runtime
//! after mount, which keeps hydration consistent at the cost of one repaint
//! for users with dark mode enabled.

use leptos::prelude::*;

use crate::preference::ThemeState;
use crate::runtime;

#[cfg(test)]
#[path = "dark_mode_toggle_test.rs"]
mod dark_mode_toggle_test;

pub const TOGGLE_TITLE: &str = "Toggle dark mode";

/// Glyph for the action the button performs next.
pub fn toggle_label(state: ThemeState) -> &'static str {
    if state.is_enabled() { "☀" } else { "☾" }
}

/// Sync `state` with the runtime now and on every later change. The
/// subscription ends once the signal is disposed.
pub fn bind_to_runtime(state: RwSignal<ThemeState>) {
    state.set(runtime::current());
    runtime::subscribe(move |next| state.try_set(next).is_none());
}

/// Click handler body. The label updates through the runtime subscription.
pub fn on_toggle_click() {
    if runtime::toggle().is_none() {
        log::debug!("dark mode: button click had no effect");
    }
}

/// Dark mode toggle button.
#[component]
pub fn DarkModeToggle() -> impl IntoView {
    let state = RwSignal::new(ThemeState::default());

    // Effects only run in the browser, after hydration.
    Effect::new(move |_| bind_to_runtime(state));

    view! {
        <button
            class="btn toolbar__dark-toggle"
            on:click=move |_| on_toggle_click()
            title=TOGGLE_TITLE
            aria-pressed=move || if state.get().is_enabled() { "true" } else { "false" }
        >
            {move || toggle_label(state.get())}
        </button>
    }
}
