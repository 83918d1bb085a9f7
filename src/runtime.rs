//! Page-wide toggle instance and the WASM entry points.
//!
//! SYSTEM CONTEXT
//! ==============
//! The module start hook plays the part of an inline script: it runs while
//! the page is still parsing, restores the stored preference, and installs
//! the running toggle here. `toggleDarkMode()` and the
//! [`DarkModeToggle`](crate::components::dark_mode_toggle::DarkModeToggle)
//! button both reach it through [`toggle`]. Every change is pushed to the
//! listeners registered with [`subscribe`]. Without `hydrate` nothing is
//! installed automatically and every call is a quiet no-op.

use std::cell::RefCell;
use std::rc::Rc;

use crate::preference::ThemeState;
use crate::toggle::ThemeSwitch;

#[cfg(test)]
#[path = "runtime_test.rs"]
mod runtime_test;

/// Change listener; returning `false` unsubscribes it.
type Listener = Box<dyn Fn(ThemeState) -> bool>;

thread_local! {
    static ACTIVE: RefCell<Option<Rc<dyn ThemeSwitch>>> = const { RefCell::new(None) };
    static LISTENERS: RefCell<Vec<Listener>> = const { RefCell::new(Vec::new()) };
}

/// Make `switch` the page's toggle, replacing any previous one.
pub fn install(switch: Rc<dyn ThemeSwitch>) {
    let state = switch.state();
    ACTIVE.with(|active| *active.borrow_mut() = Some(switch));
    notify(state);
}

fn active() -> Option<Rc<dyn ThemeSwitch>> {
    ACTIVE.with(|active| active.borrow().clone())
}

/// State of the installed toggle; `Disabled` when none is installed.
pub fn current() -> ThemeState {
    active().map_or(ThemeState::Disabled, |switch| switch.state())
}

/// Flip the installed toggle. `None` when nothing is installed or the
/// marker could not be flipped; failures are logged, never raised.
pub fn toggle() -> Option<ThemeState> {
    let Some(switch) = active() else {
        log::debug!("dark mode: toggle requested before startup");
        return None;
    };
    match switch.toggle() {
        Ok(state) => {
            notify(state);
            Some(state)
        }
        Err(e) => {
            log::warn!("dark mode: toggle failed: {e}");
            None
        }
    }
}

/// Call `listener` with the new state after every install and toggle, until
/// it returns `false`.
pub fn subscribe(listener: impl Fn(ThemeState) -> bool + 'static) {
    LISTENERS.with(|listeners| listeners.borrow_mut().push(Box::new(listener)));
}

fn notify(state: ThemeState) {
    // Taken out first so a listener may subscribe without a double borrow.
    let listeners = LISTENERS.with(|listeners| std::mem::take(&mut *listeners.borrow_mut()));
    let kept: Vec<Listener> = listeners.into_iter().filter(|listener| listener(state)).collect();
    LISTENERS.with(|listeners| {
        let mut current = listeners.borrow_mut();
        let added = std::mem::replace(&mut *current, kept);
        current.extend(added);
    });
}

#[cfg(test)]
pub(crate) fn listener_count() -> usize {
    LISTENERS.with(|listeners| listeners.borrow().len())
}

#[cfg(feature = "hydrate")]
mod entry {
    use wasm_bindgen::prelude::*;

    use crate::config::DarkModeConfig;
    use crate::error::DarkModeError;
    use crate::host::browser::{BrowserDocument, BrowserStore, embedded_config_text};
    use crate::toggle::PreferenceToggle;

    /// Module start: restore the stored preference before first paint.
    #[wasm_bindgen(start)]
    pub fn start() {
        console_error_panic_hook::set_once();
        if console_log::init_with_level(log::Level::Info).is_err() {
            log::debug!("dark mode: console logger already installed");
        }
        if let Err(e) = start_browser() {
            log::warn!("dark mode: startup failed: {e}");
        }
    }

    fn start_browser() -> Result<(), DarkModeError> {
        let config = DarkModeConfig::from_embedded(embedded_config_text().as_deref());
        let document = BrowserDocument::from_window(config.target)?;
        let toggle = PreferenceToggle::start(config, BrowserStore::from_window(), document);
        super::install(toggle);
        Ok(())
    }

    /// Global `toggleDarkMode()` for buttons rendered outside this module.
    #[wasm_bindgen(js_name = toggleDarkMode)]
    pub fn toggle_dark_mode() {
        super::toggle();
    }

    /// Global `isDarkMode()`.
    #[wasm_bindgen(js_name = isDarkMode)]
    pub fn is_dark_mode() -> bool {
        super::current().is_enabled()
    }
}
