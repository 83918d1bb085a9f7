//! `web-sys` bindings for the page collaborators. Requires a browser.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{AddEventListenerOptions, Document, Element, Storage};

use super::{PreferenceStore, ThemeDocument};
use crate::config::{CONFIG_ELEMENT_ID, MarkerTarget};
use crate::error::DarkModeError;

fn js_error(e: JsValue) -> String {
    format!("{e:?}")
}

/// Text of the embedded `<script id="dark-mode-config">` element, if any.
pub fn embedded_config_text() -> Option<String> {
    web_sys::window()
        .and_then(|w| w.document())
        .and_then(|doc| doc.get_element_by_id(CONFIG_ELEMENT_ID))
        .and_then(|el| el.text_content())
}

/// `window.localStorage`.
pub struct BrowserStore {
    storage: Option<Storage>,
}

impl BrowserStore {
    /// Bind to the window's storage. A denied or missing storage is kept as
    /// `None` so reads fall back to disabled and writes fail quietly.
    pub fn from_window() -> Self {
        let storage = match web_sys::window().map(|w| w.local_storage()) {
            Some(Ok(storage)) => storage,
            Some(Err(e)) => {
                log::warn!("localStorage access denied: {}", js_error(e));
                None
            }
            None => None,
        };
        Self { storage }
    }

    fn storage(&self) -> Result<&Storage, DarkModeError> {
        self.storage.as_ref().ok_or(DarkModeError::StorageUnavailable)
    }
}

impl PreferenceStore for BrowserStore {
    fn get(&self, key: &str) -> Result<Option<String>, DarkModeError> {
        self.storage()?
            .get_item(key)
            .map_err(|e| DarkModeError::Storage(js_error(e)))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), DarkModeError> {
        self.storage()?
            .set_item(key, value)
            .map_err(|e| DarkModeError::Storage(js_error(e)))
    }
}

/// `window.document`, with the marker on `<body>` or `<html>`.
pub struct BrowserDocument {
    document: Document,
    target: MarkerTarget,
}

impl BrowserDocument {
    pub fn from_window(target: MarkerTarget) -> Result<Self, DarkModeError> {
        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or_else(|| DarkModeError::Dom("no document on window".into()))?;
        Ok(Self { document, target })
    }

    fn root(&self) -> Option<Element> {
        match self.target {
            MarkerTarget::Body => self.document.body().map(Element::from),
            MarkerTarget::Html => self.document.document_element(),
        }
    }
}

impl ThemeDocument for BrowserDocument {
    fn root_available(&self) -> bool {
        self.root().is_some()
    }

    fn has_marker(&self, class: &str) -> bool {
        self.root().is_some_and(|el| el.class_list().contains(class))
    }

    fn add_marker(&self, class: &str) -> Result<(), DarkModeError> {
        let root = self.root().ok_or(DarkModeError::MissingRoot)?;
        root.class_list()
            .add_1(class)
            .map_err(|e| DarkModeError::Dom(js_error(e)))
    }

    fn toggle_marker(&self, class: &str) -> Result<bool, DarkModeError> {
        let root = self.root().ok_or(DarkModeError::MissingRoot)?;
        root.class_list()
            .toggle(class)
            .map_err(|e| DarkModeError::Dom(js_error(e)))
    }

    fn on_ready(&self, callback: Box<dyn FnOnce()>) -> Result<(), DarkModeError> {
        // DOMContentLoaded has already fired once parsing is past `loading`.
        if self.document.ready_state() != "loading" {
            callback();
            return Ok(());
        }
        let listener = Closure::once_into_js(move || callback());
        let options = AddEventListenerOptions::new();
        options.set_once(true);
        self.document
            .add_event_listener_with_callback_and_add_event_listener_options(
                "DOMContentLoaded",
                listener.unchecked_ref(),
                &options,
            )
            .map_err(|e| DarkModeError::Dom(js_error(e)))
    }
}
