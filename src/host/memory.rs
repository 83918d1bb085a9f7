//! In-memory page collaborators.
//!
//! Handles are cheap `Rc` clones over shared state, so a test can keep one
//! handle for assertions while the toggle owns another, and a "reload" is a
//! second toggle built over a clone of the same store.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

use super::{PreferenceStore, ThemeDocument};
use crate::error::DarkModeError;

#[cfg(test)]
#[path = "memory_test.rs"]
mod memory_test;

type ReadyCallback = Box<dyn FnOnce()>;

/// `localStorage` stand-in.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    entries: Rc<RefCell<HashMap<String, String>>>,
    unavailable: bool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-seeded with one entry, as if written on an earlier visit.
    pub fn with_entry(key: &str, value: &str) -> Self {
        let store = Self::new();
        store.entries.borrow_mut().insert(key.to_owned(), value.to_owned());
        store
    }

    /// Store whose every access fails, like storage disabled by the browser.
    pub fn unavailable() -> Self {
        Self { entries: Rc::default(), unavailable: true }
    }

    /// Raw entry for assertions, bypassing availability.
    pub fn entry(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, DarkModeError> {
        if self.unavailable {
            return Err(DarkModeError::StorageUnavailable);
        }
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), DarkModeError> {
        if self.unavailable {
            return Err(DarkModeError::StorageUnavailable);
        }
        self.entries.borrow_mut().insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}

#[derive(Default)]
struct DocumentState {
    /// Class list of the marker target; `None` until the element is parsed.
    root: RefCell<Option<Vec<String>>>,
    ready: Cell<bool>,
    pending: RefCell<Vec<ReadyCallback>>,
}

/// Document stand-in with a controllable parse lifecycle.
#[derive(Clone, Default)]
pub struct MemoryDocument {
    state: Rc<DocumentState>,
}

impl MemoryDocument {
    /// Document still parsing its head: no target element, not ready.
    pub fn new() -> Self {
        Self::default()
    }

    /// Target element already parsed, ready event still pending.
    pub fn with_root() -> Self {
        let doc = Self::new();
        doc.attach_root();
        doc
    }

    /// Fully parsed document: target present, ready already fired.
    pub fn parsed() -> Self {
        let doc = Self::with_root();
        doc.state.ready.set(true);
        doc
    }

    /// Parser reached the target element.
    pub fn attach_root(&self) {
        let mut root = self.state.root.borrow_mut();
        if root.is_none() {
            *root = Some(Vec::new());
        }
    }

    /// Parsing finished: attach the target if needed and run each pending
    /// ready callback once. Later calls find nothing pending.
    pub fn fire_ready(&self) {
        self.attach_root();
        self.state.ready.set(true);
        let callbacks = std::mem::take(&mut *self.state.pending.borrow_mut());
        for callback in callbacks {
            callback();
        }
    }

    pub fn is_ready(&self) -> bool {
        self.state.ready.get()
    }

    pub fn pending_ready_callbacks(&self) -> usize {
        self.state.pending.borrow().len()
    }

    /// Target class list, empty when the target is missing.
    pub fn classes(&self) -> Vec<String> {
        self.state.root.borrow().clone().unwrap_or_default()
    }
}

impl ThemeDocument for MemoryDocument {
    fn root_available(&self) -> bool {
        self.state.root.borrow().is_some()
    }

    fn has_marker(&self, class: &str) -> bool {
        self.state
            .root
            .borrow()
            .as_ref()
            .is_some_and(|classes| classes.iter().any(|c| c == class))
    }

    fn add_marker(&self, class: &str) -> Result<(), DarkModeError> {
        let mut root = self.state.root.borrow_mut();
        let classes = root.as_mut().ok_or(DarkModeError::MissingRoot)?;
        if !classes.iter().any(|c| c == class) {
            classes.push(class.to_owned());
        }
        Ok(())
    }

    fn toggle_marker(&self, class: &str) -> Result<bool, DarkModeError> {
        let mut root = self.state.root.borrow_mut();
        let classes = root.as_mut().ok_or(DarkModeError::MissingRoot)?;
        if let Some(idx) = classes.iter().position(|c| c == class) {
            classes.remove(idx);
            Ok(false)
        } else {
            classes.push(class.to_owned());
            Ok(true)
        }
    }

    fn on_ready(&self, callback: Box<dyn FnOnce()>) -> Result<(), DarkModeError> {
        if self.state.ready.get() {
            callback();
        } else {
            self.state.pending.borrow_mut().push(callback);
        }
        Ok(())
    }
}
