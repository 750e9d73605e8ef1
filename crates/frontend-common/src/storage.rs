//! Durable key/value storage backends

use gloo::events::EventListener;
use std::any::Any;
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;
use wasm_bindgen::JsCast;

/// Callback receiving the new value of a key written elsewhere
pub type ExternalChange = Rc<dyn Fn(Option<String>)>;

/// Keeps an external-change subscription alive; dropping it stops delivery
pub struct ExternalWatch {
    _guard: Box<dyn Any>,
}

impl ExternalWatch {
    pub fn new(guard: impl Any) -> Self {
        Self {
            _guard: Box::new(guard),
        }
    }
}

/// String key/value storage that survives page reloads
pub trait KeyValueStorage {
    /// Read a value, `None` when absent or unreadable
    fn get(&self, key: &str) -> Option<String>;

    /// Write a value
    fn set(&self, key: &str, value: &str);

    /// Delete a value
    fn remove(&self, key: &str);

    /// Observe writes to `key` made outside this process, such as another tab
    ///
    /// Backends without a shared medium return `None`.
    fn watch_external(
        &self,
        _key: &'static str,
        _on_change: ExternalChange,
    ) -> Option<ExternalWatch> {
        None
    }
}

/// Browser `localStorage`, values stored raw
#[derive(Clone, Debug, Default)]
pub struct BrowserStorage;

impl BrowserStorage {
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window().and_then(|w| w.local_storage().ok().flatten())
    }

    /// Whether `localStorage` is reachable in this context
    pub fn is_available() -> bool {
        Self::storage().is_some()
    }
}

impl KeyValueStorage for BrowserStorage {
    fn get(&self, key: &str) -> Option<String> {
        let storage = Self::storage()?;
        match storage.get_item(key) {
            Ok(value) => value,
            Err(e) => {
                tracing::warn!(key, error = ?e, "failed to read from localStorage");
                None
            }
        }
    }

    fn set(&self, key: &str, value: &str) {
        let Some(storage) = Self::storage() else {
            tracing::warn!(key, "localStorage unavailable, value not persisted");
            return;
        };
        if let Err(e) = storage.set_item(key, value) {
            tracing::warn!(key, error = ?e, "failed to write to localStorage");
        }
    }

    fn remove(&self, key: &str) {
        if let Some(storage) = Self::storage()
            && let Err(e) = storage.remove_item(key)
        {
            tracing::warn!(key, error = ?e, "failed to remove from localStorage");
        }
    }

    /// Listens for the window `storage` event, fired when another document
    /// of the same origin changes `localStorage`
    fn watch_external(
        &self,
        key: &'static str,
        on_change: ExternalChange,
    ) -> Option<ExternalWatch> {
        let window = web_sys::window()?;
        let listener = EventListener::new(&window, "storage", move |event| {
            let Some(event) = event.dyn_ref::<web_sys::StorageEvent>() else {
                return;
            };
            match event.key() {
                Some(changed) if changed == key => {
                    tracing::debug!(key, "storage key changed in another tab");
                    on_change(event.new_value());
                }
                // A null key means the whole storage area was cleared
                None => on_change(None),
                Some(_) => {}
            }
        });
        Some(ExternalWatch::new(listener))
    }
}

/// In-memory storage for tests and non-browser targets
#[derive(Clone, Debug, Default)]
pub struct MemoryStorage {
    entries: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored keys
    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

impl KeyValueStorage for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
    }

    fn remove(&self, key: &str) {
        self.entries.borrow_mut().remove(key);
    }
}

/// Storage used by the application: `localStorage` in the browser, memory elsewhere
pub fn default_storage() -> Rc<dyn KeyValueStorage> {
    if cfg!(target_arch = "wasm32") && BrowserStorage::is_available() {
        Rc::new(BrowserStorage)
    } else {
        tracing::debug!("localStorage unavailable, using in-memory token storage");
        Rc::new(MemoryStorage::new())
    }
}
