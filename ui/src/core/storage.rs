//! Local persistence for small string values.
//!
//! Views never touch `localStorage` (or the desktop preferences file)
//! directly; they go through [`KeyValueStore`] so state machines can be
//! exercised against [`MemoryStore`] in tests.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;

/// Rendered home page content from the last successful load.
pub const HOME_PAGE_CONTENT_KEY: &str = "home_page_content";
/// Calendar day (`YYYY-MM-DD`) on which the notice was last dismissed.
pub const NOTICE_CLOSE_DATE_KEY: &str = "notice_close_date";
pub const THEME_MODE_KEY: &str = "theme_mode";

pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str) -> Result<(), String>;
}

#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: Rc<RefCell<BTreeMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entry(self, key: &str, value: &str) -> Self {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        self
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), String> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(target_arch = "wasm32")]
pub use web::BrowserStore as PlatformStore;

#[cfg(not(target_arch = "wasm32"))]
pub use native::FileStore as PlatformStore;

/// The store backing the running platform.
pub fn platform_store() -> PlatformStore {
    PlatformStore::open()
}

#[cfg(target_arch = "wasm32")]
mod web {
    use super::KeyValueStore;

    /// `window.localStorage`. Missing storage (private mode, sandboxed
    /// frames) reads as empty and rejects writes.
    #[derive(Debug, Clone, Copy, Default)]
    pub struct BrowserStore;

    impl BrowserStore {
        pub fn open() -> Self {
            Self
        }

        fn storage() -> Option<web_sys::Storage> {
            web_sys::window()?.local_storage().ok()?
        }
    }

    impl KeyValueStore for BrowserStore {
        fn get(&self, key: &str) -> Option<String> {
            Self::storage()?.get_item(key).ok()?
        }

        fn set(&self, key: &str, value: &str) -> Result<(), String> {
            let storage = Self::storage().ok_or("localStorage unavailable")?;
            storage
                .set_item(key, value)
                .map_err(|_| format!("Unable to write `{key}` to localStorage"))
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
mod native {
    use std::cell::RefCell;
    use std::collections::BTreeMap;
    use std::fs;
    use std::path::PathBuf;
    use std::rc::Rc;

    use tracing::warn;

    use super::KeyValueStore;

    const PREFERENCES_FILE: &str = "preferences.json";

    /// JSON object persisted under the platform data directory. Values are
    /// cached in memory and the whole file is rewritten on every `set`.
    #[derive(Debug, Clone)]
    pub struct FileStore {
        path: Option<PathBuf>,
        entries: Rc<RefCell<BTreeMap<String, String>>>,
    }

    impl FileStore {
        pub fn open() -> Self {
            let path = directories::ProjectDirs::from("com", "GatewayConsole", "GatewayConsole")
                .map(|dirs| dirs.data_dir().join(PREFERENCES_FILE));
            if path.is_none() {
                warn!("No data directory available; preferences will not persist");
            }
            Self::load(path)
        }

        pub fn at(path: impl Into<PathBuf>) -> Self {
            Self::load(Some(path.into()))
        }

        fn load(path: Option<PathBuf>) -> Self {
            let entries = path
                .as_ref()
                .and_then(|path| fs::read_to_string(path).ok())
                .and_then(|raw| match serde_json::from_str(&raw) {
                    Ok(entries) => Some(entries),
                    Err(err) => {
                        warn!("Ignoring unreadable preferences file: {err}");
                        None
                    }
                })
                .unwrap_or_default();
            Self {
                path,
                entries: Rc::new(RefCell::new(entries)),
            }
        }

        fn flush(&self) -> Result<(), String> {
            let Some(path) = self.path.as_ref() else {
                return Ok(());
            };
            if let Some(dir) = path.parent() {
                fs::create_dir_all(dir).map_err(|err| err.to_string())?;
            }
            let raw =
                serde_json::to_string_pretty(&*self.entries.borrow()).map_err(|err| err.to_string())?;
            fs::write(path, raw).map_err(|err| err.to_string())
        }
    }

    impl KeyValueStore for FileStore {
        fn get(&self, key: &str) -> Option<String> {
            self.entries.borrow().get(key).cloned()
        }

        fn set(&self, key: &str, value: &str) -> Result<(), String> {
            self.entries
                .borrow_mut()
                .insert(key.to_string(), value.to_string());
            self.flush()
        }
    }
}
