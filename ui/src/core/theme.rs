//! Light/dark theme preference.

use std::fmt;
use std::str::FromStr;

use super::storage::{KeyValueStore, THEME_MODE_KEY};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    /// Wire name, also posted to embedded home page frames.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        self == Self::Dark
    }

    /// Stored preference, or light when absent/unrecognised.
    pub fn load(store: &impl KeyValueStore) -> Self {
        store
            .get(THEME_MODE_KEY)
            .and_then(|raw| raw.parse().ok())
            .unwrap_or_default()
    }

    pub fn save(self, store: &impl KeyValueStore) -> Result<(), String> {
        store.set(THEME_MODE_KEY, self.as_str())
    }
}

impl FromStr for ThemeMode {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim() {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            other => Err(format!("unknown theme mode `{other}`")),
        }
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
