use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::PathBuf;
use thiserror::Error;
use tracing::debug;

pub const KEY_KEYBOARD_COUNTRY: &str = "Keyboard-country-human";
pub const KEY_KEYBOARD_LAYOUT: &str = "Keyboard-layout";
pub const KEY_MOUSE: &str = "Mouse";
pub const KEY_AUDIO: &str = "Audio";
pub const KEY_OVERCLOCKING: &str = "Overclocking";
pub const KEY_WALLPAPER: &str = "Wallpaper";
pub const KEY_FONT: &str = "Font";
pub const KEY_DEBUG_MODE: &str = "Debug-mode";

const DEFAULTS: &[(&str, &str)] = &[
    (KEY_KEYBOARD_COUNTRY, "United States"),
    (KEY_KEYBOARD_LAYOUT, "us"),
    (KEY_MOUSE, "Normal"),
    (KEY_AUDIO, "Analogue"),
    (KEY_OVERCLOCKING, "High"),
    (KEY_WALLPAPER, "kanux-background"),
    (KEY_FONT, "Normal"),
    (KEY_DEBUG_MODE, "Off"),
];

pub fn default_setting(key: &str) -> &'static str {
    DEFAULTS
        .iter()
        .find_map(|(name, value)| (*name == key).then_some(*value))
        .unwrap_or("")
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to access settings at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("settings at {path} are not valid JSON: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Debug, Default, Clone, Serialize, Deserialize)]
#[serde(transparent)]
struct StoreFile(BTreeMap<String, Value>);

/// Persisted key/value settings. Every write goes straight to disk.
#[derive(Debug, Default)]
pub struct SettingsStore {
    path: Option<PathBuf>,
    values: StoreFile,
}

impl SettingsStore {
    pub fn load(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();
        let values = match fs::read_to_string(&path) {
            Ok(raw) if raw.trim().is_empty() => StoreFile::default(),
            Ok(raw) => serde_json::from_str(&raw).map_err(|source| StoreError::Parse {
                path: path.clone(),
                source,
            })?,
            Err(error) if error.kind() == io::ErrorKind::NotFound => StoreFile::default(),
            Err(source) => return Err(StoreError::Io { path, source }),
        };
        debug!(path = %path.display(), keys = values.0.len(), "settings loaded");
        Ok(Self {
            path: Some(path),
            values,
        })
    }

    #[cfg(test)]
    pub fn in_memory() -> Self {
        Self::default()
    }

    #[cfg(test)]
    pub fn path(&self) -> Option<&std::path::Path> {
        self.path.as_deref()
    }

    /// Stored value for `key`, falling back to the built-in default.
    pub fn get(&self, key: &str) -> String {
        match self.values.0.get(key) {
            Some(Value::String(value)) => value.clone(),
            Some(Value::Null) | None => default_setting(key).to_string(),
            Some(other) => other.to_string(),
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.values
            .0
            .insert(key.to_string(), Value::String(value.to_string()));
        self.save()
    }

    fn save(&self) -> Result<(), StoreError> {
        let Some(path) = self.path.as_ref() else {
            return Ok(());
        };
        let io_error = |source| StoreError::Io {
            path: path.clone(),
            source,
        };
        if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(io_error)?;
        }
        let raw = serde_json::to_string_pretty(&self.values).map_err(|source| {
            StoreError::Parse {
                path: path.clone(),
                source,
            }
        })?;
        fs::write(path, raw + "\n").map_err(io_error)
    }
}
