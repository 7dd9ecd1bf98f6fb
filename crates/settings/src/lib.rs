//! Persisted NoteFold settings: two booleans, JSON on disk, defaults applied
//! for anything missing, unknown keys ignored.
//! NoteFold 的持久化設定：兩個布林值，以 JSON 儲存，缺漏欄位套用預設值。

use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to read settings {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse settings {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("failed to serialize settings {path}: {source}")]
    Serialize {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("failed to write settings {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to prepare directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExplorerSettings {
    #[serde(default = "default_true")]
    pub hide_shadowed_files: bool,
    #[serde(default = "default_true")]
    pub show_status_bar: bool,
}

fn default_true() -> bool {
    true
}

impl Default for ExplorerSettings {
    fn default() -> Self {
        Self {
            hide_shadowed_files: true,
            show_status_bar: true,
        }
    }
}

#[derive(Debug)]
pub struct SettingsStore {
    path: PathBuf,
    data: ExplorerSettings,
}

impl SettingsStore {
    pub fn new(path: impl Into<PathBuf>, settings: ExplorerSettings) -> Self {
        Self {
            path: path.into(),
            data: settings,
        }
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let path = path.as_ref().to_path_buf();
        if !path.exists() {
            return Ok(Self {
                path,
                data: ExplorerSettings::default(),
            });
        }

        let contents = fs::read_to_string(&path).map_err(|source| SettingsError::Read {
            path: path.clone(),
            source,
        })?;
        let data: ExplorerSettings =
            serde_json::from_str(&contents).map_err(|source| SettingsError::Parse {
                path: path.clone(),
                source,
            })?;
        Ok(Self { path, data })
    }

    pub fn settings(&self) -> &ExplorerSettings {
        &self.data
    }

    pub fn update<F>(&mut self, mut op: F) -> Result<(), SettingsError>
    where
        F: FnMut(&mut ExplorerSettings),
    {
        op(&mut self.data);
        self.save()
    }

    pub fn save(&self) -> Result<(), SettingsError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|source| SettingsError::CreateDir {
                path: parent.to_path_buf(),
                source,
            })?;
        }
        let payload = serde_json::to_string_pretty(&self.data).map_err(|source| {
            SettingsError::Serialize {
                path: self.path.clone(),
                source,
            }
        })?;

        let tmp_path = self.path.with_extension("tmp");
        fs::write(&tmp_path, payload.as_bytes()).map_err(|source| SettingsError::Write {
            path: tmp_path.clone(),
            source,
        })?;
        fs::rename(&tmp_path, &self.path).map_err(|source| SettingsError::Write {
            path: self.path.clone(),
            source,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn load_missing_file_yields_defaults() {
        let dir = tempdir().unwrap();
        let store = SettingsStore::load(dir.path().join("settings.json")).unwrap();
        assert_eq!(store.settings(), &ExplorerSettings::default());
        assert!(store.settings().hide_shadowed_files);
        assert!(store.settings().show_status_bar);
    }

    #[test]
    fn update_persists_and_reloads() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("settings.json");

        let mut store = SettingsStore::load(&path).unwrap();
        store
            .update(|settings| settings.hide_shadowed_files = false)
            .unwrap();

        let reloaded = SettingsStore::load(&path).unwrap();
        assert!(!reloaded.settings().hide_shadowed_files);
        assert!(reloaded.settings().show_status_bar);
    }

    #[test]
    fn missing_and_unknown_keys_are_tolerated() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, r#"{"show_status_bar": false, "legacy_key": 3}"#).unwrap();

        let store = SettingsStore::load(&path).unwrap();
        assert!(store.settings().hide_shadowed_files);
        assert!(!store.settings().show_status_bar);
    }
}
