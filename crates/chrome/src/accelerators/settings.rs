//! Accelerator settings store
//!
//! Owns the persisted accelerator overrides (accelerators.json in the
//! Beacon config directory) and hands out immutable snapshots plus
//! change payloads for the menu lifecycle.

use anyhow::Result;
use log::warn;
use std::path::{Path, PathBuf};

use super::AcceleratorMap;

/// Settings filename in the Beacon config directory
const ACCELERATORS_FILE: &str = "accelerators.json";

/// Payload emitted when the accelerator map is replaced
#[derive(Debug, Clone)]
pub struct AcceleratorChange {
    pub previous: AcceleratorMap,
    pub next: AcceleratorMap,
}

/// Store for user accelerator overrides.
///
/// Loading never fails: a missing file yields the factory map, and a
/// malformed file is logged and ignored so the menu always has a usable
/// snapshot to render from.
pub struct AcceleratorSettings {
    current: AcceleratorMap,
    path: Option<PathBuf>,
}

impl AcceleratorSettings {
    /// Load from the default config location
    pub fn load() -> Self {
        match config::config_path(ACCELERATORS_FILE) {
            Some(path) => Self::load_from(&path),
            None => {
                warn!("Could not determine config directory; accelerator overrides will not persist");
                Self {
                    current: AcceleratorMap::default(),
                    path: None,
                }
            }
        }
    }

    /// Load from an explicit path (missing file yields the factory map)
    pub fn load_from(path: &Path) -> Self {
        let current = if path.exists() {
            match config::load_json_file(path) {
                Ok(map) => map,
                Err(e) => {
                    warn!(
                        "Ignoring malformed accelerator settings at {}: {:#}",
                        path.display(),
                        e
                    );
                    AcceleratorMap::default()
                }
            }
        } else {
            AcceleratorMap::default()
        };
        Self {
            current,
            path: Some(path.to_path_buf()),
        }
    }

    /// The current snapshot
    pub fn current(&self) -> &AcceleratorMap {
        &self.current
    }

    /// Replace the whole map, persist it, and return the change payload
    pub fn replace(&mut self, next: AcceleratorMap) -> Result<AcceleratorChange> {
        let previous = std::mem::replace(&mut self.current, next.clone());
        if let Some(path) = &self.path {
            config::save_json_file(path, &self.current)?;
        }
        Ok(AcceleratorChange { previous, next })
    }

    /// Override one action's keystroke
    pub fn set_override(
        &mut self,
        action: impl Into<String>,
        accelerator: impl Into<String>,
    ) -> Result<AcceleratorChange> {
        let next = self.current.clone().with_override(action, accelerator);
        self.replace(next)
    }

    /// Drop one action's override, restoring the factory default
    pub fn reset(&mut self, action: &str) -> Result<AcceleratorChange> {
        let next = self.current.clone().reset(action);
        self.replace(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::accelerators::actions;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_yields_factory_map() {
        let dir = TempDir::new().unwrap();
        let settings = AcceleratorSettings::load_from(&dir.path().join("accelerators.json"));
        assert!(settings.current().is_default(actions::ZOOM_IN));
    }

    #[test]
    fn test_malformed_file_yields_factory_map() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("accelerators.json");
        std::fs::write(&path, "{ nope").unwrap();

        let settings = AcceleratorSettings::load_from(&path);
        assert!(settings.current().is_default(actions::ZOOM_IN));
    }

    #[test]
    fn test_replace_persists_and_reports_change() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("accelerators.json");

        let mut settings = AcceleratorSettings::load_from(&path);
        let change = settings
            .set_override(actions::ZOOM_IN, "Ctrl+Shift+Z")
            .unwrap();

        assert_eq!(change.previous.get(actions::ZOOM_IN), Some("CmdOrCtrl+Plus"));
        assert_eq!(change.next.get(actions::ZOOM_IN), Some("Ctrl+Shift+Z"));

        // The override round-trips through the file
        let reloaded = AcceleratorSettings::load_from(&path);
        assert_eq!(reloaded.current().get(actions::ZOOM_IN), Some("Ctrl+Shift+Z"));

        // And the persisted format is the plain overrides object
        let raw: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(raw["overrides"]["zoom_in"], "Ctrl+Shift+Z");
    }

    #[test]
    fn test_reset_round_trip() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("accelerators.json");

        let mut settings = AcceleratorSettings::load_from(&path);
        settings.set_override(actions::RELOAD, "F5").unwrap();
        settings.reset(actions::RELOAD).unwrap();

        let reloaded = AcceleratorSettings::load_from(&path);
        assert!(reloaded.current().is_default(actions::RELOAD));
    }
}
