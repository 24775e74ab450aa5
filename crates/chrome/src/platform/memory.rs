//! In-memory menu platform
//!
//! Used for tests and as a stub before a native backend is wired in.
//! The shortcut registry is strict: double registration and unknown
//! unregistration are errors, so a non-idempotent caller fails loudly
//! instead of corrupting state silently.

use anyhow::{Result, bail};
use std::collections::HashSet;
use std::sync::RwLock;
use std::sync::atomic::{AtomicU64, Ordering};

use super::{MenuHandle, MenuPlatform};
use crate::menu::MenuTree;

pub struct InMemoryMenuPlatform {
    next_handle: AtomicU64,
    installs: AtomicU64,
    /// Handles built but not yet destroyed, in installation order
    live: RwLock<Vec<MenuHandle>>,
    /// The handle currently serving as the application menu
    installed: RwLock<Option<MenuHandle>>,
    shortcuts: RwLock<HashSet<String>>,
}

impl InMemoryMenuPlatform {
    pub fn new() -> Self {
        Self {
            next_handle: AtomicU64::new(1),
            installs: AtomicU64::new(0),
            live: RwLock::new(Vec::new()),
            installed: RwLock::new(None),
            shortcuts: RwLock::new(HashSet::new()),
        }
    }

    /// Handles installed but not yet destroyed
    pub fn live_handles(&self) -> Vec<MenuHandle> {
        self.live.read().unwrap().clone()
    }

    /// The currently installed application menu, if any
    pub fn installed_menu(&self) -> Option<MenuHandle> {
        *self.installed.read().unwrap()
    }

    /// Total number of installs performed
    pub fn install_count(&self) -> u64 {
        self.installs.load(Ordering::SeqCst)
    }

    /// Currently registered global shortcuts
    pub fn registered_shortcuts(&self) -> Vec<String> {
        let mut shortcuts: Vec<String> = self.shortcuts.read().unwrap().iter().cloned().collect();
        shortcuts.sort();
        shortcuts
    }
}

impl Default for InMemoryMenuPlatform {
    fn default() -> Self {
        Self::new()
    }
}

impl MenuPlatform for InMemoryMenuPlatform {
    fn install(&self, _tree: &MenuTree) -> Result<MenuHandle> {
        let handle = MenuHandle(self.next_handle.fetch_add(1, Ordering::SeqCst));
        self.live.write().unwrap().push(handle);
        *self.installed.write().unwrap() = Some(handle);
        self.installs.fetch_add(1, Ordering::SeqCst);
        Ok(handle)
    }

    fn destroy(&self, handle: MenuHandle) -> Result<()> {
        let mut live = self.live.write().unwrap();
        let Some(position) = live.iter().position(|h| *h == handle) else {
            bail!("destroy of unknown menu handle {:?}", handle);
        };
        live.remove(position);

        let mut installed = self.installed.write().unwrap();
        if *installed == Some(handle) {
            *installed = None;
        }
        Ok(())
    }

    fn register_shortcut(&self, accelerator: &str) -> Result<()> {
        let mut shortcuts = self.shortcuts.write().unwrap();
        if !shortcuts.insert(accelerator.to_string()) {
            bail!("shortcut already registered: {}", accelerator);
        }
        Ok(())
    }

    fn unregister_shortcut(&self, accelerator: &str) -> Result<()> {
        let mut shortcuts = self.shortcuts.write().unwrap();
        if !shortcuts.remove(accelerator) {
            bail!("shortcut not registered: {}", accelerator);
        }
        Ok(())
    }

    fn is_shortcut_registered(&self, accelerator: &str) -> bool {
        self.shortcuts.read().unwrap().contains(accelerator)
    }
}
