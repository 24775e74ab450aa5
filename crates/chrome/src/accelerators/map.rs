//! Accelerator map and factory defaults

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Logical action names for every accelerator-bearing menu entry.
///
/// These double as the keys of the persisted settings file.
pub mod actions {
    pub const PREFERENCES: &str = "preferences";
    pub const COMPOSE_MAIL: &str = "compose_mail";
    pub const CHECK_FOR_UPDATES: &str = "check_for_updates";
    pub const HIDE: &str = "hide";
    pub const HIDE_OTHERS: &str = "hide_others";
    pub const QUIT: &str = "quit";

    pub const UNDO: &str = "undo";
    pub const REDO: &str = "redo";
    pub const CUT: &str = "cut";
    pub const COPY: &str = "copy";
    pub const PASTE: &str = "paste";
    pub const PASTE_AND_MATCH_STYLE: &str = "paste_and_match_style";
    pub const SELECT_ALL: &str = "select_all";

    pub const TOGGLE_FULLSCREEN: &str = "toggle_fullscreen";
    pub const TOGGLE_SIDEBAR: &str = "toggle_sidebar";
    pub const TOGGLE_MENU: &str = "toggle_menu";
    pub const ZOOM_IN: &str = "zoom_in";
    pub const ZOOM_OUT: &str = "zoom_out";
    pub const ZOOM_RESET: &str = "zoom_reset";
    pub const RELOAD: &str = "reload";
    pub const DEV_TOOLS: &str = "dev_tools";

    pub const MINIMIZE: &str = "minimize";
    pub const CLOSE_WINDOW: &str = "close_window";
    pub const SHOW_WINDOW: &str = "show_window";
    pub const HIDE_WINDOW: &str = "hide_window";
    pub const PREVIOUS_ACCOUNT: &str = "previous_account";
    pub const NEXT_ACCOUNT: &str = "next_account";
    /// Template for the per-account fast-switch entries
    pub const MAILBOX_INDEX: &str = "mailbox_index";
    /// Template for the per-service fast-switch entries
    pub const SERVICE_INDEX: &str = "service_index";
}

/// Factory default keystroke for an action, if it has one.
///
/// Defaults use `CmdOrCtrl` so one table serves every platform; the key
/// event parser resolves the modifier per host.
pub fn default_for(action: &str) -> Option<&'static str> {
    match action {
        actions::PREFERENCES => Some("CmdOrCtrl+,"),
        actions::COMPOSE_MAIL => Some("CmdOrCtrl+N"),
        actions::HIDE => Some("CmdOrCtrl+H"),
        actions::HIDE_OTHERS => Some("CmdOrCtrl+Alt+H"),
        actions::QUIT => Some("CmdOrCtrl+Q"),
        actions::UNDO => Some("CmdOrCtrl+Z"),
        actions::REDO => Some("CmdOrCtrl+Shift+Z"),
        actions::CUT => Some("CmdOrCtrl+X"),
        actions::COPY => Some("CmdOrCtrl+C"),
        actions::PASTE => Some("CmdOrCtrl+V"),
        actions::PASTE_AND_MATCH_STYLE => Some("CmdOrCtrl+Shift+V"),
        actions::SELECT_ALL => Some("CmdOrCtrl+A"),
        actions::TOGGLE_FULLSCREEN => Some("F11"),
        actions::TOGGLE_SIDEBAR => Some("CmdOrCtrl+Shift+B"),
        actions::TOGGLE_MENU => Some("CmdOrCtrl+\\"),
        actions::ZOOM_IN => Some("CmdOrCtrl+Plus"),
        actions::ZOOM_OUT => Some("CmdOrCtrl+-"),
        actions::ZOOM_RESET => Some("CmdOrCtrl+0"),
        actions::RELOAD => Some("CmdOrCtrl+R"),
        actions::DEV_TOOLS => Some("CmdOrCtrl+Alt+I"),
        actions::MINIMIZE => Some("CmdOrCtrl+M"),
        actions::CLOSE_WINDOW => Some("CmdOrCtrl+W"),
        actions::PREVIOUS_ACCOUNT => Some("CmdOrCtrl+<"),
        actions::NEXT_ACCOUNT => Some("CmdOrCtrl+>"),
        actions::MAILBOX_INDEX => Some("CmdOrCtrl+Number"),
        actions::SERVICE_INDEX => Some("CmdOrCtrl+Alt+Number"),
        _ => None,
    }
}

/// Immutable snapshot of accelerator assignments.
///
/// User overrides layer over the factory defaults; an override holding
/// `None` clears the default so the entry renders without a shortcut.
/// The settings store owns mutation; everything else reads snapshots.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AcceleratorMap {
    #[serde(default)]
    overrides: HashMap<String, Option<String>>,
}

impl AcceleratorMap {
    /// The factory map with no overrides
    pub fn new() -> Self {
        Self::default()
    }

    /// Effective keystroke for an action
    pub fn get(&self, action: &str) -> Option<&str> {
        match self.overrides.get(action) {
            Some(value) => value.as_deref(),
            None => default_for(action),
        }
    }

    /// Whether the action currently resolves to its factory default
    pub fn is_default(&self, action: &str) -> bool {
        self.get(action) == default_for(action)
    }

    /// Override one action's keystroke
    pub fn with_override(
        mut self,
        action: impl Into<String>,
        accelerator: impl Into<String>,
    ) -> Self {
        self.overrides
            .insert(action.into(), Some(accelerator.into()));
        self
    }

    /// Clear one action's keystroke entirely
    pub fn without(mut self, action: impl Into<String>) -> Self {
        self.overrides.insert(action.into(), None);
        self
    }

    /// Drop an override, restoring the factory default
    pub fn reset(mut self, action: &str) -> Self {
        self.overrides.remove(action);
        self
    }
}
