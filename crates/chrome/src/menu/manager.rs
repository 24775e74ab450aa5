//! Menu lifecycle management
//!
//! Owns the installed native menu and the state it was built from,
//! decides when a change notification warrants a rebuild, and releases
//! the previous native tree only after the replacement is live.

use anyhow::Result;
use log::{debug, info};
use std::sync::Arc;

use crate::accelerators::{AcceleratorChange, AcceleratorMap, actions};
use crate::input::{InputEvent, InputKind};
use crate::menu::{MenuCommand, MenuNode, MenuTree, MenuTreeBuilder, shadow};
use crate::models::{AccountSummary, ServiceType, accounts_signature};
use crate::platform::{MenuHandle, MenuPlatform, Platform};
use crate::stores::AccountStore;
use crate::windows::WindowManager;

/// Zoom-in keystroke kept registered outside the menu while the menu
/// accelerator still carries its factory default. `Plus` needs a shift
/// chord on most layouts; the bare `=` variant keeps un-shifted zoom
/// working even when a web view has keyboard focus.
const HIDDEN_ZOOM_IN_ACCELERATOR: &str = "CmdOrCtrl+=";

/// The installed native menu plus the tree it was built from.
///
/// The tree is retained for shadow matching; the handle is what gets
/// released when the next installation replaces this one.
struct MenuInstallation {
    handle: MenuHandle,
    tree: MenuTree,
}

/// Owns the application menu lifecycle.
///
/// All mutation goes through this type; collaborators are injected at
/// construction and only read. Exactly one native menu is live at any
/// time once the first update has run.
pub struct MenuManager {
    host: Platform,
    builder: MenuTreeBuilder,
    accounts: Arc<dyn AccountStore>,
    windows: Arc<dyn WindowManager>,
    native: Arc<dyn MenuPlatform>,
    last_accelerators: AcceleratorMap,
    last_accounts: Vec<AccountSummary>,
    last_active_account_id: Option<String>,
    last_active_service_type: ServiceType,
    last_menu: Option<MenuInstallation>,
}

impl MenuManager {
    /// Create a manager with no menu installed yet
    pub fn new(
        host: Platform,
        accounts: Arc<dyn AccountStore>,
        windows: Arc<dyn WindowManager>,
        native: Arc<dyn MenuPlatform>,
    ) -> Self {
        Self {
            host,
            builder: MenuTreeBuilder::new(host),
            accounts,
            windows,
            native,
            last_accelerators: AcceleratorMap::default(),
            last_accounts: Vec::new(),
            last_active_account_id: None,
            last_active_service_type: ServiceType::Mail,
            last_menu: None,
        }
    }

    /// Handle a change notification from the account store.
    ///
    /// The notification carries no payload, so current state is re-fetched
    /// and compared against the remembered snapshot: active account id,
    /// active service type, and the flattened account signature. Matching
    /// state is a no-op once a menu is installed.
    pub fn on_accounts_changed(&mut self) -> Result<()> {
        let accounts = self.accounts.ordered_accounts();
        let active_account_id = self.accounts.active_account().map(|a| a.id);
        let active_service_type = self.accounts.active_service_type();

        let unchanged = self.last_menu.is_some()
            && self.last_active_account_id == active_account_id
            && self.last_active_service_type == active_service_type
            && accounts_signature(&self.last_accounts) == accounts_signature(&accounts);
        if unchanged {
            debug!("Account change carried no menu-relevant difference");
            return Ok(());
        }

        let accelerators = self.last_accelerators.clone();
        self.update_menu(accelerators, accounts, active_account_id, active_service_type)
    }

    /// Handle an accelerator-map change. Always rebuilds: any accelerator
    /// change is assumed user-visible.
    pub fn on_accelerators_changed(&mut self, change: &AcceleratorChange) -> Result<()> {
        self.update_menu(
            change.next.clone(),
            self.accounts.ordered_accounts(),
            self.accounts.active_account().map(|a| a.id),
            self.accounts.active_service_type(),
        )
    }

    /// Rebuild and install the menu unconditionally.
    ///
    /// The new tree is installed before the previous native menu is
    /// released, so there is never a moment without an application menu;
    /// once this returns, no resource of the previous menu survives.
    pub fn update_menu(
        &mut self,
        accelerators: AcceleratorMap,
        accounts: Vec<AccountSummary>,
        active_account_id: Option<String>,
        active_service_type: ServiceType,
    ) -> Result<()> {
        let tree = self.builder.build(
            &accelerators,
            &accounts,
            active_account_id.as_deref(),
            active_service_type,
        );
        let handle = self.native.install(&tree)?;
        info!("Installed application menu ({} accounts)", accounts.len());

        self.last_accelerators = accelerators;
        self.last_accounts = accounts;
        self.last_active_account_id = active_account_id;
        self.last_active_service_type = active_service_type;
        let previous = self.last_menu.replace(MenuInstallation { handle, tree });

        self.reconcile_hidden_shortcuts()?;

        if let Some(previous) = previous {
            self.native.destroy(previous.handle)?;
            debug!("Released previous menu {:?}", previous.handle);
        }
        Ok(())
    }

    /// Keep the out-of-menu zoom shortcut in sync with the settings.
    ///
    /// Registered only while zoom-in still carries its factory default;
    /// the registry check makes redundant calls harmless.
    fn reconcile_hidden_shortcuts(&self) -> Result<()> {
        let wants_hidden_zoom = self.last_accelerators.is_default(actions::ZOOM_IN);
        let registered = self
            .native
            .is_shortcut_registered(HIDDEN_ZOOM_IN_ACCELERATOR);

        if wants_hidden_zoom && !registered {
            self.native.register_shortcut(HIDDEN_ZOOM_IN_ACCELERATOR)?;
            debug!("Registered hidden zoom shortcut");
        } else if !wants_hidden_zoom && registered {
            self.native.unregister_shortcut(HIDDEN_ZOOM_IN_ACCELERATOR)?;
            debug!("Unregistered hidden zoom shortcut");
        }
        Ok(())
    }

    /// Execute a menu command against the window layer
    pub fn dispatch(&self, command: &MenuCommand) {
        command.dispatch(self.windows.as_ref());
    }

    /// Fallback dispatch for a keystroke consumed before the native menu.
    ///
    /// Walks the installed tree's accelerator-bearing entries in emission
    /// order and fires the first match; at most one command dispatches per
    /// event. Role entries consume a match without dispatching.
    pub fn on_input_prevented(&self, source_id: u64, input: &InputEvent) {
        if input.kind != InputKind::KeyDown {
            return;
        }
        let Some(installation) = &self.last_menu else {
            return;
        };

        for node in installation.tree.flatten() {
            let Some(accelerator) = node.accelerator() else {
                continue;
            };
            if shadow::match_input_to_accelerator(input, accelerator, self.host) {
                debug!(
                    "Shadow-matched {:?} for prevented input from source {}",
                    accelerator, source_id
                );
                if let MenuNode::Action(item) = node {
                    self.dispatch(&item.command);
                }
                return;
            }
        }
    }

    // === Remembered state accessors ===

    /// Whether a menu is currently installed
    pub fn has_menu(&self) -> bool {
        self.last_menu.is_some()
    }

    /// The tree of the installed menu, if any
    pub fn installed_tree(&self) -> Option<&MenuTree> {
        self.last_menu.as_ref().map(|m| &m.tree)
    }

    /// Accelerator map the installed menu was built from
    pub fn current_accelerators(&self) -> &AcceleratorMap {
        &self.last_accelerators
    }

    /// Account snapshot the installed menu was built from
    pub fn current_accounts(&self) -> &[AccountSummary] {
        &self.last_accounts
    }

    /// Active account id the installed menu was built from
    pub fn active_account_id(&self) -> Option<&str> {
        self.last_active_account_id.as_deref()
    }

    /// Active service type the installed menu was built from
    pub fn active_service_type(&self) -> ServiceType {
        self.last_active_service_type
    }
}
