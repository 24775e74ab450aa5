//! Click-handler commands
//!
//! Menu entries carry a command value instead of a callback. Dispatch
//! resolves the window layer at fire time, so an entry built from an
//! older tree still acts on whatever is current when it fires.

use log::debug;

use crate::models::ServiceType;
use crate::windows::WindowManager;

/// The action a menu entry performs when clicked
#[derive(Debug, Clone, PartialEq)]
pub enum MenuCommand {
    ShowWindow,
    HideWindow,
    ComposeMail,
    ShowPreferences,
    CheckForUpdates,
    Reload,
    OpenDevTools,
    ToggleSidebar,
    ToggleMenu,
    ZoomIn,
    ZoomOut,
    ZoomReset,
    PreviousAccount,
    NextAccount,
    SwitchAccount(String),
    SwitchService {
        account_id: String,
        service_type: ServiceType,
    },
    OpenExternal(String),
    Quit,
}

impl MenuCommand {
    /// Execute this command against the window layer
    pub fn dispatch(&self, windows: &dyn WindowManager) {
        debug!("Dispatching menu command {:?}", self);
        match self {
            MenuCommand::ShowWindow => windows.show_mailboxes(),
            MenuCommand::HideWindow => windows.hide_mailboxes(),
            MenuCommand::ComposeMail => windows.compose_mail(),
            MenuCommand::ShowPreferences => windows.show_preferences(),
            MenuCommand::CheckForUpdates => windows.check_for_updates(),
            MenuCommand::Reload => windows.reload(),
            MenuCommand::OpenDevTools => windows.open_dev_tools(),
            MenuCommand::ToggleSidebar => windows.toggle_sidebar(),
            MenuCommand::ToggleMenu => windows.toggle_menu(),
            MenuCommand::ZoomIn => windows.zoom_in(),
            MenuCommand::ZoomOut => windows.zoom_out(),
            MenuCommand::ZoomReset => windows.zoom_reset(),
            MenuCommand::PreviousAccount => windows.previous_account(),
            MenuCommand::NextAccount => windows.next_account(),
            MenuCommand::SwitchAccount(account_id) => windows.switch_to_account(account_id),
            MenuCommand::SwitchService {
                account_id,
                service_type,
            } => windows.switch_to_service(account_id, *service_type),
            MenuCommand::OpenExternal(url) => windows.open_external(url),
            MenuCommand::Quit => windows.quit(),
        }
    }
}
