//! Window-manager capability contract

use crate::models::ServiceType;

/// Operations the menu invokes on the window layer.
///
/// The menu treats these as opaque capabilities. Implementations resolve
/// the target window at call time, so an entry built from an older tree
/// can never act on a window that no longer matches application state.
pub trait WindowManager: Send + Sync {
    /// Show and focus the mailboxes window
    fn show_mailboxes(&self);

    /// Hide the mailboxes window
    fn hide_mailboxes(&self);

    /// Open a compose view in the active account
    fn compose_mail(&self);

    /// Open the preferences surface
    fn show_preferences(&self);

    /// Trigger an update check
    fn check_for_updates(&self);

    /// Reload the focused content view
    fn reload(&self);

    /// Open developer tools for the focused content view
    fn open_dev_tools(&self);

    /// Toggle the account sidebar
    fn toggle_sidebar(&self);

    /// Toggle the in-window menu (non-macOS)
    fn toggle_menu(&self);

    fn zoom_in(&self);
    fn zoom_out(&self);
    fn zoom_reset(&self);

    /// Switch the mailboxes window to the given account
    fn switch_to_account(&self, account_id: &str);

    /// Switch the mailboxes window to a sub-service of an account
    fn switch_to_service(&self, account_id: &str, service_type: ServiceType);

    /// Cycle to the previous account
    fn previous_account(&self);

    /// Cycle to the next account
    fn next_account(&self);

    /// Open a URL in the system browser
    fn open_external(&self, url: &str);

    /// Quit the application
    fn quit(&self);
}

/// No-op window manager for tests and headless embedding
pub struct NullWindowManager;

impl WindowManager for NullWindowManager {
    fn show_mailboxes(&self) {}
    fn hide_mailboxes(&self) {}
    fn compose_mail(&self) {}
    fn show_preferences(&self) {}
    fn check_for_updates(&self) {}
    fn reload(&self) {}
    fn open_dev_tools(&self) {}
    fn toggle_sidebar(&self) {}
    fn toggle_menu(&self) {}
    fn zoom_in(&self) {}
    fn zoom_out(&self) {}
    fn zoom_reset(&self) {}
    fn switch_to_account(&self, _account_id: &str) {}
    fn switch_to_service(&self, _account_id: &str, _service_type: ServiceType) {}
    fn previous_account(&self) {}
    fn next_account(&self) {}
    fn open_external(&self, _url: &str) {}
    fn quit(&self) {}
}
