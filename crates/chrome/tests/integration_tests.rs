//! Integration tests for the chrome crate
//!
//! These tests run the full path from store state through menu
//! construction, installation and shadow dispatch.

use std::sync::{Arc, Mutex};

use chrome::{
    AcceleratorChange, AcceleratorMap, AcceleratorSettings, AccountStore, AccountSummary,
    InMemoryAccountStore, InMemoryMenuPlatform, InputEvent, KeyEventDescriptor, MenuManager,
    MenuNode, MenuPlatform, Platform, ServiceType, WindowManager, actions,
    match_input_to_accelerator,
};

/// Window manager that records every dispatched capability call
struct RecordingWindows {
    calls: Mutex<Vec<String>>,
}

impl RecordingWindows {
    fn new() -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
        }
    }

    fn record(&self, call: impl Into<String>) {
        self.calls.lock().unwrap().push(call.into());
    }

    fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

impl WindowManager for RecordingWindows {
    fn show_mailboxes(&self) {
        self.record("show_mailboxes");
    }
    fn hide_mailboxes(&self) {
        self.record("hide_mailboxes");
    }
    fn compose_mail(&self) {
        self.record("compose_mail");
    }
    fn show_preferences(&self) {
        self.record("show_preferences");
    }
    fn check_for_updates(&self) {
        self.record("check_for_updates");
    }
    fn reload(&self) {
        self.record("reload");
    }
    fn open_dev_tools(&self) {
        self.record("open_dev_tools");
    }
    fn toggle_sidebar(&self) {
        self.record("toggle_sidebar");
    }
    fn toggle_menu(&self) {
        self.record("toggle_menu");
    }
    fn zoom_in(&self) {
        self.record("zoom_in");
    }
    fn zoom_out(&self) {
        self.record("zoom_out");
    }
    fn zoom_reset(&self) {
        self.record("zoom_reset");
    }
    fn switch_to_account(&self, account_id: &str) {
        self.record(format!("switch_to_account:{}", account_id));
    }
    fn switch_to_service(&self, account_id: &str, service_type: ServiceType) {
        self.record(format!(
            "switch_to_service:{}:{}",
            account_id,
            service_type.as_str()
        ));
    }
    fn previous_account(&self) {
        self.record("previous_account");
    }
    fn next_account(&self) {
        self.record("next_account");
    }
    fn open_external(&self, url: &str) {
        self.record(format!("open_external:{}", url));
    }
    fn quit(&self) {
        self.record("quit");
    }
}

struct Fixture {
    manager: MenuManager,
    store: Arc<InMemoryAccountStore>,
    native: Arc<InMemoryMenuPlatform>,
    windows: Arc<RecordingWindows>,
}

fn make_fixture(host: Platform) -> Fixture {
    let store = Arc::new(InMemoryAccountStore::new());
    let native = Arc::new(InMemoryMenuPlatform::new());
    let windows = Arc::new(RecordingWindows::new());
    let manager = MenuManager::new(host, store.clone(), windows.clone(), native.clone());
    Fixture {
        manager,
        store,
        native,
        windows,
    }
}

fn make_accounts() -> Vec<AccountSummary> {
    vec![
        AccountSummary::new("a1").with_display_name("Work"),
        AccountSummary::new("a2")
            .with_display_name("Home")
            .with_service(ServiceType::Calendar),
        AccountSummary::new("a3").with_display_name("Club"),
    ]
}

/// Build an observed key-down event that satisfies a descriptor exactly
fn input_for(descriptor: &KeyEventDescriptor) -> InputEvent {
    let mut input = InputEvent::key_down(
        descriptor.key.clone().unwrap_or_default(),
        descriptor.code.clone().unwrap_or_default(),
    );
    if descriptor.shift == Some(true) {
        input = input.with_shift();
    }
    if descriptor.control == Some(true) {
        input = input.with_control();
    }
    if descriptor.alt == Some(true) {
        input = input.with_alt();
    }
    if descriptor.meta == Some(true) {
        input = input.with_meta();
    }
    input
}

#[test]
fn test_self_match_identity_over_installed_tree() {
    let mut fixture = make_fixture(Platform::Linux);
    fixture.store.set_accounts(make_accounts());
    fixture.manager.on_accounts_changed().unwrap();

    let tree = fixture.manager.installed_tree().unwrap();
    let flat = tree.flatten();
    assert!(!flat.is_empty());

    // Every accelerator in the tree, replayed as the keystroke it
    // describes, must match itself.
    for node in flat {
        let accelerator = node.accelerator().unwrap();
        let descriptor = KeyEventDescriptor::parse(accelerator, Platform::Linux).unwrap();
        let input = input_for(&descriptor);
        assert!(
            match_input_to_accelerator(&input, accelerator, Platform::Linux),
            "accelerator {:?} did not match its own keystroke",
            accelerator
        );
    }
}

#[test]
fn test_prevented_input_switches_account() {
    let mut fixture = make_fixture(Platform::Linux);
    fixture.store.set_accounts(make_accounts());
    fixture.manager.on_accounts_changed().unwrap();

    // Ctrl+2 is the second account's fast-switch slot on Linux
    let input = InputEvent::key_down("2", "Digit2").with_control();
    fixture.manager.on_input_prevented(7, &input);

    assert_eq!(fixture.windows.calls(), vec!["switch_to_account:a2"]);
}

#[test]
fn test_prevented_input_fires_at_most_once() {
    let mut fixture = make_fixture(Platform::Linux);
    fixture.store.set_accounts(make_accounts());
    fixture.manager.on_accounts_changed().unwrap();

    let input = InputEvent::key_down("r", "KeyR").with_control();
    fixture.manager.on_input_prevented(7, &input);

    // Ctrl+R only belongs to Reload; exactly one dispatch happens
    assert_eq!(fixture.windows.calls(), vec!["reload"]);
}

#[test]
fn test_prevented_input_ignored_without_menu_or_key_down() {
    let fixture = make_fixture(Platform::Linux);

    // No menu installed yet: nothing fires
    let input = InputEvent::key_down("r", "KeyR").with_control();
    fixture.manager.on_input_prevented(7, &input);
    assert!(fixture.windows.calls().is_empty());

    let mut fixture = make_fixture(Platform::Linux);
    fixture.store.set_accounts(make_accounts());
    fixture.manager.on_accounts_changed().unwrap();

    // Key-up events never dispatch
    let mut key_up = InputEvent::key_down("r", "KeyR").with_control();
    key_up.kind = chrome::InputKind::KeyUp;
    fixture.manager.on_input_prevented(7, &key_up);
    assert!(fixture.windows.calls().is_empty());
}

#[test]
fn test_role_match_consumes_without_dispatch() {
    let mut fixture = make_fixture(Platform::Linux);
    fixture.store.set_accounts(make_accounts());
    fixture.manager.on_accounts_changed().unwrap();

    // Ctrl+Z belongs to the Undo role entry; the platform owns its
    // behavior, so the shadow path must not dispatch anything.
    let input = InputEvent::key_down("z", "KeyZ").with_control();
    fixture.manager.on_input_prevented(7, &input);
    assert!(fixture.windows.calls().is_empty());
}

#[test]
fn test_two_updates_leave_one_live_menu() {
    let mut fixture = make_fixture(Platform::Linux);

    fixture
        .manager
        .update_menu(
            AcceleratorMap::default(),
            vec![AccountSummary::new("a1").with_display_name("Work")],
            Some("a1".to_string()),
            ServiceType::Mail,
        )
        .unwrap();
    fixture
        .manager
        .update_menu(
            AcceleratorMap::default(),
            make_accounts(),
            Some("a2".to_string()),
            ServiceType::Calendar,
        )
        .unwrap();

    assert_eq!(fixture.native.install_count(), 2);
    assert_eq!(fixture.native.live_handles().len(), 1);
}

#[test]
fn test_settings_change_flows_into_shadow_matching() {
    let dir = tempfile::TempDir::new().unwrap();
    let mut settings = AcceleratorSettings::load_from(&dir.path().join("accelerators.json"));

    let mut fixture = make_fixture(Platform::Linux);
    fixture.store.set_accounts(make_accounts());
    fixture.manager.on_accounts_changed().unwrap();

    // Rebind reload to F5 through the settings store
    let change: AcceleratorChange = settings.set_override(actions::RELOAD, "F5").unwrap();
    fixture.manager.on_accelerators_changed(&change).unwrap();

    let old_binding = InputEvent::key_down("r", "KeyR").with_control();
    fixture.manager.on_input_prevented(7, &old_binding);
    assert!(fixture.windows.calls().is_empty());

    let new_binding = InputEvent::key_down("F5", "F5");
    fixture.manager.on_input_prevented(7, &new_binding);
    assert_eq!(fixture.windows.calls(), vec!["reload"]);
}

#[test]
fn test_hidden_zoom_shortcut_follows_settings() {
    let mut fixture = make_fixture(Platform::Linux);
    fixture.store.set_accounts(make_accounts());
    fixture.manager.on_accounts_changed().unwrap();
    assert!(fixture.native.is_shortcut_registered("CmdOrCtrl+="));

    let change = AcceleratorChange {
        previous: AcceleratorMap::default(),
        next: AcceleratorMap::default().with_override(actions::ZOOM_IN, "Ctrl+U"),
    };
    fixture.manager.on_accelerators_changed(&change).unwrap();
    assert!(!fixture.native.is_shortcut_registered("CmdOrCtrl+="));
}

#[test]
fn test_macos_tree_matches_meta_chords() {
    let mut fixture = make_fixture(Platform::MacOs);
    fixture.store.set_accounts(make_accounts());
    fixture.manager.on_accounts_changed().unwrap();

    // Cmd+3 switches to the third account on macOS
    let input = InputEvent::key_down("3", "Digit3").with_meta();
    fixture.manager.on_input_prevented(7, &input);
    assert_eq!(fixture.windows.calls(), vec!["switch_to_account:a3"]);

    // The same keystroke with Ctrl instead does nothing there
    let ctrl_input = InputEvent::key_down("3", "Digit3").with_control();
    fixture.manager.on_input_prevented(7, &ctrl_input);
    assert_eq!(fixture.windows.calls(), vec!["switch_to_account:a3"]);
}

#[test]
fn test_service_radios_follow_active_account() {
    let mut fixture = make_fixture(Platform::Linux);
    fixture.store.set_accounts(make_accounts());
    fixture.store.set_active_account("a2");
    fixture.manager.on_accounts_changed().unwrap();

    let tree = fixture.manager.installed_tree().unwrap();
    let labels: Vec<&str> = tree
        .flatten()
        .iter()
        .filter_map(|node| match node {
            MenuNode::Action(item) if item.selected.is_some() => Some(item.label.as_str()),
            _ => None,
        })
        .collect();

    // Account radios plus the mail/calendar service radios for a2
    assert_eq!(labels, vec!["Work", "Home", "Club", "Mail", "Calendar"]);
}

#[test]
fn test_store_accessors_reflect_last_build() {
    let mut fixture = make_fixture(Platform::Linux);
    fixture.store.set_accounts(make_accounts());
    fixture.store.set_active_account("a2");
    fixture.store.set_active_service_type(ServiceType::Calendar);
    fixture.manager.on_accounts_changed().unwrap();

    assert_eq!(fixture.manager.active_account_id(), Some("a2"));
    assert_eq!(fixture.manager.active_service_type(), ServiceType::Calendar);
    assert_eq!(fixture.manager.current_accounts().len(), 3);
    assert_eq!(
        fixture.store.ordered_accounts().len(),
        fixture.manager.current_accounts().len()
    );
}
