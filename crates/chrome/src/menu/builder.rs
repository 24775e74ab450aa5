//! Menu tree construction
//!
//! Builds the complete application menu from the current accelerator map,
//! account list and active selection. Construction is pure: identical
//! inputs produce a structurally identical tree, and nothing here touches
//! collaborator state.

use crate::accelerators::{AcceleratorMap, actions, resolve_indexed_accelerator};
use crate::menu::{ActionItem, MenuCommand, MenuNode, MenuRole, MenuTree, RoleItem};
use crate::models::{AccountSummary, ServiceSummary, ServiceType};
use crate::platform::Platform;

/// Links surfaced in the Help menu
const WEBSITE_URL: &str = "https://beacon.email";
const SOURCE_URL: &str = "https://github.com/beacon-mail/beacon";
const PRIVACY_URL: &str = "https://beacon.email/privacy";

/// Builds the full application menu tree.
///
/// Platform-conditional entries (the macOS Services role, the in-window
/// menu toggle elsewhere) are assembled as options and filtered, so the
/// finished tree never contains gaps.
pub struct MenuTreeBuilder {
    platform: Platform,
}

impl MenuTreeBuilder {
    pub fn new(platform: Platform) -> Self {
        Self { platform }
    }

    /// Build the menu tree for the given application state
    pub fn build(
        &self,
        accelerators: &AcceleratorMap,
        accounts: &[AccountSummary],
        active_account_id: Option<&str>,
        active_service_type: ServiceType,
    ) -> MenuTree {
        MenuTree::new(vec![
            self.application_menu(accelerators),
            self.edit_menu(accelerators),
            self.view_menu(accelerators),
            self.window_menu(accelerators, accounts, active_account_id, active_service_type),
            self.help_menu(),
        ])
    }

    fn application_menu(&self, accelerators: &AcceleratorMap) -> MenuNode {
        let macos = self.platform.is_macos();
        let entries: Vec<Option<MenuNode>> = vec![
            Some(RoleItem::new(MenuRole::About).into()),
            Some(
                ActionItem::new("Check for Update", MenuCommand::CheckForUpdates)
                    .with_accelerator(accelerators.get(actions::CHECK_FOR_UPDATES))
                    .into(),
            ),
            Some(MenuNode::Separator),
            Some(
                ActionItem::new("Compose Mail", MenuCommand::ComposeMail)
                    .with_accelerator(accelerators.get(actions::COMPOSE_MAIL))
                    .into(),
            ),
            Some(
                ActionItem::new("Preferences", MenuCommand::ShowPreferences)
                    .with_accelerator(accelerators.get(actions::PREFERENCES))
                    .into(),
            ),
            Some(MenuNode::Separator),
            macos.then(|| RoleItem::new(MenuRole::Services).into()),
            macos.then(|| MenuNode::Separator),
            macos.then(|| {
                RoleItem::new(MenuRole::Hide)
                    .with_accelerator(accelerators.get(actions::HIDE))
                    .into()
            }),
            macos.then(|| {
                RoleItem::new(MenuRole::HideOthers)
                    .with_accelerator(accelerators.get(actions::HIDE_OTHERS))
                    .into()
            }),
            macos.then(|| RoleItem::new(MenuRole::ShowAll).into()),
            macos.then(|| MenuNode::Separator),
            Some(
                RoleItem::new(MenuRole::Quit)
                    .with_accelerator(accelerators.get(actions::QUIT))
                    .into(),
            ),
        ];
        submenu("Beacon", entries)
    }

    fn edit_menu(&self, accelerators: &AcceleratorMap) -> MenuNode {
        MenuNode::submenu(
            "Edit",
            vec![
                RoleItem::new(MenuRole::Undo)
                    .with_accelerator(accelerators.get(actions::UNDO))
                    .into(),
                RoleItem::new(MenuRole::Redo)
                    .with_accelerator(accelerators.get(actions::REDO))
                    .into(),
                MenuNode::Separator,
                RoleItem::new(MenuRole::Cut)
                    .with_accelerator(accelerators.get(actions::CUT))
                    .into(),
                RoleItem::new(MenuRole::Copy)
                    .with_accelerator(accelerators.get(actions::COPY))
                    .into(),
                RoleItem::new(MenuRole::Paste)
                    .with_accelerator(accelerators.get(actions::PASTE))
                    .into(),
                RoleItem::new(MenuRole::PasteAndMatchStyle)
                    .with_accelerator(accelerators.get(actions::PASTE_AND_MATCH_STYLE))
                    .into(),
                RoleItem::new(MenuRole::SelectAll)
                    .with_accelerator(accelerators.get(actions::SELECT_ALL))
                    .into(),
            ],
        )
    }

    fn view_menu(&self, accelerators: &AcceleratorMap) -> MenuNode {
        let macos = self.platform.is_macos();
        let entries: Vec<Option<MenuNode>> = vec![
            Some(
                RoleItem::new(MenuRole::ToggleFullscreen)
                    .with_accelerator(accelerators.get(actions::TOGGLE_FULLSCREEN))
                    .into(),
            ),
            Some(
                ActionItem::new("Toggle Sidebar", MenuCommand::ToggleSidebar)
                    .with_accelerator(accelerators.get(actions::TOGGLE_SIDEBAR))
                    .into(),
            ),
            (!macos).then(|| {
                ActionItem::new("Toggle Menu", MenuCommand::ToggleMenu)
                    .with_accelerator(accelerators.get(actions::TOGGLE_MENU))
                    .into()
            }),
            Some(MenuNode::Separator),
            Some(
                ActionItem::new("Zoom In", MenuCommand::ZoomIn)
                    .with_accelerator(accelerators.get(actions::ZOOM_IN))
                    .into(),
            ),
            Some(
                ActionItem::new("Zoom Out", MenuCommand::ZoomOut)
                    .with_accelerator(accelerators.get(actions::ZOOM_OUT))
                    .into(),
            ),
            Some(
                ActionItem::new("Reset Zoom", MenuCommand::ZoomReset)
                    .with_accelerator(accelerators.get(actions::ZOOM_RESET))
                    .into(),
            ),
            Some(MenuNode::Separator),
            Some(
                ActionItem::new("Reload", MenuCommand::Reload)
                    .with_accelerator(accelerators.get(actions::RELOAD))
                    .into(),
            ),
            Some(
                ActionItem::new("Developer Tools", MenuCommand::OpenDevTools)
                    .with_accelerator(accelerators.get(actions::DEV_TOOLS))
                    .into(),
            ),
        ];
        submenu("View", entries)
    }

    fn window_menu(
        &self,
        accelerators: &AcceleratorMap,
        accounts: &[AccountSummary],
        active_account_id: Option<&str>,
        active_service_type: ServiceType,
    ) -> MenuNode {
        let mut children: Vec<MenuNode> = vec![
            RoleItem::new(MenuRole::Minimize)
                .with_accelerator(accelerators.get(actions::MINIMIZE))
                .into(),
            RoleItem::new(MenuRole::CloseWindow)
                .with_accelerator(accelerators.get(actions::CLOSE_WINDOW))
                .into(),
            MenuNode::Separator,
            ActionItem::new("Show Window", MenuCommand::ShowWindow)
                .with_accelerator(accelerators.get(actions::SHOW_WINDOW))
                .into(),
            ActionItem::new("Hide Window", MenuCommand::HideWindow)
                .with_accelerator(accelerators.get(actions::HIDE_WINDOW))
                .into(),
            MenuNode::Separator,
            ActionItem::new("Previous Account", MenuCommand::PreviousAccount)
                .with_accelerator(accelerators.get(actions::PREVIOUS_ACCOUNT))
                .into(),
            ActionItem::new("Next Account", MenuCommand::NextAccount)
                .with_accelerator(accelerators.get(actions::NEXT_ACCOUNT))
                .into(),
        ];

        children.extend(account_section(accelerators, accounts, active_account_id));

        let active_account = active_account_id.and_then(|id| accounts.iter().find(|a| a.id == id));
        children.extend(service_section(
            accelerators,
            active_account,
            active_service_type,
        ));

        MenuNode::submenu("Window", children)
    }

    fn help_menu(&self) -> MenuNode {
        MenuNode::submenu(
            "Help",
            vec![
                MenuNode::action(
                    "Beacon Website",
                    MenuCommand::OpenExternal(WEBSITE_URL.to_string()),
                ),
                MenuNode::action(
                    "Beacon on GitHub",
                    MenuCommand::OpenExternal(SOURCE_URL.to_string()),
                ),
                MenuNode::Separator,
                MenuNode::action(
                    "Privacy",
                    MenuCommand::OpenExternal(PRIVACY_URL.to_string()),
                ),
            ],
        )
    }
}

/// Assemble a submenu from conditional entries, dropping the gaps
fn submenu(label: &str, entries: Vec<Option<MenuNode>>) -> MenuNode {
    MenuNode::submenu(label, entries.into_iter().flatten().collect())
}

/// Radio entries for fast account switching.
///
/// Omitted entirely, separator included, when there is at most one
/// account to switch between.
fn account_section(
    accelerators: &AcceleratorMap,
    accounts: &[AccountSummary],
    active_account_id: Option<&str>,
) -> Vec<MenuNode> {
    if accounts.len() < 2 {
        return Vec::new();
    }

    let template = accelerators.get(actions::MAILBOX_INDEX);
    let mut section = vec![MenuNode::Separator];
    for (position, account) in accounts.iter().enumerate() {
        let selected = active_account_id == Some(account.id.as_str());
        section.push(
            ActionItem::new(
                account.label(),
                MenuCommand::SwitchAccount(account.id.clone()),
            )
            .with_accelerator(resolve_indexed_accelerator(template, position))
            .radio(selected)
            .into(),
        );
    }
    section
}

/// Radio entries for the active account's sub-services.
///
/// Rendered only when the account has services beyond the primary mail
/// view; the mail view itself always occupies the first radio slot.
fn service_section(
    accelerators: &AcceleratorMap,
    active_account: Option<&AccountSummary>,
    active_service_type: ServiceType,
) -> Vec<MenuNode> {
    let Some(account) = active_account else {
        return Vec::new();
    };
    if !account.has_additional_services() {
        return Vec::new();
    }

    let template = accelerators.get(actions::SERVICE_INDEX);
    let primary = ServiceSummary::new(ServiceType::Mail);
    let mut section = vec![MenuNode::Separator];
    for (position, service) in std::iter::once(&primary)
        .chain(account.services.iter())
        .enumerate()
    {
        let selected = service.service_type == active_service_type;
        section.push(
            ActionItem::new(
                service.label.clone(),
                MenuCommand::SwitchService {
                    account_id: account.id.clone(),
                    service_type: service.service_type,
                },
            )
            .with_accelerator(resolve_indexed_accelerator(template, position))
            .radio(selected)
            .into(),
        );
    }
    section
}
