//! Menu tree description
//!
//! The builder emits this platform-neutral tree and the platform
//! collaborator turns it into native menu objects. Emission order is
//! preserved by [`MenuTree::flatten`] and doubles as the shadow-matching
//! priority order.

use super::MenuCommand;

/// Native menu roles whose behavior is supplied by the platform
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuRole {
    About,
    Services,
    Hide,
    HideOthers,
    ShowAll,
    Quit,
    Undo,
    Redo,
    Cut,
    Copy,
    Paste,
    PasteAndMatchStyle,
    SelectAll,
    Minimize,
    CloseWindow,
    ToggleFullscreen,
}

/// A leaf entry that dispatches a command when clicked
#[derive(Debug, Clone, PartialEq)]
pub struct ActionItem {
    pub label: String,
    pub accelerator: Option<String>,
    pub command: MenuCommand,
    /// Radio state; `None` renders a plain item
    pub selected: Option<bool>,
}

impl ActionItem {
    pub fn new(label: impl Into<String>, command: MenuCommand) -> Self {
        Self {
            label: label.into(),
            accelerator: None,
            command,
            selected: None,
        }
    }

    /// Attach an accelerator; empty strings mean "no shortcut hint"
    pub fn with_accelerator<S: Into<String>>(mut self, accelerator: Option<S>) -> Self {
        self.accelerator = accelerator.map(Into::into).filter(|a| !a.is_empty());
        self
    }

    /// Render as a radio entry with the given checked state
    pub fn radio(mut self, selected: bool) -> Self {
        self.selected = Some(selected);
        self
    }
}

/// A native-role entry
#[derive(Debug, Clone, PartialEq)]
pub struct RoleItem {
    pub role: MenuRole,
    pub accelerator: Option<String>,
}

impl RoleItem {
    pub fn new(role: MenuRole) -> Self {
        Self {
            role,
            accelerator: None,
        }
    }

    /// Attach an accelerator; empty strings mean "no shortcut hint"
    pub fn with_accelerator<S: Into<String>>(mut self, accelerator: Option<S>) -> Self {
        self.accelerator = accelerator.map(Into::into).filter(|a| !a.is_empty());
        self
    }
}

/// A labeled nested menu
#[derive(Debug, Clone, PartialEq)]
pub struct SubmenuItem {
    pub label: String,
    pub children: Vec<MenuNode>,
}

/// One native menu entry
#[derive(Debug, Clone, PartialEq)]
pub enum MenuNode {
    Separator,
    Action(ActionItem),
    Role(RoleItem),
    Submenu(SubmenuItem),
}

impl MenuNode {
    /// A plain action entry with no accelerator
    pub fn action(label: impl Into<String>, command: MenuCommand) -> Self {
        MenuNode::Action(ActionItem::new(label, command))
    }

    /// A labeled submenu
    pub fn submenu(label: impl Into<String>, children: Vec<MenuNode>) -> Self {
        MenuNode::Submenu(SubmenuItem {
            label: label.into(),
            children,
        })
    }

    /// Accelerator carried by this entry, if any
    pub fn accelerator(&self) -> Option<&str> {
        match self {
            MenuNode::Action(item) => item.accelerator.as_deref(),
            MenuNode::Role(item) => item.accelerator.as_deref(),
            _ => None,
        }
    }
}

impl From<ActionItem> for MenuNode {
    fn from(item: ActionItem) -> Self {
        MenuNode::Action(item)
    }
}

impl From<RoleItem> for MenuNode {
    fn from(item: RoleItem) -> Self {
        MenuNode::Role(item)
    }
}

/// Ordered sequence of top-level menus
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MenuTree {
    pub menus: Vec<MenuNode>,
}

impl MenuTree {
    pub fn new(menus: Vec<MenuNode>) -> Self {
        Self { menus }
    }

    /// Accelerator-bearing leaves in emission order.
    ///
    /// Walks every submenu recursively; the resulting order is the
    /// priority order for shadow matching.
    pub fn flatten(&self) -> Vec<&MenuNode> {
        let mut leaves = Vec::new();
        for node in &self.menus {
            collect_leaves(node, &mut leaves);
        }
        leaves
    }
}

fn collect_leaves<'a>(node: &'a MenuNode, leaves: &mut Vec<&'a MenuNode>) {
    match node {
        MenuNode::Submenu(submenu) => {
            for child in &submenu.children {
                collect_leaves(child, leaves);
            }
        }
        MenuNode::Action(item) if item.accelerator.is_some() => leaves.push(node),
        MenuNode::Role(item) if item.accelerator.is_some() => leaves.push(node),
        _ => {}
    }
}
