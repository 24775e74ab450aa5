//! Chrome crate - window chrome for the Beacon mail client
//!
//! Beacon hosts multiple webmail accounts in embedded browser views; this
//! crate owns the native chrome wrapped around them:
//! - Account and sub-service projections the menu renders
//! - The keyboard accelerator map, factory defaults and indexed resolution
//! - Menu tree construction and lifecycle (install, swap, teardown)
//! - Shadow accelerator matching for keystrokes consumed by web views
//!   before the native menu sees them
//! - Collaborator contracts for the account store, window layer and
//!   native menu platform
//!
//! The crate has zero UI dependencies; native integration is supplied by
//! the embedder through the [`platform::MenuPlatform`] trait.

pub mod accelerators;
pub mod input;
pub mod menu;
pub mod models;
pub mod platform;
pub mod stores;
pub mod windows;

pub use accelerators::{
    AcceleratorChange, AcceleratorMap, AcceleratorSettings, actions, default_for,
    resolve_indexed_accelerator,
};
pub use input::{AcceleratorParseError, InputEvent, InputKind, KeyEventDescriptor};
pub use menu::{
    ActionItem, MenuCommand, MenuManager, MenuNode, MenuRole, MenuTree, MenuTreeBuilder, RoleItem,
    SubmenuItem, match_input_to_accelerator,
};
pub use models::{AccountSummary, ServiceSummary, ServiceType, accounts_signature};
pub use platform::{InMemoryMenuPlatform, MenuHandle, MenuPlatform, Platform};
pub use stores::{AccountStore, InMemoryAccountStore};
pub use windows::{NullWindowManager, WindowManager};
