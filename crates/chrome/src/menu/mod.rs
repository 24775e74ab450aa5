//! Native application menu subsystem
//!
//! The builder produces a platform-neutral [`MenuTree`]; the manager owns
//! its lifecycle against the native platform; the shadow module recovers
//! accelerator dispatch for keystrokes the native menu never saw.

mod builder;
mod command;
mod manager;
mod node;
pub mod shadow;

pub use builder::MenuTreeBuilder;
pub use command::MenuCommand;
pub use manager::MenuManager;
pub use node::{ActionItem, MenuNode, MenuRole, MenuTree, RoleItem, SubmenuItem};
pub use shadow::match_input_to_accelerator;
