//! Collaborator stores feeding the menu subsystem

mod accounts;

pub use accounts::{AccountStore, InMemoryAccountStore};
