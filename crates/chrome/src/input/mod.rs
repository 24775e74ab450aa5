//! Key input events and accelerator-derived expectations

mod event;

pub use event::{AcceleratorParseError, InputEvent, InputKind, KeyEventDescriptor};
