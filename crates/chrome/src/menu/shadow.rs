//! Shadow accelerator matching
//!
//! An embedded web view can consume a keystroke before the native menu
//! sees it; the runtime then reports the input as prevented. This module
//! re-implements accelerator-to-keystroke matching over those reports so
//! the menu action still fires.

use crate::input::{InputEvent, KeyEventDescriptor};
use crate::platform::Platform;

/// Case-insensitive digit placeholder inside accelerator strings
const NUMBER_TOKEN: &str = "number";

/// Whether an observed input satisfies an accelerator string.
///
/// A `Number` placeholder expands into ten concrete candidates, one per
/// digit 0-9 substituted in place; the input matches when any candidate
/// does. A candidate that fails to parse simply does not match.
pub fn match_input_to_accelerator(
    input: &InputEvent,
    accelerator: &str,
    platform: Platform,
) -> bool {
    if accelerator.is_empty() {
        return false;
    }

    let lowered = accelerator.to_ascii_lowercase();
    if let Some(position) = lowered.find(NUMBER_TOKEN) {
        let head = &accelerator[..position];
        let tail = &accelerator[position + NUMBER_TOKEN.len()..];
        return (0..10).any(|digit| {
            let candidate = format!("{}{}{}", head, digit, tail);
            matches_concrete(input, &candidate, platform)
        });
    }

    matches_concrete(input, accelerator, platform)
}

fn matches_concrete(input: &InputEvent, accelerator: &str, platform: Platform) -> bool {
    match KeyEventDescriptor::parse(accelerator, platform) {
        Ok(descriptor) => descriptor.matches(input),
        Err(_) => false,
    }
}
