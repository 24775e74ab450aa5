//! Observed key input and accelerator parsing
//!
//! [`InputEvent`] is the keystroke shape the embedding runtime reports
//! for low-level input notifications. [`KeyEventDescriptor`] is the
//! expectation derived from an accelerator string; matching one against
//! an observed input is a subset-equality test, which is what lets the
//! shadow matcher reimplement native accelerator semantics.

use serde::{Deserialize, Serialize};

use crate::platform::Platform;

/// Kind tag of an observed input event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum InputKind {
    KeyDown,
    KeyUp,
    Char,
}

/// A keystroke observed by the embedding runtime
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InputEvent {
    /// Event type as reported by the runtime
    #[serde(rename = "type")]
    pub kind: InputKind,
    /// Logical key value (layout-dependent), e.g. `"a"`, `"Escape"`
    pub key: String,
    /// Physical key code, e.g. `"KeyA"`, `"Digit4"`
    pub code: String,
    #[serde(default)]
    pub shift: bool,
    #[serde(default)]
    pub control: bool,
    #[serde(default)]
    pub alt: bool,
    #[serde(default)]
    pub meta: bool,
}

impl InputEvent {
    /// A key-down event with no modifiers held
    pub fn key_down(key: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            kind: InputKind::KeyDown,
            key: key.into(),
            code: code.into(),
            shift: false,
            control: false,
            alt: false,
            meta: false,
        }
    }

    pub fn with_shift(mut self) -> Self {
        self.shift = true;
        self
    }

    pub fn with_control(mut self) -> Self {
        self.control = true;
        self
    }

    pub fn with_alt(mut self) -> Self {
        self.alt = true;
        self
    }

    pub fn with_meta(mut self) -> Self {
        self.meta = true;
        self
    }
}

/// Error for an accelerator string that cannot be parsed
#[derive(Debug, thiserror::Error)]
pub enum AcceleratorParseError {
    #[error("accelerator has no key token: {0:?}")]
    MissingKey(String),
    #[error("accelerator has more than one key token: {0:?}")]
    MultipleKeys(String),
    #[error("accelerator has an empty token: {0:?}")]
    EmptyToken(String),
}

/// Canonical expectation derived from an accelerator string.
///
/// Fields left `None` are not checked during matching. Digit keys are
/// carried as a `Digit<d>` code instead of a key so matching is
/// code-based and survives shifted layouts.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct KeyEventDescriptor {
    pub key: Option<String>,
    pub code: Option<String>,
    pub shift: Option<bool>,
    pub control: Option<bool>,
    pub alt: Option<bool>,
    pub meta: Option<bool>,
}

impl KeyEventDescriptor {
    /// Parse an accelerator string like `"CmdOrCtrl+Shift+K"`.
    ///
    /// Exactly one non-modifier token is required. `CmdOrCtrl` resolves
    /// to the meta modifier on macOS and control elsewhere.
    pub fn parse(accelerator: &str, platform: Platform) -> Result<Self, AcceleratorParseError> {
        let mut descriptor = Self::default();
        let mut key: Option<String> = None;

        for raw in accelerator.split('+') {
            let token = raw.trim();
            if token.is_empty() {
                return Err(AcceleratorParseError::EmptyToken(accelerator.to_string()));
            }
            match token.to_ascii_lowercase().as_str() {
                "ctrl" | "control" => descriptor.control = Some(true),
                "shift" => descriptor.shift = Some(true),
                "alt" | "option" => descriptor.alt = Some(true),
                "cmd" | "command" | "super" | "meta" => descriptor.meta = Some(true),
                "cmdorctrl" | "commandorcontrol" => {
                    if platform.is_macos() {
                        descriptor.meta = Some(true);
                    } else {
                        descriptor.control = Some(true);
                    }
                }
                _ => {
                    if key.is_some() {
                        return Err(AcceleratorParseError::MultipleKeys(
                            accelerator.to_string(),
                        ));
                    }
                    key = Some(normalize_key(token));
                }
            }
        }

        let Some(key) = key else {
            return Err(AcceleratorParseError::MissingKey(accelerator.to_string()));
        };

        // Digits match on the physical code, not the key value
        if key.len() == 1 && key.chars().next().is_some_and(|c| c.is_ascii_digit()) {
            descriptor.code = Some(format!("Digit{}", key));
        } else {
            descriptor.key = Some(key);
        }

        Ok(descriptor)
    }

    /// Subset-equality match against an observed input.
    ///
    /// Only the fields present on the descriptor are compared; key values
    /// compare case-insensitively.
    pub fn matches(&self, input: &InputEvent) -> bool {
        if let Some(key) = &self.key {
            if !key.eq_ignore_ascii_case(&input.key) {
                return false;
            }
        }
        if let Some(code) = &self.code {
            if code != &input.code {
                return false;
            }
        }
        if let Some(shift) = self.shift {
            if shift != input.shift {
                return false;
            }
        }
        if let Some(control) = self.control {
            if control != input.control {
                return false;
            }
        }
        if let Some(alt) = self.alt {
            if alt != input.alt {
                return false;
            }
        }
        if let Some(meta) = self.meta {
            if meta != input.meta {
                return false;
            }
        }
        true
    }
}

/// Normalize a key token to the event `key` value it produces
fn normalize_key(token: &str) -> String {
    match token.to_ascii_lowercase().as_str() {
        "plus" => "+".to_string(),
        "space" => " ".to_string(),
        "tab" => "Tab".to_string(),
        "esc" | "escape" => "Escape".to_string(),
        "enter" | "return" => "Enter".to_string(),
        "backspace" => "Backspace".to_string(),
        "delete" => "Delete".to_string(),
        "up" => "ArrowUp".to_string(),
        "down" => "ArrowDown".to_string(),
        "left" => "ArrowLeft".to_string(),
        "right" => "ArrowRight".to_string(),
        "home" => "Home".to_string(),
        "end" => "End".to_string(),
        "pageup" => "PageUp".to_string(),
        "pagedown" => "PageDown".to_string(),
        lower => {
            if lower.len() == 1 {
                lower.to_string()
            } else if let Some(number) = lower.strip_prefix('f') {
                // Function keys keep their canonical uppercase form
                if number.parse::<u8>().is_ok() {
                    lower.to_ascii_uppercase()
                } else {
                    token.to_string()
                }
            } else {
                token.to_string()
            }
        }
    }
}
