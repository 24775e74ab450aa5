//! Account projection consumed by the menu subsystem

use serde::{Deserialize, Serialize};

use super::{ServiceSummary, ServiceType};

/// Label used when an account has no display name
pub const UNTITLED_ACCOUNT: &str = "Untitled";

/// Read-only projection of a configured account.
///
/// Recreated from the account store on every change notification; the
/// menu subsystem only ever holds the latest snapshot (plus the previous
/// one for diffing) and never mutates it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccountSummary {
    /// Stable account identifier
    pub id: String,
    /// User-visible name, if one is configured
    pub display_name: Option<String>,
    /// Enabled additional services in display order (primary mail view excluded)
    pub services: Vec<ServiceSummary>,
}

impl AccountSummary {
    /// Create a summary with no display name and no additional services
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            display_name: None,
            services: Vec::new(),
        }
    }

    /// Set the display name
    pub fn with_display_name(mut self, name: impl Into<String>) -> Self {
        self.display_name = Some(name.into());
        self
    }

    /// Replace the enabled additional services
    pub fn with_services(mut self, services: Vec<ServiceSummary>) -> Self {
        self.services = services;
        self
    }

    /// Enable one additional service with its default label
    pub fn with_service(mut self, service_type: ServiceType) -> Self {
        self.services.push(ServiceSummary::new(service_type));
        self
    }

    /// Display label, falling back when no name is configured
    pub fn label(&self) -> &str {
        self.display_name.as_deref().unwrap_or(UNTITLED_ACCOUNT)
    }

    /// Whether the account has services beyond the primary mail view
    pub fn has_additional_services(&self) -> bool {
        !self.services.is_empty()
    }
}

/// Flattened textual summary of an account list.
///
/// Joins every account's label with its enabled service types. The menu
/// lifecycle treats two lists with equal signatures as unchanged; any
/// rename, reorder or service toggle that is user-visible in the menu
/// alters the signature.
pub fn accounts_signature(accounts: &[AccountSummary]) -> String {
    accounts
        .iter()
        .map(|account| {
            let services: Vec<&str> = account
                .services
                .iter()
                .map(|s| s.service_type.as_str())
                .collect();
            format!("{}:{}", account.label(), services.join(","))
        })
        .collect::<Vec<_>>()
        .join(";")
}
