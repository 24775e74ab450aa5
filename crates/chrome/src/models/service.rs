//! Sub-service model for account capabilities

use serde::{Deserialize, Serialize};

/// Type tag for a service hosted under an account.
///
/// Every account carries the primary `Mail` view; the remaining variants
/// are the additional services a user can enable per account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ServiceType {
    Mail,
    Calendar,
    Contacts,
    Storage,
    Notes,
    Photos,
    Messenger,
}

impl ServiceType {
    /// Default human-readable label for this service
    pub fn label(&self) -> &'static str {
        match self {
            ServiceType::Mail => "Mail",
            ServiceType::Calendar => "Calendar",
            ServiceType::Contacts => "Contacts",
            ServiceType::Storage => "Storage",
            ServiceType::Notes => "Notes",
            ServiceType::Photos => "Photos",
            ServiceType::Messenger => "Messenger",
        }
    }

    /// Stable identifier used in signatures and settings files
    pub fn as_str(&self) -> &'static str {
        match self {
            ServiceType::Mail => "mail",
            ServiceType::Calendar => "calendar",
            ServiceType::Contacts => "contacts",
            ServiceType::Storage => "storage",
            ServiceType::Notes => "notes",
            ServiceType::Photos => "photos",
            ServiceType::Messenger => "messenger",
        }
    }
}

/// One enabled sub-service under an account
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceSummary {
    /// Which service this is
    pub service_type: ServiceType,
    /// Label shown in the menu (defaults to the service's own label)
    pub label: String,
}

impl ServiceSummary {
    /// Create a summary with the service's default label
    pub fn new(service_type: ServiceType) -> Self {
        Self {
            service_type,
            label: service_type.label().to_string(),
        }
    }

    /// Override the display label
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_label() {
        let summary = ServiceSummary::new(ServiceType::Calendar);
        assert_eq!(summary.label, "Calendar");
    }

    #[test]
    fn test_label_override() {
        let summary = ServiceSummary::new(ServiceType::Storage).with_label("Drive");
        assert_eq!(summary.label, "Drive");
        assert_eq!(summary.service_type, ServiceType::Storage);
    }

    #[test]
    fn test_as_str_is_lowercase() {
        assert_eq!(ServiceType::Mail.as_str(), "mail");
        assert_eq!(ServiceType::Messenger.as_str(), "messenger");
    }
}
