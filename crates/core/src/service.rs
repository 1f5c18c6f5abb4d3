use serde::{Deserialize, Serialize};

/// The transactional-email services Mailbridge can relay through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "lowercase")]
pub enum ServiceKind {
    Mailgun,
    Sendgrid,
}

impl ServiceKind {
    /// Returns the service name as a lowercase string, matching the wire
    /// value and the provider's `name()`.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Mailgun => "mailgun",
            Self::Sendgrid => "sendgrid",
        }
    }

    /// Returns the other service.
    pub fn other(self) -> Self {
        match self {
            Self::Mailgun => Self::Sendgrid,
            Self::Sendgrid => Self::Mailgun,
        }
    }
}

impl std::fmt::Display for ServiceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An ordered default/fallback pair of services.
///
/// Always contains the two known services in opposite roles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServicePair {
    pub default: ServiceKind,
    pub fallback: ServiceKind,
}

impl ServicePair {
    /// Resolve the service pair from a requested provider identifier.
    ///
    /// `"sendgrid"` selects Sendgrid as default with Mailgun as fallback.
    /// Any other value -- including `"mailgun"`, a typo, or no value at all
    /// -- selects the Mailgun-first pair. Unrecognized identifiers are
    /// deliberately not an error.
    pub fn resolve(requested: Option<&str>) -> Self {
        let default = if requested == Some(ServiceKind::Sendgrid.as_str()) {
            ServiceKind::Sendgrid
        } else {
            ServiceKind::Mailgun
        };
        Self {
            default,
            fallback: default.other(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sendgrid_request_puts_sendgrid_first() {
        let pair = ServicePair::resolve(Some("sendgrid"));
        assert_eq!(pair.default, ServiceKind::Sendgrid);
        assert_eq!(pair.fallback, ServiceKind::Mailgun);
    }

    #[test]
    fn mailgun_request_puts_mailgun_first() {
        let pair = ServicePair::resolve(Some("mailgun"));
        assert_eq!(pair.default, ServiceKind::Mailgun);
        assert_eq!(pair.fallback, ServiceKind::Sendgrid);
    }

    #[test]
    fn missing_request_defaults_to_mailgun_first() {
        let pair = ServicePair::resolve(None);
        assert_eq!(pair.default, ServiceKind::Mailgun);
        assert_eq!(pair.fallback, ServiceKind::Sendgrid);
    }

    #[test]
    fn unrecognized_request_defaults_to_mailgun_first() {
        for requested in ["sendgird", "SENDGRID", "ses", ""] {
            let pair = ServicePair::resolve(Some(requested));
            assert_eq!(pair.default, ServiceKind::Mailgun, "requested: {requested:?}");
            assert_eq!(pair.fallback, ServiceKind::Sendgrid);
        }
    }

    #[test]
    fn pair_is_never_duplicated() {
        for requested in [None, Some("mailgun"), Some("sendgrid"), Some("typo")] {
            let pair = ServicePair::resolve(requested);
            assert_ne!(pair.default, pair.fallback);
        }
    }

    #[test]
    fn display_matches_wire_value() {
        assert_eq!(ServiceKind::Mailgun.to_string(), "mailgun");
        assert_eq!(ServiceKind::Sendgrid.to_string(), "sendgrid");
    }

    #[test]
    fn serde_roundtrip_uses_lowercase() {
        let kind: ServiceKind = serde_json::from_str("\"sendgrid\"").unwrap();
        assert_eq!(kind, ServiceKind::Sendgrid);
        assert_eq!(serde_json::to_string(&ServiceKind::Mailgun).unwrap(), "\"mailgun\"");
    }
}
