use serde::{Deserialize, Serialize};

/// Confirmation returned by a provider after a successful send.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SendReceipt {
    /// Name of the provider that accepted the message.
    pub provider: String,
    /// Provider-specific response body, if any.
    pub body: serde_json::Value,
}

impl SendReceipt {
    /// Create a receipt for the named provider.
    #[must_use]
    pub fn new(provider: impl Into<String>, body: serde_json::Value) -> Self {
        Self {
            provider: provider.into(),
            body,
        }
    }
}
