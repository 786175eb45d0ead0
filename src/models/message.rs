use serde::{Deserialize, Serialize};

/// Outbound chat webhook body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WebhookPayload {
    pub text: String,
}
