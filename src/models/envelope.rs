use base64::{Engine, engine::general_purpose::STANDARD as BASE64};
use serde::Deserialize;

/// Pub/Sub push envelope as delivered to the inbound endpoint.
/// https://cloud.google.com/pubsub/docs/reference/rest/v1/PubsubMessage
#[derive(Debug, Clone, Deserialize)]
pub struct PushEnvelope {
    pub message: PushMessage,

    #[serde(default)]
    pub subscription: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PushMessage {
    #[serde(default)]
    pub attributes: MessageAttributes,

    /// Base64-encoded build record. May be empty; decoding the record
    /// from an empty payload fails downstream.
    #[serde(default)]
    pub data: String,

    #[serde(default)]
    pub id: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct MessageAttributes {
    #[serde(rename = "buildId", default)]
    pub build_id: String,

    #[serde(default)]
    pub status: String,
}

impl PushEnvelope {
    pub fn decode(bytes: &[u8]) -> Result<Self, serde_json::Error> {
        serde_json::from_slice(bytes)
    }

    pub fn payload(&self) -> Result<Vec<u8>, base64::DecodeError> {
        BASE64.decode(&self.message.data)
    }
}
