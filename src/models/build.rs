use std::collections::HashMap;
use std::fmt::{self, Display, Formatter};

use chrono::{DateTime, Duration, Utc};
use serde::Deserialize;

/// Cloud Build status record, decoded from the envelope payload
/// (protojson encoding of the Build message).
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Build {
    pub status: BuildStatus,
    pub id: String,
    pub start_time: Option<DateTime<Utc>>,
    pub finish_time: Option<DateTime<Utc>>,
    pub log_url: String,
    pub substitutions: HashMap<String, String>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BuildStatus {
    #[default]
    StatusUnknown,
    Pending,
    Queued,
    Working,
    Success,
    Failure,
    InternalError,
    Timeout,
    Cancelled,
    Expired,

    /// Status values introduced after this schema version.
    #[serde(other)]
    Unrecognized,
}

impl Build {
    pub fn decode(bytes: &[u8]) -> Result<Self, serde_json::Error> {
        serde_json::from_slice(bytes)
    }

    /// Wall-clock duration of the build, zero if it never finished.
    pub fn duration(&self) -> Duration {
        match (self.start_time, self.finish_time) {
            (Some(start), Some(finish)) => finish - start,
            _ => Duration::zero(),
        }
    }

    pub fn substitution(&self, key: &str) -> &str {
        self.substitutions.get(key).map(String::as_str).unwrap_or_default()
    }
}

impl BuildStatus {
    /// Terminal statuses are the ones after which no further
    /// status transition occurs.
    pub fn is_terminal(self) -> bool {
        matches!(
            self,
            BuildStatus::Cancelled
                | BuildStatus::Timeout
                | BuildStatus::Failure
                | BuildStatus::Success
        )
    }
}

impl Display for BuildStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            BuildStatus::StatusUnknown => write!(f, "STATUS_UNKNOWN"),
            BuildStatus::Pending => write!(f, "PENDING"),
            BuildStatus::Queued => write!(f, "QUEUED"),
            BuildStatus::Working => write!(f, "WORKING"),
            BuildStatus::Success => write!(f, "SUCCESS"),
            BuildStatus::Failure => write!(f, "FAILURE"),
            BuildStatus::InternalError => write!(f, "INTERNAL_ERROR"),
            BuildStatus::Timeout => write!(f, "TIMEOUT"),
            BuildStatus::Cancelled => write!(f, "CANCELLED"),
            BuildStatus::Expired => write!(f, "EXPIRED"),
            BuildStatus::Unrecognized => write!(f, "UNRECOGNIZED"),
        }
    }
}
