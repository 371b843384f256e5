use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Latest recorded dashboard snapshot as exposed by `GET /api/status`.
///
/// When nothing has been recorded yet the placeholder form is returned:
/// `status` is `"offline"`, counts are zero and the optional fields are null.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct StatusDto {
    pub status: String,
    pub total_members: u64,
    pub online_members: u64,
    pub last_update: Option<DateTime<Utc>>,
    pub guild_id: Option<u64>,
}

impl StatusDto {
    pub fn offline() -> Self {
        Self {
            status: "offline".to_string(),
            total_members: 0,
            online_members: 0,
            last_update: None,
            guild_id: None,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct HealthDto {
    pub status: String,
    pub timestamp: DateTime<Utc>,
}
