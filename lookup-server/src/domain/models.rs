use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Placeholder for any field an IP provider did not report.
pub const NOT_AVAILABLE: &str = "N/A";

pub const ALL_PROVIDERS_FAILED: &str = "All services failed to retrieve IP information.";

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfileRecord {
    pub full_name: Option<String>,
    /// Base64 of the HD profile picture bytes.
    pub profile_picture: Option<String>,
    pub biography: Option<String>,
    pub following_count: u64,
    pub followers_count: u64,
    pub posts_count: u64,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct IpInfoRecord {
    pub ip: String,
    pub org: String,
    pub country_name: String,
    pub region: String,
    pub city: String,
    /// Number or string as reported upstream, `"N/A"` when missing.
    pub latitude: Value,
    pub longitude: Value,
    pub timezone: String,
    pub information_source: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum IpInfoResponse {
    Found(IpInfoRecord),
    Failed { error: String },
}

impl IpInfoResponse {
    pub fn all_failed() -> Self {
        IpInfoResponse::Failed {
            error: ALL_PROVIDERS_FAILED.to_string(),
        }
    }
}
