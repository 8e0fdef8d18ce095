use crate::response::utc_timestamp;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

pub const HEALTHY: &str = "healthy";
pub const RUNNING_MESSAGE: &str = "Service is running";

/// # Health Status Response
///
/// Represents the liveness of the service at the moment of the check.
///
/// ## Fields
/// - `status`: always `"healthy"` while the process is answering requests
/// - `message`: fixed human-readable description
/// - `timestamp`: RFC 3339 UTC timestamp, seconds precision, `Z` suffix
#[derive(Serialize, Debug, PartialEq, Deserialize, ToSchema)]
pub struct HealthStatus {
    pub status: String,
    pub message: String,
    pub timestamp: String,
}

impl HealthStatus {
    pub fn healthy() -> Self {
        Self {
            status: HEALTHY.to_string(),
            message: RUNNING_MESSAGE.to_string(),
            timestamp: utc_timestamp(),
        }
    }
}
