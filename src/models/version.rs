use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

pub const VERSION: &str = "1.0.0";
pub const SERVICE_NAME: &str = "example-service";

/// Identification of the service, a fixed body.
#[derive(Serialize, Debug, PartialEq, Deserialize, ToSchema)]
pub struct VersionInfo {
    pub version: String,
    pub service: String,
}

impl VersionInfo {
    pub fn current() -> Self {
        Self {
            version: VERSION.to_string(),
            service: SERVICE_NAME.to_string(),
        }
    }
}
