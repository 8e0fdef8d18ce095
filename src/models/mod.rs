/// # Health Status Response
///
/// Body of `GET /health`: a fixed `"healthy"` status, a short message and
/// the RFC 3339 UTC timestamp of the check.
///
/// ## Example JSON
/// ```json
/// {
///   "status": "healthy",
///   "message": "Service is running",
///   "timestamp": "2024-01-15T10:30:00Z"
/// }
/// ```
pub mod health;

/// Greeting request and response bodies shared by `GET /hello` and
/// `POST /api/v1/hello`.
pub mod greeting;

/// Static service identification returned by `GET /version`.
pub mod version;

pub use greeting::{DEFAULT_NAME, GreetingRequest, GreetingResponse};
pub use health::HealthStatus;
pub use version::VersionInfo;
