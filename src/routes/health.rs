use crate::error::ApiError;
use crate::models::HealthStatus;
use crate::response::json_response;
use actix_web::HttpResponse;
use actix_web::http::StatusCode;

/// # Health Check Endpoint
///
/// ## Response
///
/// - **200 OK**: JSON [`HealthStatus`]
/// - **405 Method Not Allowed**: any method other than GET
///
/// ## Example Response
///
/// ```json
/// {
///   "status": "healthy",
///   "message": "Service is running",
///   "timestamp": "2024-01-15T10:30:00Z"
/// }
/// ```
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service is healthy", body = HealthStatus),
        (status = 405, description = "Method not allowed")
    ),
    tag = "Health Check"
)]
pub async fn health() -> Result<HttpResponse, ApiError> {
    Ok(json_response(StatusCode::OK, &HealthStatus::healthy()))
}
