use crate::error::ApiError;
use crate::models::VersionInfo;
use crate::response::json_response;
use actix_web::HttpResponse;
use actix_web::http::StatusCode;

#[utoipa::path(
    get,
    path = "/version",
    responses(
        (status = 200, description = "Service version", body = VersionInfo),
        (status = 405, description = "Method not allowed")
    ),
    tag = "Version"
)]
pub async fn version() -> Result<HttpResponse, ApiError> {
    Ok(json_response(StatusCode::OK, &VersionInfo::current()))
}
