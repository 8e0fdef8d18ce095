use actix_web::HttpResponse;
use actix_web::http::StatusCode;
use chrono::{SecondsFormat, Utc};
use serde::Serialize;

/// Current instant as RFC 3339 in UTC, whole seconds, `Z` suffix
/// (`2024-01-15T10:30:00Z`).
pub fn utc_timestamp() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true)
}

/// Writes `data` as the JSON body of a response with the given status.
///
/// Every response model is plain data, so serialization cannot fail in
/// practice; actix-web turns a failure into a 500 on its own.
pub fn json_response<T: Serialize>(status: StatusCode, data: &T) -> HttpResponse {
    HttpResponse::build(status).json(data)
}
