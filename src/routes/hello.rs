use crate::error::ApiError;
use crate::models::{GreetingRequest, GreetingResponse};
use crate::response::json_response;
use actix_web::http::StatusCode;
use actix_web::{HttpResponse, web};

/// Decodes the first JSON value of a greeting body.
///
/// Content type is not checked and anything after the first value is left
/// unread. A `null` body counts as an empty request; an empty body or a
/// value that is not an object is [`ApiError::InvalidInput`].
pub fn decode_body(body: &[u8]) -> Result<GreetingRequest, ApiError> {
    let mut values =
        serde_json::Deserializer::from_slice(body).into_iter::<Option<GreetingRequest>>();
    match values.next() {
        Some(Ok(request)) => Ok(request.unwrap_or_default()),
        Some(Err(err)) => {
            tracing::debug!(error = %err, "rejected greeting body");
            Err(ApiError::InvalidInput)
        }
        None => Err(ApiError::InvalidInput),
    }
}

/// # Query Greeting Endpoint
///
/// ## Request
/// - Method: GET
/// - Query: `name` (optional); absent or empty means `"World"`. Only the
///   first `name` is read.
///
/// ## Response
/// - **200 OK**: `{ "greeting": "Welcome, {name}! This is the hello endpoint.", "timestamp": ... }`
/// - **405 Method Not Allowed**
///
/// The name is embedded verbatim, markup included.
#[utoipa::path(
    get,
    path = "/hello",
    params(GreetingRequest),
    responses(
        (status = 200, description = "Greeting", body = GreetingResponse),
        (status = 405, description = "Method not allowed")
    ),
    tag = "Greeting"
)]
pub async fn hello_query(
    query: web::Query<Vec<(String, String)>>,
) -> Result<HttpResponse, ApiError> {
    let request = GreetingRequest::from_query_pairs(query.into_inner());
    let response = GreetingResponse::welcome(request.name_or_default());
    Ok(json_response(StatusCode::OK, &response))
}

/// # Body Greeting Endpoint
///
/// ## Request
/// - Method: POST
/// - Body: JSON object with optional `name` field
///
/// ## Responses
/// - **200 OK**: `{ "greeting": "Hello, {name}!", "timestamp": ... }`
/// - **400 Bad Request**: body missing, not valid JSON, or not an object
/// - **405 Method Not Allowed**
///
/// ## Example Request
/// ```json
/// { "name": "Ann" }
/// ```
#[utoipa::path(
    post,
    path = "/api/v1/hello",
    request_body = GreetingRequest,
    responses(
        (status = 200, description = "Greeting", body = GreetingResponse),
        (status = 400, description = "Invalid request body"),
        (status = 405, description = "Method not allowed")
    ),
    tag = "Greeting"
)]
pub async fn hello_body(body: web::Bytes) -> Result<HttpResponse, ApiError> {
    let request = decode_body(&body)?;
    let response = GreetingResponse::hello(request.name_or_default());
    Ok(json_response(StatusCode::OK, &response))
}
