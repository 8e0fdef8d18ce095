use crate::error::ApiError;
use actix_web::{HttpResponse, Resource, Route, web};

/// # Health Check Endpoint
///
/// `GET /health`, liveness probe with a fixed `"healthy"` status and the
/// current timestamp.
pub mod health;

/// # Greeting Endpoints
///
/// - `GET /hello?name=...`: greeting built from the query string
/// - `POST /api/v1/hello`: greeting built from a JSON body `{ "name": ... }`
///
/// Both fall back to `"World"` when no name is supplied.
pub mod hello;

/// # Version Endpoint
///
/// `GET /version`, the service name and version of the running build.
pub mod version;


/// # Route Configuration
///
/// Binds the four fixed paths of the service:
///
/// ```text
/// GET  /health        - Service health status
/// GET  /hello         - Greeting from the `name` query parameter
/// POST /api/v1/hello  - Greeting from a JSON body
/// GET  /version       - Service version
/// ```
///
/// Every other method on these paths answers `405 Method Not Allowed`.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(endpoint("/health", web::get().to(health::health)))
        .service(endpoint("/hello", web::get().to(hello::hello_query)))
        .service(endpoint("/api/v1/hello", web::post().to(hello::hello_body)))
        .service(endpoint("/version", web::get().to(version::version)));
}

fn endpoint(path: &str, route: Route) -> Resource {
    web::resource(path)
        .route(route)
        .default_service(web::to(method_not_allowed))
}

pub async fn method_not_allowed() -> Result<HttpResponse, ApiError> {
    Err(ApiError::MethodNotAllowed)
}
