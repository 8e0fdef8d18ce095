use utoipa::OpenApi;

/// OpenAPI description of the service, generated at compile time from the
/// `#[utoipa::path]` annotations on the route handlers.
///
/// # Endpoints
/// - Health Check: `GET /health`
/// - Greeting: `GET /hello`, `POST /api/v1/hello`
/// - Version: `GET /version`
///
/// The document is not mounted on the router; it is exported for tooling
/// (client generation, contract checks).
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health::health,
        crate::routes::hello::hello_query,
        crate::routes::hello::hello_body,
        crate::routes::version::version,
    ),
    components(
        schemas(
            crate::models::HealthStatus,
            crate::models::GreetingRequest,
            crate::models::GreetingResponse,
            crate::models::VersionInfo
        )
    ),
    tags(
        (name = "Health Check", description = "Service health monitoring endpoints"),
        (name = "Greeting", description = "Greeting endpoints"),
        (name = "Version", description = "Build identification")
    ),
    info(
        description = "Minimal HTTP service with health, greeting and version endpoints",
        title = "Example Service",
        version = "1.0.0",
    )
)]
pub struct ApiDoc;
