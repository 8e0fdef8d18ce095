use actix_web::{App, HttpServer, middleware::Logger};
use example_service::config::Config;
use example_service::error::ServerError;
use example_service::{routes, telemetry};

/// Example Service Entry Point
///
/// Launches the Actix-web HTTP server with the four fixed endpoints
/// (see [`routes::configure`]).
///
/// # Configuration
/// - `PORT`: listen port, `8080` when unset or empty
/// - `RUST_LOG`: log filter, `info` by default
/// - Environment variables are also loaded from a `.env` file if present
///
/// A port that cannot be parsed or bound ends the process with a non-zero
/// exit status.
#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    telemetry::init();

    let config = Config::from_env()?;
    let addr = config.bind_addr();

    tracing::info!("Server starting on port {}", config.port);

    let server = HttpServer::new(|| {
        App::new()
            .wrap(Logger::default())
            .configure(routes::configure)
    })
    .bind(&addr)
    .map_err(|source| {
        tracing::error!(%addr, error = %source, "failed to bind listener");
        ServerError::Bind {
            addr: addr.clone(),
            source,
        }
    })?;

    server.run().await.map_err(ServerError::from)?;
    Ok(())
}
