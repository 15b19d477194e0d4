use actix_web::{web, App, HttpServer};
use actix_cors::Cors;
use auth_server::{configure_app, AppError, AppState, Settings};
use dotenv::dotenv;
use std::net::TcpListener;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

fn build_cors(config: &Settings) -> Cors {
    if !config.cors.enabled {
        return Cors::default();
    }

    config
        .cors
        .allowed_origins
        .iter()
        .fold(Cors::default(), |cors, origin| cors.allowed_origin(origin))
        .allowed_methods(vec!["GET", "POST"])
        .allowed_headers(vec!["Authorization", "Content-Type"])
        .max_age(config.cors.max_age as usize)
}

#[actix_web::main]
async fn main() -> auth_server::Result<()> {
    dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .with_thread_ids(true)
        .with_file(true)
        .with_line_number(true)
        .init();

    let config = Settings::new()?;
    info!("Configuration loaded for environment: {}", config.environment);

    if config.auth.jwt_secret.is_none() {
        warn!("JWT secret is not configured; login requests will fail until it is set");
    }

    let state = web::Data::new(AppState::new(&config).await?);

    let listener = TcpListener::bind(format!("{}:{}", config.server.host, config.server.port))?;
    info!("Starting server at {}:{}", config.server.host, config.server.port);

    let server_config = config.clone();
    HttpServer::new(move || {
        App::new()
            .wrap(build_cors(&server_config))
            .app_data(state.clone())
            .configure(configure_app)
    })
    .listen(listener)?
    .workers(config.server.workers as usize)
    .run()
    .await
    .map_err(|e| AppError::InternalError(e.to_string()))?;

    Ok(())
}
