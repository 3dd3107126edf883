use actix_web::HttpServer;
use skycast_api::{AppState, LoggingConfig, create_app, logging::init_tracing};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // A missing .env file is fine; the environment may already be set
    let dotenv = dotenvy::dotenv();
    init_tracing(&LoggingConfig::from_env());
    if let Err(e) = dotenv
        && !e.not_found()
    {
        tracing::warn!(error = %e, "Failed to load .env file");
    }

    let state = AppState::from_env().map_err(|e| {
        tracing::error!(error = %e, "Failed to initialise application");
        std::io::Error::other(e)
    })?;

    let server = state.settings.server.clone();
    tracing::info!(
        host = %server.host,
        port = server.port,
        environment = %server.environment,
        frontend = %server.frontend_url,
        history_capacity = state.history.capacity(),
        "SkyCast API listening on http://{}:{}",
        server.host,
        server.port
    );

    let mut http = HttpServer::new(move || create_app(state.clone()));
    if let Some(workers) = server.workers {
        http = http.workers(workers);
    }

    http.bind((server.host.as_str(), server.port))?
        .run()
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}
