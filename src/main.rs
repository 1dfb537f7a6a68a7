mod config;
mod error;
mod model;
mod routes;
mod services;
mod state;

use services::manager::BoardManager;
use services::provider::{BoardProvider, JsonFileProvider};
use services::seed::SeedProvider;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    let config = config::AppConfig::from_env().expect("invalid configuration");

    let provider: Box<dyn BoardProvider> = match &config.seed_path {
        Some(path) => {
            let provider = JsonFileProvider::load(path).expect("failed to load seed file");
            tracing::info!(path = %path.display(), "loaded boards from seed file");
            Box::new(provider)
        }
        None => {
            tracing::info!("no BOARD_SEED_PATH set, using built-in demo boards");
            Box::new(SeedProvider)
        }
    };

    let manager = BoardManager::new(provider.as_ref(), config.baseline_policy, config.default_attendant.as_deref())
        .expect("failed to initialize board manager");
    tracing::info!(policy = %manager.policy(), attendant = manager.active_attendant(), "board manager ready");
    let state = state::AppState::new(manager);

    let app = routes::app(state);
    let port = config.port;
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .expect("failed to bind");

    tracing::info!(%port, "convoboard listening");
    axum::serve(listener, app).await.expect("server failed");
}
