use std::sync::Arc;

use tower_http::cors::CorsLayer;
use tracing::info;

use rag_relay::config::Config;
use rag_relay::routes;
use rag_relay::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let config = Config::from_env()?;
    let state = Arc::new(AppState::new(&config));

    let cors = CorsLayer::very_permissive();

    let app = routes::create_router().with_state(state).layer(cors);

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    info!("chat front end listening on http://{}", config.bind_addr);
    axum::serve(listener, app).await?;

    Ok(())
}
