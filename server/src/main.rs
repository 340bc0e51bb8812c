mod config;
mod error;
mod proxy;
mod routes;
mod state;

use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    // A missing .env file is fine; real environment variables still apply.
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = config::ServerConfig::from_env().expect("invalid configuration");
    let state = state::AppState::new(config.proxy.clone()).expect("http client init failed");

    if !config.site_root.join("index.html").is_file() {
        tracing::warn!(site_root = %config.site_root.display(), "index.html not found; only /api will be useful");
    }

    let app = routes::app(state, &config.site_root);
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", config.port))
        .await
        .expect("failed to bind");

    tracing::info!(
        port = config.port,
        target = %config.proxy.target,
        change_origin = config.proxy.change_origin,
        secure = config.proxy.secure,
        "photoshare server listening"
    );
    axum::serve(listener, app).await.expect("server failed");
}
