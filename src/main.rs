mod config;
mod error;
mod routes;
mod state;
mod upstream;

#[tokio::main]
async fn main() {
    let dotenv = dotenvy::dotenv();
    tracing_subscriber::fmt::init();
    if let Err(e) = dotenv {
        tracing::debug!(error = %e, "no .env file loaded");
    }

    let config = config::AppConfig::from_env().expect("invalid configuration");
    for resource in client::net::types::RESOURCES {
        match config.upstreams.get(resource) {
            Some(url) => tracing::info!(resource, %url, "upstream configured"),
            None => tracing::warn!(resource, "no upstream configured; requests will return 503"),
        }
    }

    let state = state::AppState::new(&config).expect("upstream client init failed");
    let app = routes::leptos_app(state).expect("leptos app init failed");

    let port = config.port;
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .expect("failed to bind");

    tracing::info!(%port, "adminboard listening");
    axum::serve(listener, app).await.expect("server failed");
}
