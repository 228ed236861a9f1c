#![recursion_limit = "256"]

mod routes;
mod services;
mod state;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let port: u16 = std::env::var("PORT")
        .unwrap_or_else(|_| "3000".into())
        .parse()
        .expect("invalid PORT");

    let upstream_config = services::upstream::UpstreamConfig::from_env();
    tracing::info!(base_url = %upstream_config.base_url, "upstream API configured");

    let state = state::AppState::new(
        services::upstream::UpstreamService::new(upstream_config),
        state::GateConfig::from_env(),
    );

    let app = routes::app(state).expect("router assembly failed");
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .expect("failed to bind");

    tracing::info!(%port, "folio listening");
    axum::serve(listener, app).await.expect("server failed");
}
