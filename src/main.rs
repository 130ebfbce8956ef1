// main.rs only boots the router and server

use std::env;

use tracing::{info, warn};

use grocer_backend::catalog::CatalogSource;
use grocer_backend::logging::init_logging;
use grocer_backend::router::app_router;
use grocer_backend::state::AppState;

#[tokio::main]
async fn main() {
    dotenv::dotenv().ok();
    init_logging();

    // Resolved once at startup; read-only for the process lifetime.
    let catalog = CatalogSource::resolve();
    match catalog.path() {
        Some(path) => info!("serving catalog from {}", path.display()),
        None => warn!("no catalog file found; /products will report the failure"),
    }

    let app = app_router(AppState { catalog });

    let port: u16 = env::var("PORT").ok().and_then(|s| s.parse().ok()).unwrap_or(5000);
    let bind_addr = format!("0.0.0.0:{}", port);
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .unwrap();

    info!("listening on {} (visit http://127.0.0.1:{})", bind_addr, port);
    axum::serve(listener, app).await.unwrap();
}
