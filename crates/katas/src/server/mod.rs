mod calculator;
mod dates;
mod error;
mod extract;
mod items;
mod kaprekar;
mod shapes;
mod text;

pub use error::ApiError;
pub use extract::ApiJson;

use crate::prelude::{eprintln, *};
use axum::{
    routing::{get, post},
    Json, Router,
};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};

use katas_core::item::{ItemDecoder, DEFAULT_DELIMITER};

#[derive(Debug, clap::Parser)]
#[command(name = "serve")]
#[command(about = "Serve every exercise over HTTP")]
#[command(after_help = "EXAMPLES:
  katas serve --port 8080
  curl -X POST localhost:8080/api/items -H 'content-type: application/json' \\
    -d '{\"input\": \"Bread$$##12.5$$##10\"}'")]
pub struct App {
    /// Host to bind to
    #[arg(long, env = "KATAS_HOST", default_value = "127.0.0.1")]
    pub host: String,

    /// Port to listen on
    #[arg(short, long, env = "KATAS_PORT", default_value_t = 3000)]
    pub port: u16,

    /// Token separating the fields of an item record
    #[arg(long, env = "KATAS_ITEM_DELIMITER", default_value = DEFAULT_DELIMITER)]
    pub delimiter: String,
}

/// Read-only state shared by every handler
#[derive(Debug, Clone)]
pub struct AppState {
    pub global: crate::Global,
    pub decoder: ItemDecoder,
}

pub type SharedState = Arc<AppState>;

pub fn router(state: SharedState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(health))
        .route("/api/items", post(items::decode))
        .route(
            "/api/calculator/compare/{a}/{b}",
            get(calculator::float_compare),
        )
        .route(
            "/api/calculator/{op}/{a}/{b}/{decimals}",
            get(calculator::float_calculate),
        )
        .route(
            "/api/decimal-calculator/compare/{a}/{b}",
            get(calculator::decimal_compare),
        )
        .route(
            "/api/decimal-calculator/{op}/{a}/{b}/{decimals}",
            get(calculator::decimal_calculate),
        )
        .route("/api/dates/difference", post(dates::difference))
        .route("/api/dates/bounds", post(dates::bounds))
        .route("/api/dates/days", post(dates::days))
        .route("/api/dates/week", post(dates::week))
        .route("/api/text/count", post(text::count))
        .route("/api/text/upper", post(text::upper))
        .route("/api/text/lower", post(text::lower))
        .route("/api/text/repeated", post(text::repeated))
        .route("/api/text/replace", post(text::replace))
        .route("/api/text/concat", post(text::concat))
        .route("/api/kaprekar/{number}", get(kaprekar::check))
        .route("/api/shapes", post(shapes::generate))
        .layer(cors)
        .with_state(state)
}

pub async fn run(app: App, global: crate::Global) -> Result<()> {
    let addr = format!("{}:{}", app.host, app.port);

    if global.verbose {
        eprintln!("Starting server on {}...", addr);
        eprintln!("Item delimiter: {}", app.delimiter);
    }

    let state = Arc::new(AppState {
        global,
        decoder: ItemDecoder::new(app.delimiter),
    });

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| Error::Bind {
            addr: addr.clone(),
            reason: e.to_string(),
        })?;

    log::info!("listening on http://{}", addr);
    eprintln!("Listening on http://{}", addr);

    axum::serve(listener, router(state))
        .await
        .map_err(|e| Error::Server(e.to_string()))?;

    Ok(())
}

async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}

#[cfg(test)]
pub(crate) fn test_state() -> SharedState {
    Arc::new(AppState {
        global: crate::Global { verbose: false },
        decoder: ItemDecoder::default(),
    })
}
