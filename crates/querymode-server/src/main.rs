use axum::http::StatusCode;
use axum::{routing::post, Json, Router};
use serde::{Deserialize, Serialize};

use querymode_core::mode::actions::Action;
use querymode_core::mode::classify::classify;
use querymode_core::query::description::QueryDescription;

#[derive(Debug, Deserialize)]
struct ClassifyRequest {
    query: QueryDescription,
}

#[derive(Debug, Serialize)]
struct ClassifyResponse {
    mode: &'static str,
    actions: Vec<Action>,
}

async fn classify_query(
    Json(req): Json<ClassifyRequest>,
) -> Result<Json<ClassifyResponse>, (StatusCode, String)> {
    match classify(&req.query) {
        Ok(classification) => {
            tracing::info!(mode = classification.name(), "classified query");
            Ok(Json(ClassifyResponse {
                mode: classification.name(),
                actions: classification.actions().to_vec(),
            }))
        }
        Err(e) => {
            tracing::warn!("rejected query: {e}");
            Err((StatusCode::UNPROCESSABLE_ENTITY, e.to_string()))
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    tracing_subscriber::fmt().init();

    let host = std::env::var("SERVER_HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port = std::env::var("SERVER_PORT").unwrap_or_else(|_| "8080".to_string());
    let bind_addr = format!("{}:{}", host, port);

    let app = Router::new().route("/classify", post(classify_query));
    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    tracing::info!("server listening on {bind_addr}");
    axum::serve(listener, app).await?;
    Ok(())
}
