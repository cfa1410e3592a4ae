use axum::{extract::State, Json};
use serde_json::{json, Value};

use crate::state::AppState;

/// GET /health
/// Liveness plus the generation model this instance talks to.
pub async fn health_handler(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "ok",
        "service": "hr-api",
        "version": env!("CARGO_PKG_VERSION"),
        "model": state.config.gemini_model,
    }))
}
