use actix_web::{web, HttpResponse};
use serde_json::json;

use crate::state::AppState;

/// Reports whether the order store answers.
pub async fn ping(state: web::Data<AppState>) -> HttpResponse {
    match state.orders.ping().await {
        Ok(()) => HttpResponse::Ok().json(json!({ "status": "ok" })),
        Err(e) => {
            tracing::warn!(err = %e, "health check failed");
            HttpResponse::ServiceUnavailable().json(json!({
                "status": "unavailable",
                "erro": e.to_string(),
            }))
        }
    }
}
