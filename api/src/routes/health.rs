use actix_web::{web, HttpResponse};

use rt_infra::DatabasePool;

/// Health check endpoint handler
pub async fn health_check(pool: web::Data<DatabasePool>) -> HttpResponse {
    let database_up = matches!(pool.health_check().await, Ok(true));

    let body = serde_json::json!({
        "status": if database_up { "healthy" } else { "degraded" },
        "database": if database_up { "up" } else { "down" },
        "service": "renttracker-api",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    });

    if database_up {
        HttpResponse::Ok().json(body)
    } else {
        HttpResponse::ServiceUnavailable().json(body)
    }
}
