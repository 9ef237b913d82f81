use actix_web::{web, HttpResponse, Responder};
use humantime::format_duration;
use serde::Serialize;
use std::time::Duration;

use crate::{constants::START_TIME, repositories::user::UserRepository, AppState};

#[derive(Serialize)]
struct HealthCheckResponse {
    status: &'static str,
    version: &'static str,
    uptime: String,
    timestamp: String,
    start_at: String,
    database: &'static str,
    redis: &'static str,
}

async fn redis_status(state: &AppState) -> &'static str {
    let Some(pool) = &state.redis_pool else {
        return "Not configured";
    };

    match pool.get().await {
        Ok(mut conn) => {
            let pong: redis::RedisResult<String> = redis::cmd("PING").query_async(&mut conn).await;
            match pong {
                Ok(reply) if reply == "PONG" => "OK",
                _ => "Unavailable",
            }
        }
        Err(_) => "Unavailable",
    }
}

pub async fn health_check(state: web::Data<AppState>) -> impl Responder {
    let now_utc = chrono::Utc::now();
    let uptime_secs = now_utc.signed_duration_since(*START_TIME).num_seconds().max(0) as u64;

    let database = match state.repos.user_repo.check_connection().await {
        Ok(_) => "OK",
        Err(e) => {
            tracing::error!("Health check: database unavailable: {}", e);
            "Unavailable"
        }
    };
    let redis = redis_status(&state).await;

    let healthy = database == "OK";
    let body = HealthCheckResponse {
        status: if healthy { "healthy" } else { "degraded" },
        version: env!("CARGO_PKG_VERSION"),
        uptime: format_duration(Duration::from_secs(uptime_secs)).to_string(),
        timestamp: now_utc.to_rfc3339(),
        start_at: START_TIME.to_rfc3339(),
        database,
        redis,
    };

    if healthy {
        HttpResponse::Ok().json(body)
    } else {
        HttpResponse::ServiceUnavailable().json(body)
    }
}
