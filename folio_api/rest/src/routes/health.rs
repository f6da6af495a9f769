use std::sync::Arc;

use axum::{
    extract::State,
    response::{IntoResponse, Response},
    routing, Json, Router,
};
use chrono::{DateTime, Utc};
use folio_core_health_contracts::{HealthFeatureService, HealthStatus};
use serde::Serialize;

pub fn router(service: Arc<impl HealthFeatureService>) -> Router<()> {
    Router::new()
        .route("/api/health", routing::get(health))
        .with_state(service)
}

#[derive(Serialize)]
struct HealthResponse {
    success: bool,
    message: &'static str,
    timestamp: DateTime<Utc>,
}

async fn health(service: State<Arc<impl HealthFeatureService>>) -> Response {
    let HealthStatus { timestamp } = service.get_status().await;

    Json(HealthResponse {
        success: true,
        message: "Backend server is running",
        timestamp,
    })
    .into_response()
}

#[cfg(test)]
mod tests {
    use axum::body::to_bytes;
    use chrono::TimeZone;
    use folio_core_health_contracts::MockHealthFeatureService;

    use super::*;

    #[tokio::test]
    async fn health_reports_liveness_and_the_current_time() {
        // Arrange
        let timestamp = chrono::Utc.with_ymd_and_hms(2024, 5, 17, 12, 30, 0).unwrap();
        let service =
            Arc::new(MockHealthFeatureService::new().with_get_status(HealthStatus { timestamp }));

        // Act
        let response = health(State(service)).await;

        // Assert
        assert_eq!(response.status(), 200);
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body = serde_json::from_slice::<serde_json::Value>(&body).unwrap();
        assert_eq!(
            body,
            serde_json::json!({
                "success": true,
                "message": "Backend server is running",
                "timestamp": "2024-05-17T12:30:00Z",
            })
        );
    }
}
