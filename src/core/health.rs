//! Liveness check for the page server

use axum::http::StatusCode;

/// `GET /health_check`: always `200 OK` with an empty body
pub async fn health_check() -> StatusCode {
    StatusCode::OK
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_health_check_returns_ok() {
        assert_eq!(health_check().await, StatusCode::OK);
    }
}
