use crate::models::responses::HealthResponse;
use axum::response::Json;

pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        service: "lookup-service".to_string(),
        status: "running".to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn reports_service_name_and_status() {
        let Json(body) = health_check().await;

        assert_eq!("lookup-service", body.service);
        assert_eq!("running", body.status);
    }
}
