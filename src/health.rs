use actix_web::{get, web, HttpResponse, Responder};
use serde::Serialize;
use tracing::warn;

use crate::AppState;

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
}

#[derive(Serialize)]
struct ReadinessResponse {
    status: &'static str,
    store: &'static str,
}

/// LIVENESS PROBE
/// - No I/O
#[get("/health")]
pub async fn health() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse { status: "ok" })
}

/// READINESS PROBE
/// - Pings the document store
#[get("/ready")]
pub async fn readiness(data: web::Data<AppState>) -> impl Responder {
    match data.documents.ping().await {
        Ok(()) => HttpResponse::Ok().json(ReadinessResponse {
            status: "ok",
            store: "ok",
        }),
        Err(e) => {
            warn!("Readiness check failed: {}", e);
            HttpResponse::ServiceUnavailable().json(ReadinessResponse {
                status: "unhealthy",
                store: "unhealthy",
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};
    use serde_json::{json, Value};

    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::stubs::UnavailableDocumentStore;

    #[actix_web::test]
    async fn test_health_is_ok() {
        let app = test::init_service(App::new().service(health)).await;

        let req = test::TestRequest::get().uri("/health").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body, json!({ "status": "ok" }));
    }

    #[actix_web::test]
    async fn test_ready_when_store_answers() {
        let app_state = TestAppStateBuilder::default().build();
        let app = test::init_service(App::new().app_data(app_state).service(readiness)).await;

        let req = test::TestRequest::get().uri("/ready").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
    }

    #[actix_web::test]
    async fn test_not_ready_when_store_fails() {
        let app_state = TestAppStateBuilder::default()
            .with_documents(UnavailableDocumentStore)
            .build();
        let app = test::init_service(App::new().app_data(app_state).service(readiness)).await;

        let req = test::TestRequest::get().uri("/ready").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::SERVICE_UNAVAILABLE);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["store"], "unhealthy");
    }
}
