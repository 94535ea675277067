use actix_web::{get, web, Responder};

use super::about_error_response;
use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::about::application::domain::About;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Get the about record for editing
///
/// Falls back to the default record while nothing is stored.
#[utoipa::path(
    get,
    path = "/api/about",
    tag = "about",
    responses(
        (status = 200, description = "About record", body = inline(SuccessResponse<About>)),
        (status = 503, description = "Content store unavailable", body = ErrorResponse)
    )
)]
#[get("/api/about")]
pub async fn get_about_handler(data: web::Data<AppState>) -> impl Responder {
    match data.about.get().await {
        Ok(about) => ApiResponse::success(about),
        Err(e) => about_error_response(e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};
    use maplit::hashmap;
    use serde_json::{json, Value};

    use crate::modules::about::application::domain::default_about;
    use crate::modules::content::application::ports::incoming::use_cases::SingletonUseCaseError;
    use crate::modules::storage::adapter::outgoing::InMemoryDocumentStore;
    use crate::modules::storage::application::ports::outgoing::DocumentKey;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::stubs::FailingAboutUseCase;

    #[actix_web::test]
    async fn test_get_about_absent_returns_default() {
        let app_state = TestAppStateBuilder::default().build();

        let app = test::init_service(App::new().app_data(app_state).service(get_about_handler)).await;

        let req = test::TestRequest::get().uri("/api/about").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["data"], serde_json::to_value(default_about()).unwrap());
    }

    #[actix_web::test]
    async fn test_get_about_stored_record() {
        let store = InMemoryDocumentStore::with_documents(hashmap! {
            DocumentKey::About => json!({ "name": "Sam", "email": "sam@example.com" }),
        });
        let app_state = TestAppStateBuilder::default().with_store(store).build();

        let app = test::init_service(App::new().app_data(app_state).service(get_about_handler)).await;

        let req = test::TestRequest::get().uri("/api/about").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["data"]["name"], "Sam");
        assert_eq!(body["data"]["email"], "sam@example.com");
        assert_eq!(body["data"]["stats"]["projects"], "");
    }

    #[actix_web::test]
    async fn test_get_about_store_unavailable() {
        let app_state = TestAppStateBuilder::default()
            .with_about(FailingAboutUseCase::new(
                SingletonUseCaseError::StoreUnavailable("read failed".to_string()),
            ))
            .build();

        let app = test::init_service(App::new().app_data(app_state).service(get_about_handler)).await;

        let req = test::TestRequest::get().uri("/api/about").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::SERVICE_UNAVAILABLE);
    }
}
