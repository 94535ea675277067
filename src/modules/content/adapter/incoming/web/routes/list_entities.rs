use actix_web::{web, HttpResponse};

use crate::modules::content::adapter::incoming::web::{
    collection_error_response, CollectionResource,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

/// `GET /api/<collection>`: stored array order, unsorted.
pub async fn list_entities_handler<T: CollectionResource>(
    data: web::Data<AppState>,
) -> HttpResponse {
    match T::use_case(&data).list().await {
        Ok(items) => ApiResponse::success(items),
        Err(e) => collection_error_response::<T>(e),
    }
}

#[cfg(test)]
mod tests {
    use actix_web::{http::StatusCode, test, App};
    use serde_json::{json, Value};

    use crate::modules::content::adapter::incoming::web::configure_collection;
    use crate::modules::content::application::ports::incoming::use_cases::CollectionUseCaseError;
    use crate::modules::project::application::domain::Project;
    use crate::modules::storage::adapter::outgoing::InMemoryDocumentStore;
    use crate::modules::storage::application::ports::outgoing::DocumentKey;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::stubs::FailingCollectionUseCase;
    use maplit::hashmap;

    #[actix_web::test]
    async fn test_list_returns_raw_array_order() {
        let store = InMemoryDocumentStore::with_documents(hashmap! {
            DocumentKey::Projects => json!([
                { "id": "b", "title": "B", "order": 1, "createdAt": "2024-01-01T00:00:00Z" },
                { "id": "a", "title": "A", "order": 0, "createdAt": "2024-01-01T00:00:00Z" }
            ]),
        });
        let app_state = TestAppStateBuilder::default().with_store(store).build();

        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .configure(configure_collection::<Project>),
        )
        .await;

        let req = test::TestRequest::get().uri("/api/projects").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["success"], true);
        assert_eq!(body["data"][0]["id"], "b");
        assert_eq!(body["data"][1]["id"], "a");
    }

    #[actix_web::test]
    async fn test_list_never_written_is_empty() {
        let app_state = TestAppStateBuilder::default().build();

        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .configure(configure_collection::<Project>),
        )
        .await;

        let req = test::TestRequest::get().uri("/api/projects").to_request();
        let resp = test::call_service(&app, req).await;

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["data"], json!([]));
    }

    #[actix_web::test]
    async fn test_list_store_unavailable_is_503() {
        let app_state = TestAppStateBuilder::default()
            .with_projects(FailingCollectionUseCase::<Project>::new(
                CollectionUseCaseError::StoreUnavailable("disk gone".to_string()),
            ))
            .build();

        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .configure(configure_collection::<Project>),
        )
        .await;

        let req = test::TestRequest::get().uri("/api/projects").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::SERVICE_UNAVAILABLE);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["success"], false);
        assert_eq!(body["error"]["code"], "STORE_UNAVAILABLE");
    }
}
