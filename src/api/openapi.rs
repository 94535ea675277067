use actix_web::{get, HttpResponse, Responder};
use utoipa::openapi::path::{HttpMethod, OperationBuilder};
use utoipa::openapi::Response;
use utoipa::OpenApi;

use crate::api::schemas::{ErrorDetail, ErrorResponse, SuccessResponse};

use crate::about::application::domain::{About, AboutStats};
use crate::award::application::domain::{Award, AwardCategory, AwardDraft};
use crate::content::adapter::incoming::web::routes::{
    DeleteEntityResponse, MoveEntityRequest, MoveEntityResponse, ReorderEntitiesRequest,
};
use crate::experience::application::domain::{Experience, ExperienceDraft};
use crate::project::application::domain::{
    Project, ProjectContribution, ProjectDraft, ProjectLink,
};
use crate::skill::application::domain::{Skill, SkillDraft};
use crate::storage::adapter::incoming::web::routes::SaveDocumentRequest;
use crate::storage::application::ports::outgoing::DocumentKey;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Portfolio CMS API",
        version = "1.0.0",
        description = "Content store behind the portfolio site and its admin dashboard",
        contact(
            name = "API Support",
            email = "support@example.com"
        )
    ),
    paths(
        // Raw documents
        crate::storage::adapter::incoming::web::routes::get_document_handler,
        crate::storage::adapter::incoming::web::routes::save_document_handler,

        // About
        crate::about::adapter::incoming::web::routes::get_about_handler,
        crate::about::adapter::incoming::web::routes::put_about_handler,
        crate::about::adapter::incoming::web::routes::get_public_about_handler,
    ),
    components(
        schemas(
            // Response wrappers
            SuccessResponse<About>,
            ErrorResponse,
            ErrorDetail,

            // Documents
            DocumentKey,
            SaveDocumentRequest,

            // About
            About,
            AboutStats,

            // Collections
            Project,
            ProjectDraft,
            ProjectContribution,
            ProjectLink,
            Experience,
            ExperienceDraft,
            Skill,
            SkillDraft,
            Award,
            AwardDraft,
            AwardCategory,
            ReorderEntitiesRequest,
            MoveEntityRequest,
            MoveEntityResponse,
            DeleteEntityResponse
        )
    ),
    modifiers(&CollectionPathsAddon),
    tags(
        (name = "documents", description = "Raw document read and overwrite"),
        (name = "about", description = "About record management"),
        (name = "projects", description = "Project management endpoints"),
        (name = "experiences", description = "Experience management endpoints"),
        (name = "skills", description = "Skill management endpoints"),
        (name = "awards", description = "Award management endpoints"),
        (name = "public", description = "Read-only endpoints for the public site"),
    )
)]
pub struct ApiDoc;

/// Collection routes are registered through generic handlers, which the
/// `utoipa::path` macro cannot describe, so their operations are added here.
struct CollectionPathsAddon;

const COLLECTIONS: [(&str, &str); 4] = [
    ("projects", "Project"),
    ("experiences", "Experience"),
    ("skills", "Skill"),
    ("awards", "Award"),
];

impl utoipa::Modify for CollectionPathsAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        for (path, label) in COLLECTIONS {
            let base = format!("/api/{path}");
            let item = format!("{base}/{{id}}");

            let operations = [
                (
                    base.clone(),
                    HttpMethod::Get,
                    format!("List {path} in stored order"),
                    "200",
                    path,
                ),
                (
                    base.clone(),
                    HttpMethod::Post,
                    format!("Create a {label}"),
                    "201",
                    path,
                ),
                (
                    item.clone(),
                    HttpMethod::Patch,
                    format!("Partially update a {label}"),
                    "200",
                    path,
                ),
                (
                    item.clone(),
                    HttpMethod::Delete,
                    format!("Delete a {label}"),
                    "200",
                    path,
                ),
                (
                    format!("{base}/order"),
                    HttpMethod::Put,
                    format!("Reorder {path} by id sequence"),
                    "204",
                    path,
                ),
                (
                    format!("{base}/categories"),
                    HttpMethod::Get,
                    format!("Category suggestions for {path}"),
                    "200",
                    path,
                ),
                (
                    format!("{item}/move"),
                    HttpMethod::Post,
                    format!("Move a {label} to a display position"),
                    "200",
                    path,
                ),
                (
                    format!("/api/public/{path}"),
                    HttpMethod::Get,
                    format!("List {path} in display order"),
                    "200",
                    "public",
                ),
            ];

            for (route, method, summary, status, tag) in operations {
                let mut builder = OperationBuilder::new()
                    .tag(tag)
                    .summary(Some(summary))
                    .response(status, Response::new("Success"));
                if !matches!(method, HttpMethod::Get) {
                    builder = builder.response(
                        "409",
                        Response::new("Stored document does not decode, nothing written"),
                    );
                }
                let operation = builder
                    .response("503", Response::new("Content store unavailable"))
                    .build();

                openapi
                    .paths
                    .add_path_operation(route, vec![method], operation);
            }
        }
    }
}

#[get("/api-docs/openapi.json")]
pub async fn openapi_json() -> impl Responder {
    HttpResponse::Ok().json(ApiDoc::openapi())
}
