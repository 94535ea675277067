pub mod create_entity;
pub mod delete_entity;
pub mod get_categories;
pub mod get_public_entities;
pub mod list_entities;
pub mod move_entity;
pub mod patch_entity;
pub mod reorder_entities;

pub use create_entity::create_entity_handler;
pub use delete_entity::{delete_entity_handler, DeleteEntityResponse};
pub use get_categories::get_categories_handler;
pub use get_public_entities::get_public_entities_handler;
pub use list_entities::list_entities_handler;
pub use move_entity::{move_entity_handler, MoveEntityRequest, MoveEntityResponse};
pub use patch_entity::patch_entity_handler;
pub use reorder_entities::{reorder_entities_handler, ReorderEntitiesRequest};

use actix_web::{guard, web};

use super::CollectionResource;

/// Registers the admin and public routes of one collection.
///
/// `/order` and `/categories` are guarded to the one method they serve, so
/// any other method on those paths falls through to `/{id}` and an entity
/// may use either word as its id.
pub fn configure_collection<T: CollectionResource>(cfg: &mut web::ServiceConfig) {
    let base = format!("/api/{}", T::PATH);

    cfg.service(
        web::resource(format!("{base}/order"))
            .guard(guard::Put())
            .route(web::put().to(reorder_entities_handler::<T>)),
    )
    .service(
        web::resource(format!("{base}/categories"))
            .guard(guard::Get())
            .route(web::get().to(get_categories_handler::<T>)),
    )
    .service(
        web::resource(base.clone())
            .route(web::get().to(list_entities_handler::<T>))
            .route(web::post().to(create_entity_handler::<T>)),
    )
    .service(
        web::resource(format!("{base}/{{id}}"))
            .route(web::patch().to(patch_entity_handler::<T>))
            .route(web::delete().to(delete_entity_handler::<T>)),
    )
    .service(
        web::resource(format!("{base}/{{id}}/move"))
            .route(web::post().to(move_entity_handler::<T>)),
    )
    .service(
        web::resource(format!("/api/public/{}", T::PATH))
            .route(web::get().to(get_public_entities_handler::<T>)),
    );
}
