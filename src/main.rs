pub mod api;
pub mod health;
pub mod modules;
pub mod shared;

pub use modules::about;
pub use modules::award;
pub use modules::content;
pub use modules::experience;
pub use modules::project;
pub use modules::skill;
pub use modules::storage;

use crate::about::application::domain::{default_about, About};
use crate::award::application::domain::Award;
use crate::content::adapter::incoming::web::configure_collection;
use crate::content::adapter::outgoing::{DocumentCollectionRepository, DocumentSingletonRepository};
use crate::content::application::domain::CollectionEntity;
use crate::content::application::orchestrator::DemoContentSeeder;
use crate::content::application::ports::incoming::use_cases::{
    CollectionUseCase, SingletonUseCase,
};
use crate::content::application::service::{CollectionService, SingletonService};
use crate::experience::application::domain::Experience;
use crate::project::application::domain::Project;
use crate::shared::api::custom_json_config;
use crate::shared::config::{AppConfig, StoreBackend};
use crate::skill::application::domain::Skill;
use crate::storage::adapter::outgoing::{FsDocumentStore, InMemoryDocumentStore};
use crate::storage::application::ports::outgoing::{DocumentKey, DocumentStore};

use actix_web::{web, App, HttpServer};
use std::sync::Arc;

use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[cfg(test)]
mod tests;

#[derive(Clone)]
pub struct AppState {
    pub projects: Arc<dyn CollectionUseCase<Project> + Send + Sync>,
    pub experiences: Arc<dyn CollectionUseCase<Experience> + Send + Sync>,
    pub skills: Arc<dyn CollectionUseCase<Skill> + Send + Sync>,
    pub awards: Arc<dyn CollectionUseCase<Award> + Send + Sync>,
    pub about: Arc<dyn SingletonUseCase<About> + Send + Sync>,
    /// Raw document access for `/api/data` and readiness.
    pub documents: Arc<dyn DocumentStore + Send + Sync>,
}

impl AppState {
    /// Wires every service over one shared document store.
    pub fn new(store: Arc<dyn DocumentStore + Send + Sync>) -> Self {
        Self {
            projects: collection_use_case::<Project>(&store),
            experiences: collection_use_case::<Experience>(&store),
            skills: collection_use_case::<Skill>(&store),
            awards: collection_use_case::<Award>(&store),
            about: Arc::new(SingletonService::<About, _>::new(
                DocumentSingletonRepository::new(
                    Arc::clone(&store),
                    DocumentKey::About,
                    default_about(),
                ),
            )),
            documents: store,
        }
    }
}

fn collection_use_case<T: CollectionEntity>(
    store: &Arc<dyn DocumentStore + Send + Sync>,
) -> Arc<dyn CollectionUseCase<T> + Send + Sync> {
    Arc::new(CollectionService::<T, _>::new(
        DocumentCollectionRepository::<T>::new(Arc::clone(store)),
    ))
}

#[actix_web::main]
#[cfg(not(tarpaulin_include))]
async fn start() -> std::io::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting application...");

    let config = AppConfig::from_env()
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidInput, e))?;

    let store: Arc<dyn DocumentStore + Send + Sync> = match config.store_backend {
        StoreBackend::Fs => {
            info!(data_dir = %config.data_dir.display(), "using file document store");
            Arc::new(FsDocumentStore::new(config.data_dir.clone()))
        }
        StoreBackend::Memory => {
            warn!("using in-memory document store, content is lost on restart");
            Arc::new(InMemoryDocumentStore::new())
        }
    };

    if let Err(e) = store.ping().await {
        warn!("Document store is not ready yet: {}", e);
    }

    let state = AppState::new(store);

    if config.seed_demo_data {
        if let Err(e) = DemoContentSeeder::new(&state).seed().await {
            warn!("Demo content seeding failed: {}", e);
        }
    }

    let server_url = config.server_url();
    info!("Server run on: {}", server_url);

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .app_data(custom_json_config())
            .configure(init_routes)
    })
    .bind(server_url)?
    .run()
    .await
}

pub fn init_routes(cfg: &mut web::ServiceConfig) {
    // Health
    cfg.service(crate::health::health);
    cfg.service(crate::health::readiness);
    // API docs
    cfg.service(crate::api::openapi::openapi_json);
    // Raw documents
    cfg.service(crate::storage::adapter::incoming::web::routes::get_document_handler);
    cfg.service(crate::storage::adapter::incoming::web::routes::save_document_handler);
    // About
    cfg.service(crate::about::adapter::incoming::web::routes::get_about_handler);
    cfg.service(crate::about::adapter::incoming::web::routes::put_about_handler);
    cfg.service(crate::about::adapter::incoming::web::routes::get_public_about_handler);
    // Collections
    cfg.configure(configure_collection::<Project>);
    cfg.configure(configure_collection::<Experience>);
    cfg.configure(configure_collection::<Skill>);
    cfg.configure(configure_collection::<Award>);
}

#[cfg(not(tarpaulin_include))]
fn main() {
    if let Err(e) = start() {
        eprintln!("Error starting app: {e}");
    }
}
