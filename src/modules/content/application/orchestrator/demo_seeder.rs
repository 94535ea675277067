use std::sync::Arc;

use tracing::{info, warn};

use crate::modules::about::application::domain::About;
use crate::modules::award::application::demo::demo_awards;
use crate::modules::award::application::domain::Award;
use crate::modules::content::application::domain::CollectionEntity;
use crate::modules::content::application::ports::incoming::use_cases::{
    CollectionUseCase, CollectionUseCaseError, SingletonUseCase, SingletonUseCaseError,
};
use crate::modules::experience::application::demo::demo_experiences;
use crate::modules::experience::application::domain::Experience;
use crate::modules::project::application::demo::demo_projects;
use crate::modules::project::application::domain::Project;
use crate::modules::skill::application::demo::demo_skills;
use crate::modules::skill::application::domain::Skill;
use crate::AppState;

// ============================================================================
// Seed report
// ============================================================================

/// Entities written per collection, and whether the about default was stored.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SeedReport {
    pub projects: usize,
    pub experiences: usize,
    pub skills: usize,
    pub awards: usize,
    pub about: bool,
}

impl SeedReport {
    pub fn is_empty(&self) -> bool {
        self == &SeedReport::default()
    }
}

#[derive(Debug, thiserror::Error)]
pub enum DemoSeedError {
    #[error("Seeding collection failed: {0}")]
    Collection(#[from] CollectionUseCaseError),

    #[error("Seeding about failed: {0}")]
    About(#[from] SingletonUseCaseError),
}

// ============================================================================
// Demo Content Seeder
// ============================================================================

#[derive(Clone)]
pub struct DemoContentSeeder {
    projects: Arc<dyn CollectionUseCase<Project> + Send + Sync>,
    experiences: Arc<dyn CollectionUseCase<Experience> + Send + Sync>,
    skills: Arc<dyn CollectionUseCase<Skill> + Send + Sync>,
    awards: Arc<dyn CollectionUseCase<Award> + Send + Sync>,
    about: Arc<dyn SingletonUseCase<About> + Send + Sync>,
}

impl DemoContentSeeder {
    pub fn new(state: &AppState) -> Self {
        Self {
            projects: Arc::clone(&state.projects),
            experiences: Arc::clone(&state.experiences),
            skills: Arc::clone(&state.skills),
            awards: Arc::clone(&state.awards),
            about: Arc::clone(&state.about),
        }
    }

    /// Fills every empty collection with sample content and stores the
    /// default about record when none exists. Populated collections are
    /// left alone, so running this twice writes nothing the second time.
    pub async fn seed(&self) -> Result<SeedReport, DemoSeedError> {
        let report = SeedReport {
            projects: seed_collection(self.projects.as_ref(), demo_projects()).await?,
            experiences: seed_collection(self.experiences.as_ref(), demo_experiences()).await?,
            skills: seed_collection(self.skills.as_ref(), demo_skills()).await?,
            awards: seed_collection(self.awards.as_ref(), demo_awards()).await?,
            about: self.about.ensure_initialized().await?,
        };

        info!(
            projects = report.projects,
            experiences = report.experiences,
            skills = report.skills,
            awards = report.awards,
            about = report.about,
            "demo content seeded"
        );

        Ok(report)
    }
}

async fn seed_collection<T: CollectionEntity>(
    use_case: &(dyn CollectionUseCase<T> + Send + Sync),
    drafts: Vec<T::Draft>,
) -> Result<usize, CollectionUseCaseError> {
    if !use_case.list().await?.is_empty() {
        return Ok(0);
    }

    let count = drafts.len();
    for draft in drafts {
        match use_case.create(draft).await {
            Ok(_) => {}
            // An empty listing can hide a document that does not decode.
            Err(CollectionUseCaseError::MalformedDocument(msg)) => {
                let key = T::KEY;
                warn!(key = %key, "skipping demo content for malformed document: {}", msg);
                return Ok(0);
            }
            Err(e) => return Err(e),
        }
    }

    Ok(count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use maplit::hashmap;
    use serde_json::json;

    use crate::modules::storage::adapter::outgoing::InMemoryDocumentStore;
    use crate::modules::storage::application::ports::outgoing::{DocumentKey, DocumentStore};
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::stubs::FailingCollectionUseCase;

    #[tokio::test]
    async fn seeds_every_empty_document() {
        let store = InMemoryDocumentStore::new();
        let state = TestAppStateBuilder::default()
            .with_store(store.clone())
            .build();

        let report = DemoContentSeeder::new(&state).seed().await.unwrap();

        assert_eq!(report.projects, demo_projects().len());
        assert_eq!(report.experiences, demo_experiences().len());
        assert_eq!(report.skills, demo_skills().len());
        assert_eq!(report.awards, demo_awards().len());
        assert!(report.about);

        let skills = state.skills.list_sorted().await.unwrap();
        assert_eq!(skills[0].name, "Python");
        assert_eq!(
            skills.iter().map(|s| s.order).collect::<Vec<_>>(),
            (0..demo_skills().len() as u32).collect::<Vec<_>>()
        );
        assert!(store.read(DocumentKey::About).await.unwrap().is_some());
    }

    #[tokio::test]
    async fn second_run_writes_nothing() {
        let store = InMemoryDocumentStore::new();
        let state = TestAppStateBuilder::default()
            .with_store(store.clone())
            .build();
        let seeder = DemoContentSeeder::new(&state);

        seeder.seed().await.unwrap();
        let writes = store.write_count();

        let report = seeder.seed().await.unwrap();

        assert!(report.is_empty());
        assert_eq!(store.write_count(), writes);
    }

    #[tokio::test]
    async fn populated_collection_and_about_are_untouched() {
        let store = InMemoryDocumentStore::with_documents(hashmap! {
            DocumentKey::Projects => json!([
                { "id": "mine", "title": "Mine", "order": 0, "createdAt": "2024-01-01T00:00:00Z" }
            ]),
            DocumentKey::About => json!({ "name": "Sam" }),
        });
        let state = TestAppStateBuilder::default()
            .with_store(store.clone())
            .build();

        let report = DemoContentSeeder::new(&state).seed().await.unwrap();

        assert_eq!(report.projects, 0);
        assert!(!report.about);
        assert!(report.awards > 0);

        let projects = state.projects.list().await.unwrap();
        assert_eq!(projects.len(), 1);
        assert_eq!(projects[0].id, "mine");
        assert_eq!(state.about.get().await.unwrap().name, "Sam");
    }

    #[tokio::test]
    async fn undecodable_collection_is_not_seeded_over() {
        let legacy = json!([
            { "id": "1", "title": "Keep me" },
            { "title": "legacy entry without id" }
        ]);
        let store = InMemoryDocumentStore::with_documents(hashmap! {
            DocumentKey::Projects => legacy.clone(),
        });
        let state = TestAppStateBuilder::default()
            .with_store(store.clone())
            .build();

        let report = DemoContentSeeder::new(&state).seed().await.unwrap();

        assert_eq!(report.projects, 0);
        assert_eq!(report.skills, demo_skills().len());
        assert_eq!(store.read(DocumentKey::Projects).await.unwrap(), Some(legacy));
    }

    #[tokio::test]
    async fn store_failure_aborts_seeding() {
        let state = TestAppStateBuilder::default()
            .with_projects(FailingCollectionUseCase::<Project>::new(
                CollectionUseCaseError::StoreUnavailable("down".to_string()),
            ))
            .build();

        let err = DemoContentSeeder::new(&state).seed().await.unwrap_err();

        assert!(matches!(
            err,
            DemoSeedError::Collection(CollectionUseCaseError::StoreUnavailable(_))
        ));
    }
}
