use std::sync::Arc;

use actix_web::web;

use crate::about::application::domain::About;
use crate::award::application::domain::Award;
use crate::content::application::ports::incoming::use_cases::{
    CollectionUseCase, SingletonUseCase,
};
use crate::experience::application::domain::Experience;
use crate::project::application::domain::Project;
use crate::skill::application::domain::Skill;
use crate::storage::adapter::outgoing::InMemoryDocumentStore;
use crate::storage::application::ports::outgoing::DocumentStore;
use crate::AppState;

/// Builds an `AppState` wired to real services over an in-memory store.
/// Individual use cases or the raw store can be swapped for stubs.
#[derive(Default)]
pub struct TestAppStateBuilder {
    store: InMemoryDocumentStore,
    projects: Option<Arc<dyn CollectionUseCase<Project> + Send + Sync>>,
    experiences: Option<Arc<dyn CollectionUseCase<Experience> + Send + Sync>>,
    skills: Option<Arc<dyn CollectionUseCase<Skill> + Send + Sync>>,
    awards: Option<Arc<dyn CollectionUseCase<Award> + Send + Sync>>,
    about: Option<Arc<dyn SingletonUseCase<About> + Send + Sync>>,
    documents: Option<Arc<dyn DocumentStore + Send + Sync>>,
}

impl TestAppStateBuilder {
    pub fn with_store(mut self, store: InMemoryDocumentStore) -> Self {
        self.store = store;
        self
    }

    pub fn with_projects(
        mut self,
        uc: impl CollectionUseCase<Project> + Send + Sync + 'static,
    ) -> Self {
        self.projects = Some(Arc::new(uc));
        self
    }

    pub fn with_experiences(
        mut self,
        uc: impl CollectionUseCase<Experience> + Send + Sync + 'static,
    ) -> Self {
        self.experiences = Some(Arc::new(uc));
        self
    }

    pub fn with_skills(mut self, uc: impl CollectionUseCase<Skill> + Send + Sync + 'static) -> Self {
        self.skills = Some(Arc::new(uc));
        self
    }

    pub fn with_awards(mut self, uc: impl CollectionUseCase<Award> + Send + Sync + 'static) -> Self {
        self.awards = Some(Arc::new(uc));
        self
    }

    pub fn with_about(mut self, uc: impl SingletonUseCase<About> + Send + Sync + 'static) -> Self {
        self.about = Some(Arc::new(uc));
        self
    }

    /// Replaces only the raw store behind `/api/data` and readiness.
    pub fn with_documents(mut self, store: impl DocumentStore + Send + Sync + 'static) -> Self {
        self.documents = Some(Arc::new(store));
        self
    }

    pub fn build(self) -> web::Data<AppState> {
        let mut state = AppState::new(Arc::new(self.store));

        if let Some(uc) = self.projects {
            state.projects = uc;
        }
        if let Some(uc) = self.experiences {
            state.experiences = uc;
        }
        if let Some(uc) = self.skills {
            state.skills = uc;
        }
        if let Some(uc) = self.awards {
            state.awards = uc;
        }
        if let Some(uc) = self.about {
            state.about = uc;
        }
        if let Some(store) = self.documents {
            state.documents = store;
        }

        web::Data::new(state)
    }
}
