pub mod entities;

pub use entities::{
    Project, ProjectContribution, ProjectDraft, ProjectLink, ProjectPatch, PROJECT_CATEGORIES,
};
