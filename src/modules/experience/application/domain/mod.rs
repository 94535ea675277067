pub mod entities;

pub use entities::{Experience, ExperienceDraft, ExperiencePatch};
