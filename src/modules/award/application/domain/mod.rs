pub mod entities;

pub use entities::{Award, AwardCategory, AwardDraft, AwardPatch};
