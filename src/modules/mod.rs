pub mod about;
pub mod award;
pub mod content;
pub mod experience;
pub mod project;
pub mod skill;
pub mod storage;
