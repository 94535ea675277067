pub mod entities;

pub use entities::{default_about, About, AboutStats};
