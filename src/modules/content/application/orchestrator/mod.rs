pub mod demo_seeder;

pub use demo_seeder::{DemoContentSeeder, DemoSeedError, SeedReport};
