pub mod persistence;
pub mod seed;

pub use persistence::{CategoryRepositoryInMemory, InMemoryRepository, InMemorySearchableRepository};
pub use seed::load_seed_file;
