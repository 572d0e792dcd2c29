//! In-memory storage adapters.

mod in_memory_user_repository;
mod record_validation;
mod seed;

pub use in_memory_user_repository::InMemoryUserRepository;
pub use seed::demo_roster;
