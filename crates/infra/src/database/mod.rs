//! SQLite persistence for interviews and job applications.

pub mod application_repository;
pub mod interview_repository;
pub mod manager;

pub use application_repository::SqliteApplicationDirectory;
pub use interview_repository::SqliteInterviewRepository;
pub use manager::{DbManager, DbPool};
