pub mod lead_repository;
pub mod revision_repository;
pub mod user_repository;
