pub mod feedback_repository;
pub mod listing_repository;
pub mod lookup_repository;
pub mod url_hit_repository;
pub mod user_repository;
