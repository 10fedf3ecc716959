pub mod common;
pub mod feedback_dto;
pub mod listing_dto;
pub mod user_dto;
