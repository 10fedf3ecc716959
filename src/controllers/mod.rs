pub mod feedback_controller;
pub mod listing_controller;
pub mod lookup_controller;
pub mod url_hit_controller;
pub mod user_controller;
