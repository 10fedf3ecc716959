pub mod feedback;
pub mod listing;
pub mod lookup;
pub mod url_hit;
pub mod user;
