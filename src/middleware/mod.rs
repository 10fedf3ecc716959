pub mod admin;
pub mod cors;
