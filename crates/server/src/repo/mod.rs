pub mod holiday;
pub mod user;
