#[cfg(feature = "server")]
pub(crate) mod auth;

mod account;
pub use account::*;

mod holiday;
pub use holiday::*;
