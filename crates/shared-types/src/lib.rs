pub mod error;
pub mod feature_flags;
pub mod holiday;
pub mod models;

pub use error::*;
pub use feature_flags::*;
pub use holiday::*;
pub use models::*;
