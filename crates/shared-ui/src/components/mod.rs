// Standalone components (no primitives)
pub mod alert;
pub mod badge;
pub mod empty_state;
pub mod form_select;
pub mod input;
pub mod page_header;
pub mod skeleton;
pub mod textarea;

// Primitive-backed (attribute merging)
pub mod button;
pub mod card;

// Re-exports for convenience
pub use alert::*;
pub use badge::*;
pub use button::*;
pub use card::*;
pub use empty_state::*;
pub use form_select::*;
pub use input::*;
pub use page_header::*;
pub use skeleton::*;
pub use textarea::*;
