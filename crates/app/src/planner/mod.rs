//! State behind the holidays page.
//!
//! [`HolidayStore`] owns the collection and the editing selection,
//! [`LoadController`] runs the load lifecycle, and the form and list get
//! narrow [`FormCapability`] / [`ListCapability`] handles instead of the raw
//! signals.

mod capability;
mod load;
mod store;

pub use capability::{FormCapability, ListCapability};
pub use load::{LoadController, LoadState};
pub use store::HolidayStore;
