//! Reusable Dioxus components for the holiday planner.
//!
//! Each component lives in its own directory next to a co-located
//! `style.css` that it links on first render.

pub mod components;

pub use components::*;
