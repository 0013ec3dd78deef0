//! UI components built with Leptos.
//!
//! - [`navigator`] - The three-view navigation flow (search, directory, preview)
//! - [`icons`] - Centralized icon definitions (change theme here)

pub mod icons;
pub mod navigator;

pub use navigator::Navigator;
