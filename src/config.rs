//! Application configuration.
//!
//! Centralizes all configuration constants used throughout the application.

use hublens_core::BackBehavior;

// =============================================================================
// Application Metadata
// =============================================================================

/// Application name displayed in the page header.
pub const APP_NAME: &str = "hublens";

// =============================================================================
// Network Configuration
// =============================================================================

/// Base URL of the public repository API.
pub const API_BASE: &str = hublens_core::DEFAULT_API_BASE;

/// Fetch request timeout in milliseconds.
pub const FETCH_TIMEOUT_MS: i32 = 10000;

// =============================================================================
// Search Configuration
// =============================================================================

/// Query issued on first load and whenever the input is left empty.
pub const DEFAULT_QUERY: &str = "react";

// =============================================================================
// Navigation Configuration
// =============================================================================

/// Where the back action of a directory view leads.
///
/// `SearchOnly` reproduces the historical behavior (any directory's back
/// button returns to the search results); switch to `Parent` to walk up the
/// tree one level per step instead.
pub const BACK_BEHAVIOR: BackBehavior = BackBehavior::SearchOnly;

// =============================================================================
// UI Configuration
// =============================================================================

/// Text shown on result cards for repositories without a description.
pub const NO_DESCRIPTION_FALLBACK: &str = "No description";

/// Icon theme selection.
///
/// Available themes:
/// - `Bootstrap` - Familiar, slightly bolder (default)
/// - `Lucide` - Minimal, thin strokes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[allow(dead_code)]
pub enum IconTheme {
    #[default]
    Bootstrap,
    Lucide,
}

/// Current icon theme used throughout the application.
/// Change this value to switch icon styles globally.
pub const ICON_THEME: IconTheme = IconTheme::Bootstrap;
