//! Root application module.
//!
//! Contains the main App component, the AppContext definition, and the
//! reactive search state, following Leptos conventions.

use leptos::prelude::*;

use hublens_core::{RepositorySummary, RequestError, ViewState};

use crate::components::Navigator;
use crate::config::DEFAULT_QUERY;

// ============================================================================
// Search state
// ============================================================================

/// Lifecycle of the most recent search request.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum SearchStatus {
    /// No search issued yet; the initial one fires on mount.
    #[default]
    Idle,
    /// A request is in flight.
    Pending,
    /// The last request completed; the results signal holds its items.
    Loaded,
    /// The last request failed.
    Failed(RequestError),
}

// ============================================================================
// AppContext
// ============================================================================

/// Application-wide reactive context.
///
/// Provided at the root of the component tree and accessed from any child
/// component with `use_context::<AppContext>()`.
///
/// # Architecture
///
/// The current [`ViewState`] is the single source of truth for what is on
/// screen: exactly one of the three views renders at a time, and navigation
/// replaces the state value instead of mutating mounted markup. The search
/// signals cache the last query and its results so returning from a
/// repository restores the grid without a refetch.
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Which of the three views is rendered.
    pub view: RwSignal<ViewState>,
    /// Keyword text currently in the search input.
    pub query: RwSignal<String>,
    /// Items of the most recent completed search.
    pub results: RwSignal<Vec<RepositorySummary>>,
    /// Lifecycle of the most recent search request.
    pub status: RwSignal<SearchStatus>,
}

impl AppContext {
    /// Creates a new application context in the search view, with the
    /// default query text and no results yet.
    pub fn new() -> Self {
        Self {
            view: RwSignal::new(ViewState::Search),
            query: RwSignal::new(DEFAULT_QUERY.to_string()),
            results: RwSignal::new(Vec::new()),
            status: RwSignal::new(SearchStatus::Idle),
        }
    }

    /// Replace the current view.
    pub fn navigate(&self, next: ViewState) {
        self.view.set(next);
    }
}

impl Default for AppContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Root application component with error boundary.
#[component]
pub fn App() -> impl IntoView {
    let ctx = AppContext::new();
    provide_context(ctx);

    view! {
        <ErrorBoundary
            fallback=|errors| view! {
                <div style="padding: 2rem; font-family: monospace; color: #ff6b6b;">
                    <h1>"Something went wrong"</h1>
                    <ul>
                        {move || errors.get()
                            .into_iter()
                            .map(|(_, e)| view! { <li>{e.to_string()}</li> })
                            .collect::<Vec<_>>()
                        }
                    </ul>
                </div>
            }
        >
            <Navigator />
        </ErrorBoundary>
    }
}
