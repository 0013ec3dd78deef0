//! Domain logic for the repository navigator.
//!
//! Everything in this crate is browser-free: the remote API data model and
//! response parsing, endpoint URL construction, content decoding, path
//! arithmetic, and the view-state machine. The web front end layers fetching
//! and rendering on top, so the interesting behavior stays testable under
//! plain `cargo test`.

pub mod api;
pub mod content;
pub mod error;
pub mod nav;
pub mod path;

pub use api::{
    contents_url, parse_directory_listing, parse_file_content, parse_search_response, search_url,
    EntryKind, FileContent, RepositorySummary, SearchQuery, SortKey, SortOrder, TreeEntry,
    DEFAULT_API_BASE, SEARCH_PAGE_SIZE,
};
pub use content::{decode_base64_text, truncate_preview, PREVIEW_MAX_CHARS};
pub use error::{ContentError, RequestError};
pub use nav::{BackBehavior, ViewState};
pub use path::{display_location, parent_path};
