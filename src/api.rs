//! The three remote operations: search, directory listing, file content.
//!
//! Each operation is "fetch text" plus core-side URL construction and body
//! parsing, so the whole network surface of the app is a single function in
//! [`crate::utils::fetch`] and everything else is testable without a browser.

use hublens_core::{
    contents_url, parse_directory_listing, parse_file_content, parse_search_response, search_url,
    FileContent, RepositorySummary, RequestError, SearchQuery, TreeEntry,
};

use crate::config::API_BASE;
use crate::utils::fetch_text;

/// Keyword search with the fixed page size, in response order.
pub async fn search_repositories(
    query: &SearchQuery,
) -> Result<Vec<RepositorySummary>, RequestError> {
    let url = search_url(API_BASE, query);
    let body = fetch_text(&url).await?;
    parse_search_response(&body)
}

/// Entries at `path` (repository root when empty), in response order.
pub async fn list_directory(
    owner: &str,
    repo: &str,
    path: &str,
) -> Result<Vec<TreeEntry>, RequestError> {
    let url = contents_url(API_BASE, owner, repo, path);
    let body = fetch_text(&url).await?;
    parse_directory_listing(&body)
}

/// Metadata and encoded content of the file at `path`.
pub async fn fetch_file(
    owner: &str,
    repo: &str,
    path: &str,
) -> Result<FileContent, RequestError> {
    let url = contents_url(API_BASE, owner, repo, path);
    let body = fetch_text(&url).await?;
    parse_file_content(&body)
}
