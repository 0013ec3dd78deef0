//! Remote repository API: data model, endpoint URLs, response parsing.
//!
//! Types deserialize directly from the public search and contents endpoints.
//! URL construction and body parsing both live here so the network layer in
//! the front end reduces to "fetch text" — tests drive the full parse path
//! from fixture JSON without a browser or a network.

use serde::Deserialize;

use crate::error::RequestError;

/// Base URL of the public repository-hosting API.
pub const DEFAULT_API_BASE: &str = "https://api.github.com";

/// Fixed page size for search requests.
pub const SEARCH_PAGE_SIZE: u32 = 20;

// =============================================================================
// Search
// =============================================================================

/// Sort key accepted by the search endpoint.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SortKey {
    /// Star count (default)
    #[default]
    Stars,
    /// Fork count
    Forks,
    /// Open help-wanted issue count
    HelpWanted,
    /// Last update time
    Updated,
}

impl SortKey {
    /// Query-parameter value for this key.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Stars => "stars",
            Self::Forks => "forks",
            Self::HelpWanted => "help-wanted-issues",
            Self::Updated => "updated",
        }
    }
}

/// Sort direction for search results.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SortOrder {
    /// Ascending
    Asc,
    /// Descending (default)
    #[default]
    Desc,
}

impl SortOrder {
    /// Query-parameter value for this order.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }
}

/// One keyword search, constructed per request.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SearchQuery {
    /// Keyword text, sent percent-encoded
    pub text: String,
    /// Sort key
    pub sort: SortKey,
    /// Sort direction
    pub order: SortOrder,
}

impl SearchQuery {
    /// Query with the default sort (stars, descending).
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }
}

/// Repository owner as embedded in a search item.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct RepositoryOwner {
    /// Owner login name, used for the contents endpoints
    pub login: String,
}

/// Immutable snapshot of one repository from a search response.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct RepositorySummary {
    /// "owner/name"
    pub full_name: String,
    /// Short repository name (without the owner)
    pub name: String,
    /// Free-text description, absent on many repositories
    pub description: Option<String>,
    /// Star count
    pub stargazers_count: u64,
    /// Fork count
    pub forks_count: u64,
    /// Owner record
    pub owner: RepositoryOwner,
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    items: Vec<RepositorySummary>,
}

// =============================================================================
// Repository contents
// =============================================================================

/// Kind of a tree entry, from the `type` field of a listing record.
///
/// The remote service also reports `symlink` and `submodule`; those collapse
/// into [`EntryKind::Other`] and are listed but not navigable.
#[derive(Clone, Copy, Debug, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    /// Regular file
    File,
    /// Directory
    Dir,
    /// Any other kind (symlink, submodule, ...)
    #[serde(other)]
    Other,
}

/// One item in a directory listing. Ephemeral; discarded on navigation.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct TreeEntry {
    /// Entry name (last path segment)
    pub name: String,
    /// Full path relative to the repository root
    pub path: String,
    /// File or directory
    #[serde(rename = "type")]
    pub kind: EntryKind,
}

impl TreeEntry {
    /// Whether this entry is a directory.
    pub fn is_dir(&self) -> bool {
        self.kind == EntryKind::Dir
    }
}

/// File record from the contents endpoint, including the encoded payload.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct FileContent {
    /// File name
    pub name: String,
    /// Full path relative to the repository root
    pub path: String,
    /// Base64-encoded bytes (hard-wrapped by the service)
    #[serde(default)]
    pub content: String,
    /// Payload encoding, "base64" for regular files
    #[serde(default)]
    pub encoding: String,
}

impl FileContent {
    /// Decode the base64 payload into text.
    ///
    /// Fails with [`ContentError::Binary`](crate::error::ContentError) when
    /// the decoded bytes are not valid UTF-8.
    pub fn decoded_text(&self) -> Result<String, crate::error::ContentError> {
        crate::content::decode_base64_text(&self.content)
    }
}

// =============================================================================
// Endpoint URLs
// =============================================================================

/// URL for a keyword search with the fixed page size.
pub fn search_url(base: &str, query: &SearchQuery) -> String {
    let text: String = url::form_urlencoded::byte_serialize(query.text.as_bytes()).collect();
    format!(
        "{}/search/repositories?q={}&sort={}&order={}&per_page={}",
        base,
        text,
        query.sort.as_str(),
        query.order.as_str(),
        SEARCH_PAGE_SIZE,
    )
}

/// URL for the contents endpoint; lists a directory or fetches a file.
///
/// An empty path addresses the repository root.
pub fn contents_url(base: &str, owner: &str, repo: &str, path: &str) -> String {
    if path.is_empty() {
        format!("{}/repos/{}/{}/contents", base, owner, repo)
    } else {
        format!("{}/repos/{}/{}/contents/{}", base, owner, repo, path)
    }
}

// =============================================================================
// Response parsing
// =============================================================================

/// Parse a search response body into its items, in response order.
pub fn parse_search_response(body: &str) -> Result<Vec<RepositorySummary>, RequestError> {
    let response: SearchResponse =
        serde_json::from_str(body).map_err(|e| RequestError::InvalidJson(e.to_string()))?;
    Ok(response.items)
}

/// Parse a directory listing body into entries, in response order.
///
/// The order is whatever the service returned; no sorting happens here.
pub fn parse_directory_listing(body: &str) -> Result<Vec<TreeEntry>, RequestError> {
    serde_json::from_str(body).map_err(|e| RequestError::InvalidJson(e.to_string()))
}

/// Parse a file record body.
pub fn parse_file_content(body: &str) -> Result<FileContent, RequestError> {
    serde_json::from_str(body).map_err(|e| RequestError::InvalidJson(e.to_string()))
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_url_default_sort() {
        let query = SearchQuery::new("react");
        assert_eq!(
            search_url(DEFAULT_API_BASE, &query),
            "https://api.github.com/search/repositories?q=react&sort=stars&order=desc&per_page=20"
        );
    }

    #[test]
    fn test_search_url_encodes_text() {
        let query = SearchQuery::new("rust web framework");
        let url = search_url(DEFAULT_API_BASE, &query);
        // form encoding: spaces become '+'
        assert!(url.contains("q=rust+web+framework"));

        let query = SearchQuery::new("c++");
        let url = search_url(DEFAULT_API_BASE, &query);
        assert!(url.contains("q=c%2B%2B"));
    }

    #[test]
    fn test_search_url_sort_order() {
        let query = SearchQuery {
            text: "cli".to_string(),
            sort: SortKey::Updated,
            order: SortOrder::Asc,
        };
        let url = search_url(DEFAULT_API_BASE, &query);
        assert!(url.contains("sort=updated"));
        assert!(url.contains("order=asc"));
    }

    #[test]
    fn test_contents_url() {
        assert_eq!(
            contents_url(DEFAULT_API_BASE, "rust-lang", "rust", ""),
            "https://api.github.com/repos/rust-lang/rust/contents"
        );
        assert_eq!(
            contents_url(DEFAULT_API_BASE, "rust-lang", "rust", "src/lib.rs"),
            "https://api.github.com/repos/rust-lang/rust/contents/src/lib.rs"
        );
    }

    #[test]
    fn test_parse_search_response() {
        let body = r#"{
            "total_count": 1,
            "incomplete_results": false,
            "items": [{
                "id": 10270250,
                "full_name": "facebook/react",
                "name": "react",
                "description": "The library for web and native user interfaces.",
                "stargazers_count": 220000,
                "forks_count": 45000,
                "owner": { "login": "facebook", "id": 69631 }
            }]
        }"#;

        let items = parse_search_response(body).unwrap();
        assert_eq!(items.len(), 1);
        let repo = &items[0];
        assert_eq!(repo.full_name, "facebook/react");
        assert_eq!(repo.name, "react");
        assert_eq!(repo.owner.login, "facebook");
        assert_eq!(repo.stargazers_count, 220000);
        assert_eq!(repo.forks_count, 45000);
    }

    #[test]
    fn test_parse_search_response_missing_description() {
        let body = r#"{"items": [{
            "full_name": "a/b",
            "name": "b",
            "description": null,
            "stargazers_count": 0,
            "forks_count": 0,
            "owner": { "login": "a" }
        }]}"#;

        let items = parse_search_response(body).unwrap();
        assert_eq!(items[0].description, None);
    }

    #[test]
    fn test_parse_search_response_rejects_bad_shape() {
        assert!(matches!(
            parse_search_response("[]"),
            Err(RequestError::InvalidJson(_))
        ));
        assert!(parse_search_response("not json").is_err());
    }

    #[test]
    fn test_parse_directory_listing() {
        let body = r#"[
            { "name": "README.md", "path": "README.md", "type": "file", "size": 512 },
            { "name": "src", "path": "src", "type": "dir" },
            { "name": "link", "path": "link", "type": "symlink" }
        ]"#;

        let entries = parse_directory_listing(body).unwrap();
        assert_eq!(entries.len(), 3);
        assert_eq!(entries[0].name, "README.md");
        assert_eq!(entries[0].path, "README.md");
        assert_eq!(entries[0].kind, EntryKind::File);
        assert!(entries[1].is_dir());
        assert_eq!(entries[2].kind, EntryKind::Other);
    }

    #[test]
    fn test_parse_directory_listing_preserves_order() {
        let body = r#"[
            { "name": "zeta", "path": "zeta", "type": "dir" },
            { "name": "alpha", "path": "alpha", "type": "dir" }
        ]"#;

        let entries = parse_directory_listing(body).unwrap();
        let names: Vec<&str> = entries.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, ["zeta", "alpha"]);
    }

    #[test]
    fn test_parse_file_content() {
        let body = r#"{
            "name": "hello.txt",
            "path": "docs/hello.txt",
            "content": "aGVsbG8gd29ybGQ=",
            "encoding": "base64"
        }"#;

        let file = parse_file_content(body).unwrap();
        assert_eq!(file.name, "hello.txt");
        assert_eq!(file.path, "docs/hello.txt");
        assert_eq!(file.encoding, "base64");
        assert_eq!(file.decoded_text().unwrap(), "hello world");
    }
}
