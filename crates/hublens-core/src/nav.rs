//! Explicit view state and navigation transitions.
//!
//! The UI renders exactly one of three views at any time: search results,
//! a directory listing, or a file preview. Every navigation action computes
//! a new [`ViewState`] from the current one instead of mutating a shared
//! container, and "back" is a pure function of the current state, so two
//! overlapping renders can never interleave their output.

use crate::api::{EntryKind, TreeEntry};
use crate::path::parent_path;

/// Which of the three views occupies the page.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum ViewState {
    /// Search bar plus result grid (the initial view)
    #[default]
    Search,
    /// Directory listing; an empty path is the repository root
    Directory {
        /// Owner login
        owner: String,
        /// Repository name
        repo: String,
        /// Directory path, "" for the root
        path: String,
    },
    /// Text preview of a single file
    File {
        /// Owner login
        owner: String,
        /// Repository name
        repo: String,
        /// File path
        path: String,
    },
}

/// Where the back action of a directory view leads.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BackBehavior {
    /// Leaving any directory returns straight to the search results.
    #[default]
    SearchOnly,
    /// Walk up one directory level per step, reaching the search view
    /// from the repository root.
    Parent,
}

impl ViewState {
    /// Root directory view of a repository.
    pub fn repository(owner: impl Into<String>, repo: impl Into<String>) -> Self {
        Self::Directory {
            owner: owner.into(),
            repo: repo.into(),
            path: String::new(),
        }
    }

    /// State reached by activating `entry` in the current directory.
    ///
    /// Returns `None` outside a directory view and for entry kinds that
    /// cannot be opened (symlinks, submodules).
    pub fn enter(&self, entry: &TreeEntry) -> Option<Self> {
        let Self::Directory { owner, repo, .. } = self else {
            return None;
        };

        match entry.kind {
            EntryKind::Dir => Some(Self::Directory {
                owner: owner.clone(),
                repo: repo.clone(),
                path: entry.path.clone(),
            }),
            EntryKind::File => Some(Self::File {
                owner: owner.clone(),
                repo: repo.clone(),
                path: entry.path.clone(),
            }),
            EntryKind::Other => None,
        }
    }

    /// State reached by the back action.
    ///
    /// A file preview always returns to its parent directory. A directory
    /// returns either to the search view or to its parent, depending on
    /// `behavior`. The search view is its own parent.
    pub fn back(&self, behavior: BackBehavior) -> Self {
        match self {
            Self::Search => Self::Search,
            Self::Directory { owner, repo, path } => match behavior {
                BackBehavior::SearchOnly => Self::Search,
                BackBehavior::Parent => {
                    if path.is_empty() {
                        Self::Search
                    } else {
                        Self::Directory {
                            owner: owner.clone(),
                            repo: repo.clone(),
                            path: parent_path(path).to_string(),
                        }
                    }
                }
            },
            Self::File { owner, repo, path } => Self::Directory {
                owner: owner.clone(),
                repo: repo.clone(),
                path: parent_path(path).to_string(),
            },
        }
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(name: &str, path: &str, kind: EntryKind) -> TreeEntry {
        TreeEntry {
            name: name.to_string(),
            path: path.to_string(),
            kind,
        }
    }

    fn directory(path: &str) -> ViewState {
        ViewState::Directory {
            owner: "facebook".to_string(),
            repo: "react".to_string(),
            path: path.to_string(),
        }
    }

    #[test]
    fn test_repository_opens_at_root() {
        assert_eq!(ViewState::repository("facebook", "react"), directory(""));
    }

    #[test]
    fn test_enter_directory() {
        let next = directory("")
            .enter(&entry("src", "src", EntryKind::Dir))
            .unwrap();
        assert_eq!(next, directory("src"));
    }

    #[test]
    fn test_enter_file() {
        let next = directory("src")
            .enter(&entry("index.js", "src/index.js", EntryKind::File))
            .unwrap();
        assert_eq!(
            next,
            ViewState::File {
                owner: "facebook".to_string(),
                repo: "react".to_string(),
                path: "src/index.js".to_string(),
            }
        );
    }

    #[test]
    fn test_enter_ignores_other_kinds() {
        assert_eq!(
            directory("").enter(&entry("link", "link", EntryKind::Other)),
            None
        );
        assert_eq!(
            ViewState::Search.enter(&entry("src", "src", EntryKind::Dir)),
            None
        );
    }

    #[test]
    fn test_file_back_returns_to_parent_directory() {
        let file = ViewState::File {
            owner: "facebook".to_string(),
            repo: "react".to_string(),
            path: "a/b/c.txt".to_string(),
        };
        assert_eq!(file.back(BackBehavior::SearchOnly), directory("a/b"));
        // Behavior setting only affects directory views.
        assert_eq!(file.back(BackBehavior::Parent), directory("a/b"));
    }

    #[test]
    fn test_top_level_file_back_returns_to_root() {
        let file = ViewState::File {
            owner: "facebook".to_string(),
            repo: "react".to_string(),
            path: "README.md".to_string(),
        };
        assert_eq!(file.back(BackBehavior::SearchOnly), directory(""));
    }

    #[test]
    fn test_directory_back_returns_to_search_by_default() {
        // Even from a nested directory, not its parent.
        assert_eq!(
            directory("a/b").back(BackBehavior::SearchOnly),
            ViewState::Search
        );
        assert_eq!(
            directory("").back(BackBehavior::SearchOnly),
            ViewState::Search
        );
    }

    #[test]
    fn test_directory_back_walks_parents_when_configured() {
        assert_eq!(directory("a/b").back(BackBehavior::Parent), directory("a"));
        assert_eq!(directory("a").back(BackBehavior::Parent), directory(""));
        assert_eq!(directory("").back(BackBehavior::Parent), ViewState::Search);
    }

    #[test]
    fn test_search_back_is_stable() {
        assert_eq!(ViewState::Search.back(BackBehavior::SearchOnly), ViewState::Search);
        assert_eq!(ViewState::Search.back(BackBehavior::Parent), ViewState::Search);
    }
}
