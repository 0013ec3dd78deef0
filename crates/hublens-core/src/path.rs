//! Path arithmetic for repository tree navigation.

/// Parent of a slash-separated path: the last segment removed.
///
/// A top-level path (no slash) maps to the empty string, which addresses the
/// repository root.
pub fn parent_path(path: &str) -> &str {
    match path.rfind('/') {
        Some(idx) => &path[..idx],
        None => "",
    }
}

/// Heading text for a location inside a repository tree.
pub fn display_location(owner: &str, repo: &str, path: &str) -> String {
    if path.is_empty() {
        format!("{}/{}", owner, repo)
    } else {
        format!("{}/{} /{}", owner, repo, path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parent_path() {
        assert_eq!(parent_path("a/b/c.txt"), "a/b");
        assert_eq!(parent_path("a/b"), "a");
        assert_eq!(parent_path("README.md"), "");
        assert_eq!(parent_path(""), "");
    }

    #[test]
    fn test_display_location() {
        assert_eq!(display_location("facebook", "react", ""), "facebook/react");
        assert_eq!(
            display_location("facebook", "react", "packages/react-dom"),
            "facebook/react /packages/react-dom"
        );
    }
}
