//! Display name extraction from a locator string.

use crate::error::{CollideError, Result};

/// Returns the text after the last `/` of `locator`.
///
/// The separator must exist at byte position 1 or later, so a bare name
/// ("list.txt") or a root-only path ("/list.txt") is rejected. A locator that
/// ends with `/` has no name and is rejected too. Query strings and
/// fragments are not stripped.
pub fn resolve_name(locator: &str) -> Result<&str> {
    let invalid = || CollideError::InvalidLocator {
        locator: locator.to_string(),
    };
    let sep = match locator.rfind('/') {
        Some(i) if i >= 1 => i,
        _ => return Err(invalid()),
    };
    let name = &locator[sep + 1..];
    if name.is_empty() {
        return Err(invalid());
    }
    Ok(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_last_segment() {
        assert_eq!(
            resolve_name("https://gist.example.com/u/abc/raw/def/file1.txt").unwrap(),
            "file1.txt"
        );
        assert_eq!(resolve_name("dir/list.txt").unwrap(), "list.txt");
        assert_eq!(resolve_name("/var/lists/file2.txt").unwrap(), "file2.txt");
    }

    #[test]
    fn keeps_query_string() {
        assert_eq!(
            resolve_name("http://h/file3.txt?token=x").unwrap(),
            "file3.txt?token=x"
        );
    }

    #[test]
    fn rejects_without_directory() {
        for bad in ["list.txt", "/list.txt", "", "/", "http://h/dir/"] {
            match resolve_name(bad) {
                Err(CollideError::InvalidLocator { locator }) => assert_eq!(locator, bad),
                other => panic!("expected InvalidLocator for {:?}, got {:?}", bad, other),
            }
        }
    }

    #[test]
    fn right_inverse_of_join() {
        let dirs = ["a", "http://host", "https://h/x/y", "/abs/path", "./rel", "é"];
        let names = ["file1.txt", "n", "list", "ñame.txt", "with space"];
        for dir in dirs {
            for name in names {
                let joined = format!("{}/{}", dir, name);
                assert_eq!(resolve_name(&joined).unwrap(), name, "{}", joined);
            }
        }
    }
}
