//! Dotted JSON path lookup.
//!
//! Paths are dot separated (`info.message`), with optional array indexes
//! (`games[0].title`). A leading `$` or `$.` is accepted and ignored.

use serde_json::Value;

/// Looks up `path` in `json`.
///
/// Returns `None` when any segment is absent or an index is out of range.
/// An empty path (or `$`) returns the root.
#[must_use]
pub fn lookup<'a>(json: &'a Value, path: &str) -> Option<&'a Value> {
    let path = path.trim();
    let path = path.strip_prefix('$').unwrap_or(path);
    let path = path.strip_prefix('.').unwrap_or(path);

    let mut current = json;
    for segment in path.split('.').filter(|s| !s.is_empty()) {
        let (name, indexes) = split_indexes(segment)?;
        if !name.is_empty() {
            current = current.get(name)?;
        }
        for index in indexes {
            current = current.get(index)?;
        }
    }
    Some(current)
}

/// Splits `games[0][1]` into `("games", [0, 1])`.
fn split_indexes(segment: &str) -> Option<(&str, Vec<usize>)> {
    let Some(open) = segment.find('[') else {
        return Some((segment, Vec::new()));
    };

    let name = &segment[..open];
    let mut indexes = Vec::new();
    let mut rest = &segment[open..];
    while let Some(stripped) = rest.strip_prefix('[') {
        let close = stripped.find(']')?;
        indexes.push(stripped[..close].trim().parse().ok()?);
        rest = &stripped[close + 1..];
    }

    rest.is_empty().then_some((name, indexes))
}
