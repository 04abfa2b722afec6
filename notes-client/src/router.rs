//! Explicit route table.
//!
//! An ordered list of path patterns matched segment-wise, first match wins.
//! Replaces the ambient routing context of a browser router with a plain
//! data structure the shell can resolve against.

/// A resolved destination.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// `/` — the all-notes list.
    AllNotes,
    /// `/new` — editor for a fresh note.
    NewNote,
    /// `/:noteId` — editor mounted on an existing note.
    EditNote { note_id: String },
}

struct RouteEntry {
    pattern: &'static str,
    build: fn(Vec<String>) -> Route,
}

pub struct RouteTable {
    entries: Vec<RouteEntry>,
}

impl RouteTable {
    /// The application's route set. Literal `/new` is listed before the
    /// `/:noteId` capture so "new" is never taken for a note id.
    pub fn new() -> Self {
        Self {
            entries: vec![
                RouteEntry {
                    pattern: "/",
                    build: |_| Route::AllNotes,
                },
                RouteEntry {
                    pattern: "/new",
                    build: |_| Route::NewNote,
                },
                RouteEntry {
                    pattern: "/:noteId",
                    build: |mut params| Route::EditNote {
                        note_id: params.remove(0),
                    },
                },
            ],
        }
    }

    /// Resolve a path against the table; `None` when nothing matches.
    pub fn resolve(&self, path: &str) -> Option<Route> {
        let segments = split_path(path);
        self.entries.iter().find_map(|entry| {
            match_pattern(entry.pattern, &segments).map(|params| (entry.build)(params))
        })
    }
}

impl Default for RouteTable {
    fn default() -> Self {
        Self::new()
    }
}

fn split_path(path: &str) -> Vec<&str> {
    path.split('/').filter(|s| !s.is_empty()).collect()
}

/// Segment-wise match; `:name` segments capture, literals must be equal.
fn match_pattern(pattern: &str, segments: &[&str]) -> Option<Vec<String>> {
    let pattern_segments = split_path(pattern);
    if pattern_segments.len() != segments.len() {
        return None;
    }

    let mut params = Vec::new();
    for (expected, actual) in pattern_segments.iter().zip(segments) {
        if expected.starts_with(':') {
            params.push((*actual).to_string());
        } else if expected != actual {
            return None;
        }
    }
    Some(params)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_resolves_to_all_notes() {
        let table = RouteTable::new();
        assert_eq!(table.resolve("/"), Some(Route::AllNotes));
        assert_eq!(table.resolve(""), Some(Route::AllNotes));
    }

    #[test]
    fn new_is_literal_not_a_note_id() {
        let table = RouteTable::new();
        assert_eq!(table.resolve("/new"), Some(Route::NewNote));
    }

    #[test]
    fn single_segment_captures_note_id() {
        let table = RouteTable::new();
        assert_eq!(
            table.resolve("/abc-123"),
            Some(Route::EditNote {
                note_id: "abc-123".to_string()
            })
        );
        // Trailing slash is tolerated.
        assert_eq!(
            table.resolve("/abc-123/"),
            Some(Route::EditNote {
                note_id: "abc-123".to_string()
            })
        );
    }

    #[test]
    fn deeper_paths_do_not_match() {
        let table = RouteTable::new();
        assert_eq!(table.resolve("/a/b"), None);
    }
}
