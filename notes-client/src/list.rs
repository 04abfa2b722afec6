//! Note list controller.

use notes_client_types::Note;

use crate::markdown;
use crate::store::NoteStore;

/// Preview excerpt budget, in characters of rendered text.
const EXCERPT_CHARS: usize = 120;

/// Read-only rendered summary of a note.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Preview {
    pub id: String,
    pub title: String,
    pub excerpt: String,
}

/// Holds the result of the last `list_all_notes` call, nothing else.
///
/// The list is never patched incrementally; create/update/delete elsewhere
/// become visible only through the next `refresh`.
#[derive(Default)]
pub struct NoteList {
    notes: Vec<Note>,
    last_error: Option<String>,
}

impl NoteList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the whole list with a fresh fetch. On failure no stale notes
    /// are kept; the caller shows a "could not load" state instead.
    pub async fn refresh<S: NoteStore + ?Sized>(&mut self, store: &S) -> bool {
        match store.list_all_notes().await {
            Ok(notes) => {
                log::debug!("Listed {} notes", notes.len());
                self.notes = notes;
                self.last_error = None;
                true
            }
            Err(e) => {
                log::warn!("Could not load notes: {}", e);
                self.notes.clear();
                self.last_error = Some(e.to_string());
                false
            }
        }
    }

    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    pub fn find(&self, id: &str) -> Option<&Note> {
        self.notes.iter().find(|note| note.id == id)
    }

    /// Pure projection: one preview per note, in store order.
    pub fn previews(&self) -> Vec<Preview> {
        self.notes
            .iter()
            .map(|note| Preview {
                id: note.id.clone(),
                title: note.title.clone(),
                excerpt: markdown::excerpt(&note.body, EXCERPT_CHARS),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StoreError;
    use crate::store::StoreResult;
    use async_trait::async_trait;
    use notes_client_types::{Answer, NewNote};

    struct FakeStore {
        result: Result<Vec<Note>, ()>,
    }

    #[async_trait]
    impl NoteStore for FakeStore {
        async fn list_all_notes(&self) -> StoreResult<Vec<Note>> {
            match &self.result {
                Ok(notes) => Ok(notes.clone()),
                Err(()) => Err(StoreError::Remote {
                    status: 502,
                    body: String::new(),
                }),
            }
        }

        async fn get_note(&self, _id: &str) -> StoreResult<Note> {
            panic!("list never fetches single notes");
        }

        async fn create_note(&self, _note: NewNote) -> StoreResult<Note> {
            panic!("list never creates");
        }

        async fn update_note(&self, _note: &Note) -> StoreResult<Note> {
            panic!("list never updates");
        }

        async fn delete_note(&self, _note: &Note) -> StoreResult<()> {
            panic!("list never deletes");
        }

        async fn ask_question(&self, _question: &str) -> StoreResult<Answer> {
            panic!("list never asks");
        }
    }

    fn note(id: &str, title: &str, body: &str) -> Note {
        Note {
            id: id.to_string(),
            title: title.to_string(),
            body: body.to_string(),
        }
    }

    #[tokio::test]
    async fn refresh_replaces_list_wholesale() {
        let mut list = NoteList::new();

        let first = FakeStore {
            result: Ok(vec![note("1", "A", "hi"), note("2", "B", "yo")]),
        };
        assert!(list.refresh(&first).await);
        assert_eq!(list.notes().len(), 2);

        // A later fetch missing note "1" drops it; no merge.
        let second = FakeStore {
            result: Ok(vec![note("2", "B", "yo")]),
        };
        assert!(list.refresh(&second).await);
        assert_eq!(list.notes().len(), 1);
        assert!(list.find("1").is_none());
    }

    #[tokio::test]
    async fn failed_refresh_keeps_no_stale_notes() {
        let mut list = NoteList::new();
        let ok = FakeStore {
            result: Ok(vec![note("1", "A", "hi")]),
        };
        list.refresh(&ok).await;

        let failing = FakeStore { result: Err(()) };
        assert!(!list.refresh(&failing).await);
        assert!(list.notes().is_empty());
        assert!(list.last_error().is_some());
    }

    #[tokio::test]
    async fn empty_list_is_a_valid_result() {
        let mut list = NoteList::new();
        let empty = FakeStore { result: Ok(vec![]) };
        assert!(list.refresh(&empty).await);
        assert!(list.notes().is_empty());
        assert!(list.last_error().is_none());
    }

    #[tokio::test]
    async fn previews_project_title_and_rendered_excerpt() {
        let mut list = NoteList::new();
        let store = FakeStore {
            result: Ok(vec![note("1", "A", "# Heading\n\nSome *rich* text")]),
        };
        list.refresh(&store).await;

        let previews = list.previews();
        assert_eq!(previews.len(), 1);
        assert_eq!(previews[0].id, "1");
        assert_eq!(previews[0].title, "A");
        assert!(previews[0].excerpt.contains("Some rich text"));
        assert!(!previews[0].excerpt.contains('*'));
    }
}
