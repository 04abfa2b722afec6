//! Note editor state machine.
//!
//! One editor instance owns one note's view/edit state; switching notes
//! means constructing a fresh editor, which discards any prior draft.

use notes_client_types::{NewNote, Note};

use crate::store::NoteStore;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorMode {
    /// Read-only, markdown-rendered.
    Viewing,
    /// Draft fields bound to raw text input.
    Editing,
}

/// What `submit` did, so the caller can decide where to navigate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Persisted; the editor now holds the store's version and is Viewing.
    Saved,
    /// Validation or store failure; drafts untouched, still Editing.
    Rejected,
}

pub struct NoteEditor {
    note: Note,
    draft_title: String,
    draft_body: String,
    mode: EditorMode,
    last_error: Option<String>,
}

impl NoteEditor {
    /// Read-only view of a persisted note.
    pub fn view(note: Note) -> Self {
        Self {
            draft_title: note.title.clone(),
            draft_body: note.body.clone(),
            note,
            mode: EditorMode::Viewing,
            last_error: None,
        }
    }

    /// Edit an existing note; drafts seeded from its current fields.
    pub fn edit(note: Note) -> Self {
        let mut editor = Self::view(note);
        editor.mode = EditorMode::Editing;
        editor
    }

    /// Create a new note; empty-id sentinel until the store assigns one.
    pub fn create() -> Self {
        Self::edit(Note {
            id: String::new(),
            title: String::new(),
            body: String::new(),
        })
    }

    pub fn mode(&self) -> EditorMode {
        self.mode
    }

    /// The last note the store acknowledged (or the unsaved sentinel).
    pub fn note(&self) -> &Note {
        &self.note
    }

    pub fn draft_title(&self) -> &str {
        &self.draft_title
    }

    pub fn draft_body(&self) -> &str {
        &self.draft_body
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    pub fn set_draft_title(&mut self, title: impl Into<String>) {
        self.draft_title = title.into();
    }

    pub fn set_draft_body(&mut self, body: impl Into<String>) {
        self.draft_body = body.into();
    }

    /// Viewing -> Editing, reseeding drafts from the acknowledged note.
    pub fn begin_edit(&mut self) {
        if self.mode == EditorMode::Viewing {
            self.draft_title = self.note.title.clone();
            self.draft_body = self.note.body.clone();
            self.mode = EditorMode::Editing;
        }
    }

    /// Discard the draft unconditionally and return to Viewing.
    pub fn cancel(&mut self) {
        self.draft_title = self.note.title.clone();
        self.draft_body = self.note.body.clone();
        self.last_error = None;
        self.mode = EditorMode::Viewing;
    }

    /// Submit the draft to the store.
    ///
    /// An empty title short-circuits before any store call. A draft with the
    /// empty-id sentinel is created; anything else is updated in place. On
    /// failure the drafts stay exactly as entered and the editor remains in
    /// Editing with the error recorded.
    pub async fn submit<S: NoteStore + ?Sized>(&mut self, store: &S) -> SubmitOutcome {
        if self.mode != EditorMode::Editing {
            log::warn!("Submit ignored outside edit mode");
            return SubmitOutcome::Rejected;
        }

        if self.draft_title.trim().is_empty() {
            self.last_error = Some("title must not be empty".to_string());
            return SubmitOutcome::Rejected;
        }

        let result = if self.note.id.is_empty() {
            store
                .create_note(NewNote {
                    title: self.draft_title.clone(),
                    body: self.draft_body.clone(),
                })
                .await
        } else {
            store
                .update_note(&Note {
                    id: self.note.id.clone(),
                    title: self.draft_title.clone(),
                    body: self.draft_body.clone(),
                })
                .await
        };

        match result {
            Ok(saved) => {
                self.note = saved;
                self.draft_title = self.note.title.clone();
                self.draft_body = self.note.body.clone();
                self.last_error = None;
                self.mode = EditorMode::Viewing;
                SubmitOutcome::Saved
            }
            Err(e) => {
                log::warn!("Submit failed for note '{}': {}", self.note.id, e);
                self.last_error = Some(e.to_string());
                SubmitOutcome::Rejected
            }
        }
    }
}
