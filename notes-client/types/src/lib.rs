//! Shared types for the notes client and the remote note store API.

use serde::{Deserialize, Serialize};

// =====================================================
// Domain Types
// =====================================================

/// A persisted title+body text record identified by an opaque id.
///
/// The id is assigned by the store; an empty id is the sentinel for a
/// creation draft that has not been persisted yet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    pub id: String,
    pub title: String,
    /// Markdown text
    pub body: String,
}

impl Note {
    /// True once the store has assigned an id.
    pub fn is_persisted(&self) -> bool {
        !self.id.is_empty()
    }
}

/// A Note without an id, submitted to create.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewNote {
    pub title: String,
    pub body: String,
}

// =====================================================
// Ask Endpoint Types
// =====================================================

/// Free-text question posted to the ask endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Question {
    pub question: String,
}

/// Generated answer text; transient view-model, never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Answer {
    pub answer: String,
}
