//! Terminal client for a remote note store.
//!
//! List, create, edit, and delete markdown notes, and ask free-text
//! questions about them, against a REST backend that owns all persisted
//! state. The client keeps no cache and never retries; every view reflects
//! exactly one round trip.

pub mod ask;
pub mod config;
pub mod editor;
pub mod error;
pub mod list;
pub mod markdown;
pub mod router;
pub mod shell;
pub mod store;

pub use notes_client_types::{Answer, NewNote, Note, Question};
