//! Typed HTTP client for the remote note store API.

use async_trait::async_trait;
use notes_client_types::{Answer, NewNote, Note, Question};

use crate::error::StoreError;

pub type StoreResult<T> = Result<T, StoreError>;

/// The remote service owning persisted note state.
///
/// Every operation is a single round trip: no retries, no caching, no
/// timeout at this layer. Controllers depend on this trait so tests can
/// substitute an in-memory double.
#[async_trait]
pub trait NoteStore: Send + Sync {
    /// GET /notes. An empty list is a valid, non-error result.
    async fn list_all_notes(&self) -> StoreResult<Vec<Note>>;

    /// GET /notes/{id}. A missing id surfaces as a remote failure; callers
    /// treat any failure as "could not load".
    async fn get_note(&self, id: &str) -> StoreResult<Note>;

    /// POST /notes. The store assigns the id; the returned note is the only
    /// source of the persisted id.
    async fn create_note(&self, note: NewNote) -> StoreResult<Note>;

    /// PUT /notes/{id}. Fails with `EmptyNoteId` before any request when the
    /// note has never been persisted.
    async fn update_note(&self, note: &Note) -> StoreResult<Note>;

    /// DELETE /notes/{id}. Idempotent by contract: deleting an already-gone
    /// note may surface a generic remote error but never corrupts state.
    async fn delete_note(&self, note: &Note) -> StoreResult<()>;

    /// POST /ai. Fire-and-forget with respect to persistence; no note is
    /// created or modified.
    async fn ask_question(&self, question: &str) -> StoreResult<Answer>;
}

/// reqwest-backed `NoteStore` against a configurable base URL.
pub struct HttpNoteStore {
    base_url: String,
    client: reqwest::Client,
}

impl HttpNoteStore {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: reqwest::Client::new(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Turn a non-2xx response into `Remote`, passing 2xx through.
    async fn check(resp: reqwest::Response) -> StoreResult<reqwest::Response> {
        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(StoreError::Remote {
                status: status.as_u16(),
                body,
            });
        }
        Ok(resp)
    }
}

#[async_trait]
impl NoteStore for HttpNoteStore {
    async fn list_all_notes(&self) -> StoreResult<Vec<Note>> {
        let resp = self
            .client
            .get(format!("{}/notes", self.base_url))
            .send()
            .await
            .map_err(StoreError::Network)?;

        Self::check(resp)
            .await?
            .json::<Vec<Note>>()
            .await
            .map_err(StoreError::Decode)
    }

    async fn get_note(&self, id: &str) -> StoreResult<Note> {
        let resp = self
            .client
            .get(format!("{}/notes/{}", self.base_url, id))
            .send()
            .await
            .map_err(StoreError::Network)?;

        Self::check(resp)
            .await?
            .json::<Note>()
            .await
            .map_err(StoreError::Decode)
    }

    async fn create_note(&self, note: NewNote) -> StoreResult<Note> {
        let resp = self
            .client
            .post(format!("{}/notes", self.base_url))
            .json(&note)
            .send()
            .await
            .map_err(StoreError::Network)?;

        let created = Self::check(resp)
            .await?
            .json::<Note>()
            .await
            .map_err(StoreError::Decode)?;

        log::info!("Created note {}", created.id);
        Ok(created)
    }

    async fn update_note(&self, note: &Note) -> StoreResult<Note> {
        if note.id.is_empty() {
            return Err(StoreError::EmptyNoteId);
        }

        let resp = self
            .client
            .put(format!("{}/notes/{}", self.base_url, note.id))
            .json(note)
            .send()
            .await
            .map_err(StoreError::Network)?;

        Self::check(resp)
            .await?
            .json::<Note>()
            .await
            .map_err(StoreError::Decode)
    }

    async fn delete_note(&self, note: &Note) -> StoreResult<()> {
        if note.id.is_empty() {
            return Err(StoreError::EmptyNoteId);
        }

        let resp = self
            .client
            .delete(format!("{}/notes/{}", self.base_url, note.id))
            .send()
            .await
            .map_err(StoreError::Network)?;

        Self::check(resp).await?;
        log::info!("Deleted note {}", note.id);
        Ok(())
    }

    async fn ask_question(&self, question: &str) -> StoreResult<Answer> {
        let body = Question {
            question: question.to_string(),
        };

        let resp = self
            .client
            .post(format!("{}/ai", self.base_url))
            .json(&body)
            .send()
            .await
            .map_err(StoreError::Network)?;

        Self::check(resp)
            .await?
            .json::<Answer>()
            .await
            .map_err(StoreError::Decode)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_trailing_slash_is_trimmed() {
        let store = HttpNoteStore::new("http://localhost:8080/api/");
        assert_eq!(store.base_url(), "http://localhost:8080/api");
    }

    #[tokio::test]
    async fn update_with_empty_id_fails_before_any_request() {
        // Unroutable base URL: reaching the network would fail differently.
        let store = HttpNoteStore::new("http://127.0.0.1:9");
        let draft = Note {
            id: String::new(),
            title: "t".to_string(),
            body: String::new(),
        };
        assert!(matches!(
            store.update_note(&draft).await,
            Err(StoreError::EmptyNoteId)
        ));
        assert!(matches!(
            store.delete_note(&draft).await,
            Err(StoreError::EmptyNoteId)
        ));
    }
}
