//! Free-text question controller.

use crate::store::NoteStore;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum AskState {
    #[default]
    Idle,
    Loading,
    Answered(String),
}

/// Single-field ask form: submit clears any previous answer, flips to
/// Loading, and is guaranteed to leave Loading on every exit path.
#[derive(Default)]
pub struct AskController {
    state: AskState,
}

/// Releases the loading flag on drop unless an answer landed first.
struct LoadingGuard<'a> {
    controller: &'a mut AskController,
}

impl Drop for LoadingGuard<'_> {
    fn drop(&mut self) {
        if self.controller.state == AskState::Loading {
            self.controller.state = AskState::Idle;
        }
    }
}

impl AskController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &AskState {
        &self.state
    }

    pub fn is_loading(&self) -> bool {
        self.state == AskState::Loading
    }

    pub fn answer(&self) -> Option<&str> {
        match &self.state {
            AskState::Answered(text) => Some(text),
            _ => None,
        }
    }

    /// Ask the store. Returns true when an answer arrived; on failure the
    /// controller is back in Idle, never stuck in Loading.
    pub async fn submit<S: NoteStore + ?Sized>(&mut self, store: &S, question: &str) -> bool {
        self.state = AskState::Loading;
        let guard = LoadingGuard { controller: self };

        match store.ask_question(question).await {
            Ok(answer) => {
                guard.controller.state = AskState::Answered(answer.answer);
                true
            }
            Err(e) => {
                log::warn!("Question failed: {}", e);
                false
            }
        }
    }
}
