pub const CLOSE_CONFIRM_HEADER: &str = "Are you sure?";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CloseChoice {
    Save,
    Discard,
    Cancel,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConfirmRequest {
    pub header: String,
    pub message: String,
}

impl ConfirmRequest {
    pub fn save_changes(title: &str) -> Self {
        Self {
            header: CLOSE_CONFIRM_HEADER.to_string(),
            message: format!("Save changes for document '{}'?", title),
        }
    }
}

/// Blocking Save/Discard/Cancel question shown before a dirty document is
/// closed.
pub trait ConfirmPrompt {
    fn confirm(&mut self, request: &ConfirmRequest) -> CloseChoice;
}

impl<F> ConfirmPrompt for F
where
    F: FnMut(&ConfirmRequest) -> CloseChoice,
{
    fn confirm(&mut self, request: &ConfirmRequest) -> CloseChoice {
        self(request)
    }
}
