//! Closing a document.
//!
//! A clean document is removed straight away. A dirty one goes through the
//! Save/Discard/Cancel prompt first; a failed save counts as Cancel.

use crate::kernel::services::ports::prompt::{CloseChoice, ConfirmPrompt, ConfirmRequest};
use crate::kernel::services::ports::settings::RemovalPolicy;
use crate::kernel::workspace::{DocumentId, Result, Workspace, WorkspaceError};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CloseOutcome {
    /// Removed from the workspace.
    Closed,
    /// The user confirmed, but the document already had a location when the
    /// close began and the removal policy leaves it in the workspace.
    Retained,
    Cancelled,
}

impl CloseOutcome {
    pub fn is_completed(self) -> bool {
        !matches!(self, CloseOutcome::Cancelled)
    }
}

pub fn request_close(
    workspace: &mut Workspace,
    id: DocumentId,
    prompt: &mut dyn ConfirmPrompt,
) -> Result<CloseOutcome> {
    let policy = workspace.settings().removal_policy;
    let document = workspace
        .get_mut(id)
        .ok_or(WorkspaceError::UnknownDocument(id))?;

    if !document.is_dirty() {
        tracing::info!(
            location = %document
                .location()
                .map(|p| p.display().to_string())
                .unwrap_or_default(),
            "closing document"
        );
        workspace.remove(id);
        return Ok(CloseOutcome::Closed);
    }

    let untitled = document.location().is_none();
    let request = ConfirmRequest::save_changes(document.base_title());
    let mut choice = prompt.confirm(&request);
    tracing::debug!(title = %document.base_title(), ?choice, "close confirmation");

    if choice == CloseChoice::Save {
        let handler = document.handler();
        if let Err(e) = handler.save_content(document.view_mut(), false) {
            tracing::warn!(title = %document.base_title(), error = %e, "save failed, close aborted");
            choice = CloseChoice::Cancel;
        }
    }

    if choice == CloseChoice::Cancel {
        return Ok(CloseOutcome::Cancelled);
    }

    let remove = match policy {
        RemovalPolicy::UntitledOnly => untitled,
        RemovalPolicy::Always => true,
    };
    if !remove {
        tracing::debug!(title = %document.base_title(), "document has a location, left in workspace");
        return Ok(CloseOutcome::Retained);
    }

    workspace.remove(id);
    Ok(CloseOutcome::Closed)
}

#[cfg(test)]
#[path = "../../../tests/unit/kernel/document/lifecycle.rs"]
mod tests;
