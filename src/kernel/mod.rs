//! Headless document workspace: open documents, their change notifications
//! and the close workflow.

pub mod document;
pub mod notify;
pub mod services;
pub mod workspace;

pub use document::{
    request_close, CloseOutcome, ContentModel, Document, DocumentProperty, DocumentView,
    ModelProperty, TextDocument,
};
pub use notify::{PropertyNotifier, SubscriptionId};
pub use workspace::{DocumentId, Workspace, WorkspaceError, WorkspaceEvent};
