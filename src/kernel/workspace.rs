//! The set of open documents.
//!
//! A document is open for exactly as long as it sits in this collection.

use crate::kernel::document::lifecycle::{request_close, CloseOutcome};
use crate::kernel::document::{Document, TextDocument};
use crate::kernel::notify::{PropertyNotifier, SubscriptionId};
use crate::kernel::services::ports::content::{ContentError, ContentHandler};
use crate::kernel::services::ports::prompt::ConfirmPrompt;
use crate::kernel::services::ports::settings::DocumentSettings;
use slotmap::{new_key_type, SlotMap};
use std::path::Path;
use std::rc::Rc;

new_key_type! {
    pub struct DocumentId;
}

pub type Result<T> = std::result::Result<T, WorkspaceError>;

#[derive(Debug)]
pub enum WorkspaceError {
    UnknownDocument(DocumentId),
    Content(ContentError),
}

impl std::fmt::Display for WorkspaceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WorkspaceError::UnknownDocument(id) => {
                write!(f, "Document is not open in this workspace: {:?}", id)
            }
            WorkspaceError::Content(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for WorkspaceError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            WorkspaceError::Content(e) => Some(e),
            _ => None,
        }
    }
}

impl From<ContentError> for WorkspaceError {
    fn from(e: ContentError) -> Self {
        WorkspaceError::Content(e)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WorkspaceEvent {
    Added(DocumentId),
    Removed(DocumentId),
    ActiveChanged(Option<DocumentId>),
}

pub struct Workspace {
    documents: SlotMap<DocumentId, Box<dyn Document>>,
    order: Vec<DocumentId>,
    active: Option<DocumentId>,
    untitled_count: u32,
    settings: DocumentSettings,
    notifier: PropertyNotifier<WorkspaceEvent>,
}

impl Workspace {
    pub fn new(settings: DocumentSettings) -> Self {
        Self {
            documents: SlotMap::with_key(),
            order: Vec::new(),
            active: None,
            untitled_count: 0,
            settings,
            notifier: PropertyNotifier::new(),
        }
    }

    pub fn settings(&self) -> &DocumentSettings {
        &self.settings
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn contains(&self, id: DocumentId) -> bool {
        self.documents.contains_key(id)
    }

    pub fn get(&self, id: DocumentId) -> Option<&dyn Document> {
        self.documents.get(id).map(|d| &**d)
    }

    pub fn get_mut(&mut self, id: DocumentId) -> Option<&mut (dyn Document + 'static)> {
        self.documents.get_mut(id).map(|d| &mut **d)
    }

    /// Open documents in the order they were added.
    pub fn documents(&self) -> impl Iterator<Item = (DocumentId, &dyn Document)> + '_ {
        self.order
            .iter()
            .filter_map(|&id| self.documents.get(id).map(|d| (id, &**d)))
    }

    pub fn ids(&self) -> &[DocumentId] {
        &self.order
    }

    pub fn active(&self) -> Option<DocumentId> {
        self.active
    }

    pub fn has_unsaved_changes(&self) -> bool {
        self.documents.values().any(|d| d.is_dirty())
    }

    pub fn next_untitled_title(&mut self) -> String {
        self.untitled_count += 1;
        format!("{}-{}", self.settings.untitled_prefix, self.untitled_count)
    }

    pub fn add(&mut self, document: Box<dyn Document>) -> DocumentId {
        let id = self.documents.insert(document);
        self.order.push(id);
        self.notifier.notify(&WorkspaceEvent::Added(id));
        id
    }

    pub fn remove(&mut self, id: DocumentId) -> Option<Box<dyn Document>> {
        let mut document = self.documents.remove(id)?;
        let pos = self.order.iter().position(|&d| d == id);
        if let Some(pos) = pos {
            self.order.remove(pos);
        }
        tracing::debug!(title = %document.base_title(), "document removed from workspace");

        let view = document.view_mut();
        view.set_active(false);
        view.set_selected(false);
        self.notifier.notify(&WorkspaceEvent::Removed(id));

        if self.active == Some(id) {
            self.active = None;
            let next = pos
                .and_then(|p| self.order.get(p).copied())
                .or_else(|| self.order.last().copied());
            match next {
                Some(next) => self.activate(next),
                None => self.notifier.notify(&WorkspaceEvent::ActiveChanged(None)),
            }
        }

        Some(document)
    }

    pub fn set_active(&mut self, id: DocumentId) -> Result<()> {
        if !self.contains(id) {
            return Err(WorkspaceError::UnknownDocument(id));
        }
        if self.active != Some(id) {
            self.activate(id);
        }
        Ok(())
    }

    pub fn new_document(&mut self, handler: Rc<dyn ContentHandler>) -> DocumentId {
        let title = self.next_untitled_title();
        let model = handler.new_content();
        let document = TextDocument::new(title, model, handler, &self.settings);
        let id = self.add(Box::new(document));
        self.activate(id);
        id
    }

    /// Opens `path`, or re-activates the document that already shows it.
    pub fn open_document(
        &mut self,
        handler: Rc<dyn ContentHandler>,
        path: &Path,
    ) -> Result<DocumentId> {
        let existing = self
            .documents()
            .find(|(_, d)| d.location() == Some(path))
            .map(|(id, _)| id);
        if let Some(id) = existing {
            self.set_active(id)?;
            return Ok(id);
        }

        let model = handler.open_content(path)?;
        let title = path
            .file_name()
            .map(|s| s.to_string_lossy().to_string())
            .unwrap_or_else(|| path.display().to_string());
        tracing::info!(path = %path.display(), "opening document");

        let document = TextDocument::new(title, model, handler, &self.settings);
        let id = self.add(Box::new(document));
        self.activate(id);
        Ok(id)
    }

    pub fn close_document(
        &mut self,
        id: DocumentId,
        prompt: &mut dyn ConfirmPrompt,
    ) -> Result<CloseOutcome> {
        request_close(self, id, prompt)
    }

    /// Closes every open document in order. Stops at the first document
    /// whose close was cancelled and returns `false`.
    pub fn close_all(&mut self, prompt: &mut dyn ConfirmPrompt) -> Result<bool> {
        for id in self.order.clone() {
            if !self.contains(id) {
                continue;
            }
            if !self.close_document(id, prompt)?.is_completed() {
                return Ok(false);
            }
        }
        Ok(true)
    }

    pub fn subscribe(&mut self, callback: impl FnMut(&WorkspaceEvent) + 'static) -> SubscriptionId {
        self.notifier.subscribe(callback)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.notifier.unsubscribe(id)
    }

    fn activate(&mut self, id: DocumentId) {
        if let Some(prev) = self.active.take() {
            if let Some(doc) = self.documents.get_mut(prev) {
                let view = doc.view_mut();
                view.set_active(false);
                view.set_selected(false);
            }
        }
        if let Some(doc) = self.documents.get_mut(id) {
            let view = doc.view_mut();
            view.set_active(true);
            view.set_selected(true);
            self.active = Some(id);
        }
        self.notifier.notify(&WorkspaceEvent::ActiveChanged(self.active));
    }
}

impl Default for Workspace {
    fn default() -> Self {
        Self::new(DocumentSettings::default())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/workspace.rs"]
mod tests;
