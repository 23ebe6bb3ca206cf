//! Open documents: the per-document state the view layer binds to, plus the
//! lifecycle that closes them.

pub mod lifecycle;
pub mod model;

use crate::kernel::notify::{PropertyNotifier, SubscriptionId};
use crate::kernel::services::ports::content::ContentHandler;
use crate::kernel::services::ports::settings::DocumentSettings;
use std::ops::{Deref, DerefMut};
use std::path::Path;
use std::rc::Rc;

pub use lifecycle::{request_close, CloseOutcome};
pub use model::{ContentModel, ModelProperty};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DocumentProperty {
    Title,
    Tooltip,
    ContentId,
    IsSelected,
    IsActive,
}

/// State shared by every kind of document.
///
/// Setters only notify when the value actually changes.
pub struct DocumentView {
    title: String,
    tooltip: Option<String>,
    content_id: Option<String>,
    icon: Option<String>,
    is_selected: bool,
    is_active: bool,
    dirty_marker: String,
    model: ContentModel,
    notifier: PropertyNotifier<DocumentProperty>,
}

impl DocumentView {
    pub fn new(title: impl Into<String>, model: ContentModel, settings: &DocumentSettings) -> Self {
        let location = model.location().map(|p| p.display().to_string());
        Self {
            title: title.into(),
            tooltip: location.clone(),
            content_id: location,
            icon: None,
            is_selected: false,
            is_active: false,
            dirty_marker: settings.dirty_marker.clone(),
            model,
            notifier: PropertyNotifier::new(),
        }
    }

    /// The title without the dirty marker.
    pub fn base_title(&self) -> &str {
        &self.title
    }

    pub fn display_title(&self) -> String {
        if self.model.is_dirty() {
            format!("{}{}", self.title, self.dirty_marker)
        } else {
            self.title.clone()
        }
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        let title = title.into();
        if self.title != title {
            self.title = title;
            self.raise(DocumentProperty::Title);
        }
    }

    pub fn tooltip(&self) -> Option<&str> {
        self.tooltip.as_deref()
    }

    pub fn set_tooltip(&mut self, tooltip: Option<String>) {
        if self.tooltip != tooltip {
            self.tooltip = tooltip;
            self.raise(DocumentProperty::Tooltip);
        }
    }

    pub fn content_id(&self) -> Option<&str> {
        self.content_id.as_deref()
    }

    pub fn set_content_id(&mut self, content_id: Option<String>) {
        if self.content_id != content_id {
            self.content_id = content_id;
            self.raise(DocumentProperty::ContentId);
        }
    }

    pub fn icon(&self) -> Option<&str> {
        self.icon.as_deref()
    }

    pub fn set_icon(&mut self, icon: Option<String>) {
        self.icon = icon;
    }

    pub fn is_selected(&self) -> bool {
        self.is_selected
    }

    pub fn set_selected(&mut self, selected: bool) {
        if self.is_selected != selected {
            self.is_selected = selected;
            self.raise(DocumentProperty::IsSelected);
        }
    }

    pub fn is_active(&self) -> bool {
        self.is_active
    }

    pub fn set_active(&mut self, active: bool) {
        if self.is_active != active {
            self.is_active = active;
            self.raise(DocumentProperty::IsActive);
        }
    }

    pub fn model(&self) -> &ContentModel {
        &self.model
    }

    /// Mutable access to the content model. Model changes are forwarded to
    /// `on_model_property_changed` when the returned guard is dropped.
    pub fn edit_model(&mut self) -> ModelEdit<'_> {
        ModelEdit {
            view: self,
            retitled: false,
        }
    }

    pub fn is_dirty(&self) -> bool {
        self.model.is_dirty()
    }

    pub fn location(&self) -> Option<&Path> {
        self.model.location()
    }

    /// The displayed title depends on the dirty flag, so any model change
    /// re-raises `Title`.
    pub fn on_model_property_changed(&mut self, changes: &[ModelProperty]) {
        if changes.is_empty() {
            return;
        }
        self.raise(DocumentProperty::Title);
    }

    pub fn subscribe(&mut self, callback: impl FnMut(&DocumentProperty) + 'static) -> SubscriptionId {
        self.notifier.subscribe(callback)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.notifier.unsubscribe(id)
    }

    fn raise(&mut self, property: DocumentProperty) {
        self.notifier.notify(&property);
    }
}

impl std::fmt::Debug for DocumentView {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DocumentView")
            .field("title", &self.title)
            .field("location", &self.model.location())
            .field("dirty", &self.model.is_dirty())
            .field("selected", &self.is_selected)
            .field("active", &self.is_active)
            .finish()
    }
}

pub struct ModelEdit<'a> {
    view: &'a mut DocumentView,
    retitled: bool,
}

impl ModelEdit<'_> {
    /// Renames the document as part of this edit. The single `Title`
    /// notification raised when the edit ends covers both changes.
    pub fn retitle(&mut self, title: impl Into<String>) {
        let title = title.into();
        if self.view.title != title {
            self.view.title = title;
            self.retitled = true;
        }
    }
}

impl Deref for ModelEdit<'_> {
    type Target = ContentModel;

    fn deref(&self) -> &ContentModel {
        &self.view.model
    }
}

impl DerefMut for ModelEdit<'_> {
    fn deref_mut(&mut self) -> &mut ContentModel {
        &mut self.view.model
    }
}

impl Drop for ModelEdit<'_> {
    fn drop(&mut self) {
        let changes = self.view.model.take_changes();
        if changes.is_empty() && self.retitled {
            self.view.raise(DocumentProperty::Title);
        } else {
            self.view.on_model_property_changed(&changes);
        }
    }
}

/// What the workspace and the close workflow need from a document.
///
/// Each kind of document supplies its shared `DocumentView` and the content
/// handler that knows how to persist it.
pub trait Document {
    fn view(&self) -> &DocumentView;

    fn view_mut(&mut self) -> &mut DocumentView;

    fn handler(&self) -> Rc<dyn ContentHandler>;

    fn base_title(&self) -> &str {
        self.view().base_title()
    }

    fn display_title(&self) -> String {
        self.view().display_title()
    }

    fn is_dirty(&self) -> bool {
        self.view().is_dirty()
    }

    fn location(&self) -> Option<&Path> {
        self.view().location()
    }
}

/// A plain text document.
pub struct TextDocument {
    view: DocumentView,
    handler: Rc<dyn ContentHandler>,
}

impl TextDocument {
    pub fn new(
        title: impl Into<String>,
        model: ContentModel,
        handler: Rc<dyn ContentHandler>,
        settings: &DocumentSettings,
    ) -> Self {
        let mut view = DocumentView::new(title, model, settings);
        view.set_icon(Some(handler.content_type().to_string()));
        Self { view, handler }
    }
}

impl Document for TextDocument {
    fn view(&self) -> &DocumentView {
        &self.view
    }

    fn view_mut(&mut self) -> &mut DocumentView {
        &mut self.view
    }

    fn handler(&self) -> Rc<dyn ContentHandler> {
        Rc::clone(&self.handler)
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/kernel/document.rs"]
mod tests;
