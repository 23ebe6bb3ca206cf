use ropey::Rope;
use std::path::{Path, PathBuf};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ModelProperty {
    Text,
    Dirty,
    Location,
}

/// The persisted side of a document: its text, where it lives on disk and
/// whether it has edits that were not written back yet.
///
/// Mutators record a `ModelProperty` for every value that actually changed.
/// The owning `DocumentView` drains them through `take_changes`.
#[derive(Debug, Clone)]
pub struct ContentModel {
    text: Rope,
    location: Option<PathBuf>,
    dirty: bool,
    pending: Vec<ModelProperty>,
}

impl ContentModel {
    pub fn new() -> Self {
        Self {
            text: Rope::new(),
            location: None,
            dirty: false,
            pending: Vec::new(),
        }
    }

    pub fn from_file(path: PathBuf, content: &str) -> Self {
        Self {
            text: Rope::from_str(content),
            location: Some(path),
            dirty: false,
            pending: Vec::new(),
        }
    }

    pub fn text(&self) -> &Rope {
        &self.text
    }

    pub fn location(&self) -> Option<&Path> {
        self.location.as_deref()
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn set_text(&mut self, text: &str) {
        self.text = Rope::from_str(text);
        self.record(ModelProperty::Text);
        self.set_dirty(true);
    }

    pub fn insert(&mut self, char_idx: usize, text: &str) {
        if text.is_empty() {
            return;
        }
        let char_idx = char_idx.min(self.text.len_chars());
        self.text.insert(char_idx, text);
        self.record(ModelProperty::Text);
        self.set_dirty(true);
    }

    pub fn append(&mut self, text: &str) {
        let end = self.text.len_chars();
        self.insert(end, text);
    }

    pub fn set_dirty(&mut self, dirty: bool) {
        if self.dirty != dirty {
            self.dirty = dirty;
            self.record(ModelProperty::Dirty);
        }
    }

    fn set_location(&mut self, location: Option<PathBuf>) {
        if self.location != location {
            self.location = location;
            self.record(ModelProperty::Location);
        }
    }

    pub fn mark_saved(&mut self, location: PathBuf) {
        self.set_location(Some(location));
        self.set_dirty(false);
    }

    pub fn take_changes(&mut self) -> Vec<ModelProperty> {
        std::mem::take(&mut self.pending)
    }

    fn record(&mut self, property: ModelProperty) {
        if !self.pending.contains(&property) {
            self.pending.push(property);
        }
    }
}

impl Default for ContentModel {
    fn default() -> Self {
        Self::new()
    }
}
