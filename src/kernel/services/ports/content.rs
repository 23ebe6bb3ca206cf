use crate::kernel::document::{ContentModel, DocumentView};
use crate::kernel::services::ports::file::FileError;
use std::path::Path;

pub type Result<T> = std::result::Result<T, ContentError>;

#[derive(Debug)]
pub enum ContentError {
    /// The user backed out of choosing where to save.
    Cancelled,
    NoLocation,
    File(FileError),
}

impl std::fmt::Display for ContentError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ContentError::Cancelled => write!(f, "Save cancelled"),
            ContentError::NoLocation => write!(f, "Document has no location"),
            ContentError::File(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for ContentError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ContentError::File(e) => Some(e),
            _ => None,
        }
    }
}

impl From<FileError> for ContentError {
    fn from(e: FileError) -> Self {
        ContentError::File(e)
    }
}

/// Creates, loads and persists document content.
///
/// Both save methods own the whole save: on success the document's model
/// must no longer be dirty and must carry the location it was written to.
/// On failure the document is left as it was.
pub trait ContentHandler {
    fn content_type(&self) -> &'static str;

    fn new_content(&self) -> ContentModel;

    fn open_content(&self, path: &Path) -> Result<ContentModel>;

    /// Saves to the document's location, or asks for one when there is none
    /// or `save_as` is set.
    fn save_content(&self, document: &mut DocumentView, save_as: bool) -> Result<()>;

    /// Saves to `path` without asking.
    fn save_content_to(&self, document: &mut DocumentView, path: &Path) -> Result<()>;
}
