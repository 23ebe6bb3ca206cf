//! 文本内容处理器
//!
//! 通过 FileProvider 读写文档文本；另存为时由注入的 picker 选择路径

use crate::kernel::document::{ContentModel, DocumentView};
use crate::kernel::services::adapters::file::LocalFileProvider;
use crate::kernel::services::ports::content::{ContentError, ContentHandler, Result};
use crate::kernel::services::ports::file::FileProvider;
use std::path::{Path, PathBuf};

/// Asks where to save a document. Receives the document's base title;
/// `None` means the user backed out.
type SaveAsPicker = Box<dyn Fn(&str) -> Option<PathBuf>>;

pub struct FileContentHandler<P: FileProvider = LocalFileProvider> {
    provider: P,
    save_as: Option<SaveAsPicker>,
}

impl FileContentHandler<LocalFileProvider> {
    pub fn new() -> Self {
        Self::with_provider(LocalFileProvider::new())
    }
}

impl Default for FileContentHandler<LocalFileProvider> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: FileProvider> FileContentHandler<P> {
    pub fn with_provider(provider: P) -> Self {
        Self {
            provider,
            save_as: None,
        }
    }

    pub fn with_save_as(mut self, picker: impl Fn(&str) -> Option<PathBuf> + 'static) -> Self {
        self.save_as = Some(Box::new(picker));
        self
    }

    fn target_path(&self, document: &DocumentView, save_as: bool) -> Result<PathBuf> {
        match document.location() {
            Some(path) if !save_as => Ok(path.to_path_buf()),
            _ => {
                let picker = self.save_as.as_ref().ok_or(ContentError::NoLocation)?;
                picker(document.base_title()).ok_or(ContentError::Cancelled)
            }
        }
    }
}

impl<P: FileProvider> ContentHandler for FileContentHandler<P> {
    fn content_type(&self) -> &'static str {
        "text"
    }

    fn new_content(&self) -> ContentModel {
        ContentModel::new()
    }

    fn open_content(&self, path: &Path) -> Result<ContentModel> {
        let text = self.provider.read_file(path)?;
        Ok(ContentModel::from_file(path.to_path_buf(), &text))
    }

    fn save_content(&self, document: &mut DocumentView, save_as: bool) -> Result<()> {
        let path = self.target_path(document, save_as)?;
        self.save_content_to(document, &path)
    }

    fn save_content_to(&self, document: &mut DocumentView, path: &Path) -> Result<()> {
        let text = document.model().text().to_string();
        self.provider.write_file(path, &text)?;

        let shown = path.display().to_string();
        {
            let mut model = document.edit_model();
            if let Some(name) = path.file_name() {
                model.retitle(name.to_string_lossy());
            }
            model.mark_saved(path.to_path_buf());
        }
        document.set_tooltip(Some(shown.clone()));
        document.set_content_id(Some(shown.clone()));

        tracing::info!(path = %shown, scheme = self.provider.scheme(), "document saved");
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../../../tests/unit/kernel/services/adapters/content.rs"]
mod tests;
