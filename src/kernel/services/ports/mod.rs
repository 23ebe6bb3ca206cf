//! Service ports: traits + data contracts.

pub mod content;
pub mod file;
pub mod prompt;
pub mod settings;

pub use content::{ContentError, ContentHandler};
pub use file::{FileError, FileProvider};
pub use prompt::{CloseChoice, ConfirmPrompt, ConfirmRequest};
pub use settings::{DocumentSettings, RemovalPolicy, Settings};
