//! Service adapters: OS specific implementations (IO).

pub mod content;
pub mod file;
pub mod paths;
pub mod settings;

pub use content::FileContentHandler;
pub use file::LocalFileProvider;
pub use paths::ensure_log_dir;
pub use settings::load_settings;
