//! 文件读写后端

pub mod local;

pub use local::LocalFileProvider;
