//! Services layer (ports + adapters).
//!
//! - `ports`: contracts the kernel calls into (content handling, prompts, settings).
//! - `adapters`: OS specific implementations (disk IO, app directories).

pub mod adapters;
pub mod ports;
