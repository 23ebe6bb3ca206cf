//! docshell - document workspace core for an editor shell
//!
//! Modules:
//! - kernel::document: per-document state, change notification, close workflow
//! - kernel::workspace: the collection of open documents
//! - kernel::services: ports (content handler, prompt, settings) and adapters

pub mod kernel;
