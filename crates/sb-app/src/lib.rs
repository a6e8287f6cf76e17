//! snipboard application layer
//!
//! Use cases over the core ports, plus the interactive session that
//! turns key presses into use-case calls.

pub mod app_paths;
pub mod deps;
pub mod session;
pub mod usecases;

pub use deps::AppDeps;
pub use session::{SessionView, SnippetSession};
