//! # sb-core
//!
//! Core domain models and business rules for snipboard.
//!
//! This crate contains pure logic without any infrastructure dependencies:
//! the snippet model, search/sort rules, screens, key bindings, settings
//! and the port traits implemented by the outer layers.

pub mod app_dirs;
pub mod config;
pub mod ids;
pub mod keymap;
pub mod ports;
pub mod screen;
pub mod settings;
pub mod snippet;
pub mod sync;
pub mod toast;

// Re-export commonly used types at the crate root
pub use config::AppConfig;
pub use ids::SnippetId;
pub use keymap::{Action, KeyChord, Keymap};
pub use screen::Screen;
pub use snippet::{SearchQuery, Selection, Snippet, SnippetDraft, SnippetError};
pub use sync::SyncReport;
pub use toast::{ToastExpiry, ToastKind};
