//! Port interfaces for the application layer
//!
//! Ports define the contract between the use cases and the
//! infrastructure/platform implementations, keeping the core free of
//! storage, clipboard and timer details.

pub mod app_dirs;
mod clipboard;
mod clock;
pub mod errors;
mod settings;
mod snippet_remote;
mod snippet_repository;
mod toast_timer;

pub use app_dirs::AppDirsPort;
pub use clipboard::SystemClipboardPort;
pub use clock::ClockPort;
pub use errors::AppDirsError;
pub use settings::{SettingsMigrationPort, SettingsPort};
pub use snippet_remote::SnippetRemotePort;
pub use snippet_repository::SnippetRepositoryPort;
pub use toast_timer::ToastTimerPort;
