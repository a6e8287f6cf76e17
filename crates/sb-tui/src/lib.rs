//! Terminal front end for snipboard.
//!
//! `bootstrap` assembles the application (config, tracing, wiring) and
//! owns the event loop; `input` and `view` are the only modules that know
//! about crossterm and ratatui.

pub mod bootstrap;
pub mod input;
pub mod view;

pub use bootstrap::run::{run, RunOptions};
