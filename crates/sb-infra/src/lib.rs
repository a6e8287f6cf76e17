pub mod db;
pub mod settings;
pub mod sync;
pub mod time;

pub use time::{SystemClock, ToastTimer};
