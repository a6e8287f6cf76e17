mod system_clock;
mod toast_timer;

pub use system_clock::SystemClock;
pub use toast_timer::ToastTimer;
