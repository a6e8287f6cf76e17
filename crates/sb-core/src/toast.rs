use std::fmt;

/// Transient notifications shown over the snippet list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ToastKind {
    Copied,
    Sync,
}

/// One scheduled dismissal.
///
/// `generation` grows with every schedule made by a session. An expiry
/// whose generation is not the latest one for its kind is stale and must
/// not hide the toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToastExpiry {
    pub kind: ToastKind,
    pub generation: u64,
}

impl fmt::Display for ToastKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ToastKind::Copied => write!(f, "copied"),
            ToastKind::Sync => write!(f, "sync"),
        }
    }
}
