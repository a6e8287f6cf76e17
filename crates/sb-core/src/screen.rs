use serde::{Deserialize, Serialize};

/// Top-level panel shown by the UI.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Screen {
    #[default]
    Snippets,
    Help,
    Config,
    Feedback,
}

impl Screen {
    /// Toggle towards `target`: asking for the panel that is already open
    /// goes back to the snippet list.
    pub fn cycle(self, target: Screen) -> Screen {
        if self == target {
            Screen::Snippets
        } else {
            target
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Screen::Snippets => "snippets",
            Screen::Help => "help",
            Screen::Config => "config",
            Screen::Feedback => "feedback",
        }
    }
}
