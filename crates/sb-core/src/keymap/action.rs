/// Everything a key press can ask the UI to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    NewSnippet,
    Cancel,
    Confirm,
    Save,
    ShowHelp,
    ShowConfig,
    ShowFeedback,
    Sync,
    FocusSearch,
    SelectUp,
    SelectDown,
    EditSelected,
    DeleteSelected,
    NextField,
    ToggleSyncOnSave,
    Quit,
}

impl Action {
    pub const ALL: [Action; 16] = [
        Action::NewSnippet,
        Action::Cancel,
        Action::Confirm,
        Action::Save,
        Action::ShowHelp,
        Action::ShowConfig,
        Action::ShowFeedback,
        Action::Sync,
        Action::FocusSearch,
        Action::SelectUp,
        Action::SelectDown,
        Action::EditSelected,
        Action::DeleteSelected,
        Action::NextField,
        Action::ToggleSyncOnSave,
        Action::Quit,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Action::NewSnippet => "new_snippet",
            Action::Cancel => "cancel",
            Action::Confirm => "confirm",
            Action::Save => "save",
            Action::ShowHelp => "show_help",
            Action::ShowConfig => "show_config",
            Action::ShowFeedback => "show_feedback",
            Action::Sync => "sync",
            Action::FocusSearch => "focus_search",
            Action::SelectUp => "select_up",
            Action::SelectDown => "select_down",
            Action::EditSelected => "edit_selected",
            Action::DeleteSelected => "delete_selected",
            Action::NextField => "next_field",
            Action::ToggleSyncOnSave => "toggle_sync_on_save",
            Action::Quit => "quit",
        }
    }

    pub fn from_name(name: &str) -> Option<Action> {
        Action::ALL.into_iter().find(|a| a.name() == name)
    }

    pub fn description(self) -> &'static str {
        match self {
            Action::NewSnippet => "new snippet",
            Action::Cancel => "cancel editing / leave search",
            Action::Confirm => "copy selected snippet",
            Action::Save => "save snippet",
            Action::ShowHelp => "toggle help",
            Action::ShowConfig => "toggle config",
            Action::ShowFeedback => "toggle feedback",
            Action::Sync => "sync with remote",
            Action::FocusSearch => "focus search",
            Action::SelectUp => "select previous",
            Action::SelectDown => "select next",
            Action::EditSelected => "edit selected snippet",
            Action::DeleteSelected => "delete selected snippet",
            Action::NextField => "switch editor field",
            Action::ToggleSyncOnSave => "toggle sync on save (config)",
            Action::Quit => "quit",
        }
    }
}
