//! Flat key-combination to action mapping.
//!
//! The UI translates terminal key events into [`KeyChord`]s and looks
//! them up here. There is no modality in the table itself: the session
//! decides whether a chord is typed into a text field or dispatched.
mod action;
mod chord;

use std::collections::{BTreeMap, HashMap};

use thiserror::Error;

pub use action::Action;
pub use chord::{KeyChord, KeyChordParseError, KeyCode, Modifiers};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum KeymapError {
    #[error("unknown action in key bindings: {0}")]
    UnknownAction(String),

    #[error(transparent)]
    InvalidChord(#[from] KeyChordParseError),
}

const DEFAULT_BINDINGS: &[(&str, Action)] = &[
    ("n", Action::NewSnippet),
    ("escape", Action::Cancel),
    ("enter", Action::Confirm),
    ("ctrl+enter", Action::Save),
    ("alt+enter", Action::Save),
    ("ctrl+s", Action::Save),
    ("h", Action::ShowHelp),
    ("f", Action::ShowFeedback),
    ("c", Action::ShowConfig),
    ("s", Action::Sync),
    ("ctrl+k", Action::FocusSearch),
    ("/", Action::FocusSearch),
    ("up", Action::SelectUp),
    ("down", Action::SelectDown),
    ("e", Action::EditSelected),
    ("d", Action::DeleteSelected),
    ("delete", Action::DeleteSelected),
    ("tab", Action::NextField),
    ("backtab", Action::NextField),
    ("t", Action::ToggleSyncOnSave),
    ("q", Action::Quit),
    ("ctrl+c", Action::Quit),
];

#[derive(Debug, Clone)]
pub struct Keymap {
    bindings: HashMap<KeyChord, Action>,
}

impl Default for Keymap {
    fn default() -> Self {
        let bindings = DEFAULT_BINDINGS
            .iter()
            .map(|(chord, action)| {
                let chord = chord
                    .parse::<KeyChord>()
                    .unwrap_or_else(|e| panic!("invalid built-in binding {chord}: {e}"));
                (chord, *action)
            })
            .collect();
        Self { bindings }
    }
}

impl Keymap {
    /// Rebind actions from `overrides` (action name → chord).
    ///
    /// An overridden action loses its default chords. A chord that was
    /// bound to another action is taken over by the overriding one.
    pub fn with_overrides(mut self, overrides: &BTreeMap<String, String>) -> Result<Self, KeymapError> {
        for (name, chord) in overrides {
            let action = Action::from_name(name)
                .ok_or_else(|| KeymapError::UnknownAction(name.clone()))?;
            let chord: KeyChord = chord.parse()?;

            self.bindings.retain(|_, bound| *bound != action);
            self.bindings.insert(chord, action);
        }
        Ok(self)
    }

    pub fn lookup(&self, chord: &KeyChord) -> Option<Action> {
        self.bindings.get(chord).copied()
    }

    /// Chords grouped by action, in [`Action::ALL`] order.
    pub fn bindings(&self) -> Vec<(Action, Vec<KeyChord>)> {
        let mut grouped: BTreeMap<usize, (Action, Vec<KeyChord>)> = BTreeMap::new();
        for (chord, action) in &self.bindings {
            let order = Action::ALL.iter().position(|a| a == action).unwrap_or(usize::MAX);
            grouped
                .entry(order)
                .or_insert_with(|| (*action, Vec::new()))
                .1
                .push(*chord);
        }
        grouped
            .into_values()
            .map(|(action, mut chords)| {
                chords.sort_by_key(|c| c.to_string());
                (action, chords)
            })
            .collect()
    }
}
