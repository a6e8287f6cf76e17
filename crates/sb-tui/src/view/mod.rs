//! ratatui rendering of a [`SessionView`].
//!
//! Drawing is a pure function of the view snapshot; nothing here mutates
//! session state.

mod editor;
mod footer;
mod list;
mod panels;
mod search;
mod toast;

use ratatui::layout::{Constraint, Layout};
use ratatui::Frame;
use sb_app::SessionView;
use sb_core::keymap::{Action, Keymap};
use sb_core::Screen;

pub fn draw(frame: &mut Frame<'_>, view: &SessionView<'_>) {
    let [top_area, body_area, footer_area] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Min(3),
        Constraint::Length(1),
    ])
    .areas(frame.area());

    match view.screen {
        Screen::Snippets => {
            search::render(frame, top_area, view);
            if let Some(editor) = view.editor {
                let [editor_area, list_area] =
                    Layout::vertical([Constraint::Length(10), Constraint::Min(0)]).areas(body_area);
                editor::render(frame, editor_area, editor, view.focus);
                list::render(frame, list_area, view);
            } else {
                list::render(frame, body_area, view);
            }
        }
        Screen::Help => panels::render_help(frame, top_area.union(body_area), view.keymap),
        Screen::Config => panels::render_config(frame, top_area.union(body_area), view),
        Screen::Feedback => panels::render_feedback(frame, top_area.union(body_area), view.keymap),
    }

    footer::render(frame, footer_area, view);
    toast::render(frame, body_area, view.toasts);
}

/// First chord bound to `action`, for inline hints.
fn key_hint(keymap: &Keymap, action: Action) -> String {
    keymap
        .bindings()
        .into_iter()
        .find(|(a, _)| *a == action)
        .and_then(|(_, chords)| chords.first().map(ToString::to_string))
        .unwrap_or_else(|| "unbound".to_string())
}
