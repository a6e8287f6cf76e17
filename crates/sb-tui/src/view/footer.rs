use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;
use sb_app::session::Focus;
use sb_app::SessionView;
use sb_core::keymap::Action;
use sb_core::Screen;

use super::key_hint;

/// Status message when there is one, otherwise key hints for the context.
pub(super) fn render(frame: &mut Frame<'_>, area: Rect, view: &SessionView<'_>) {
    if let Some(status) = view.status {
        let line = Line::from(Span::styled(status.to_string(), Style::default().fg(Color::Red)));
        frame.render_widget(Paragraph::new(line), area);
        return;
    }

    let actions: &[(Action, &str)] = match (view.screen, view.focus) {
        (Screen::Snippets, Focus::Editor) => &[
            (Action::Save, "save"),
            (Action::NextField, "next field"),
            (Action::Cancel, "discard"),
        ],
        (Screen::Snippets, Focus::Search) => &[
            (Action::Confirm, "copy"),
            (Action::SelectDown, "to list"),
            (Action::Cancel, "leave search"),
        ],
        (Screen::Snippets, Focus::List) => &[
            (Action::Confirm, "copy"),
            (Action::NewSnippet, "new"),
            (Action::EditSelected, "edit"),
            (Action::DeleteSelected, "delete"),
            (Action::FocusSearch, "search"),
            (Action::Sync, "sync"),
            (Action::ShowHelp, "help"),
            (Action::Quit, "quit"),
        ],
        _ => &[(Action::Cancel, "back"), (Action::Quit, "quit")],
    };

    let mut spans = Vec::new();
    for (action, label) in actions {
        if !spans.is_empty() {
            spans.push(Span::styled(" · ", Style::default().fg(Color::DarkGray)));
        }
        spans.push(Span::styled(key_hint(view.keymap, *action), Style::default().fg(Color::Cyan)));
        spans.push(Span::raw(format!(" {label}")));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
