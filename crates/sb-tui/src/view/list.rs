use chrono::{DateTime, Local, Utc};
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, List, ListItem, ListState, Paragraph};
use ratatui::Frame;
use sb_app::session::Focus;
use sb_app::SessionView;
use sb_core::keymap::Action;
use sb_core::Snippet;

use super::key_hint;

pub(super) fn render(frame: &mut Frame<'_>, area: Rect, view: &SessionView<'_>) {
    let block = Block::bordered().title(format!(" Snippets ({}) ", view.snippets.len()));

    if view.snippets.is_empty() {
        let hint = if view.search.text().is_empty() {
            format!("No snippets yet. Press {} to add one.", key_hint(view.keymap, Action::NewSnippet))
        } else {
            "Nothing matches the search.".to_string()
        };
        let empty = Paragraph::new(Span::styled(hint, Style::default().fg(Color::DarkGray))).block(block);
        frame.render_widget(empty, area);
        return;
    }

    let editing = view.editor.and_then(|e| e.target()).map(|s| &s.id);
    let items: Vec<ListItem> = view
        .snippets
        .iter()
        .map(|snippet| item(snippet, editing == Some(&snippet.id)))
        .collect();

    let highlight = if view.focus == Focus::Editor {
        Style::default().fg(Color::DarkGray)
    } else {
        Style::default()
            .fg(Color::Cyan)
            .bg(Color::Rgb(40, 40, 40))
            .add_modifier(Modifier::BOLD)
    };

    let list = List::new(items)
        .block(block)
        .highlight_symbol("▶ ")
        .highlight_style(highlight);

    let mut state = ListState::default();
    state.select(Some(view.selected.min(view.snippets.len() - 1)));
    frame.render_stateful_widget(list, area, &mut state);
}

fn item(snippet: &Snippet, being_edited: bool) -> ListItem<'static> {
    let mut title = vec![Span::styled(
        snippet.description.clone(),
        Style::default().add_modifier(Modifier::BOLD),
    )];
    if being_edited {
        title.push(Span::styled(" (editing)", Style::default().fg(Color::Yellow)));
    }
    if let Some(used) = snippet.last_accessed_at_ms.and_then(format_timestamp) {
        title.push(Span::styled(format!("  used {used}"), Style::default().fg(Color::DarkGray)));
    }

    let preview = snippet.content.lines().next().unwrap_or_default().to_string();
    let more = if snippet.content.lines().nth(1).is_some() { " …" } else { "" };

    ListItem::new(vec![
        Line::from(title),
        Line::from(Span::styled(
            format!("  {preview}{more}"),
            Style::default().fg(Color::Gray),
        )),
    ])
}

fn format_timestamp(ms: i64) -> Option<String> {
    DateTime::<Utc>::from_timestamp_millis(ms).map(|utc| utc.with_timezone(&Local).format("%Y-%m-%d %H:%M").to_string())
}
