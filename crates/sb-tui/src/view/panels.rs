use ratatui::layout::{Constraint, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Row, Table, Wrap};
use ratatui::Frame;
use sb_app::SessionView;
use sb_core::keymap::{Action, Keymap};

use super::key_hint;

fn panel_block(title: &str, keymap: &Keymap, own_action: Action) -> Block<'static> {
    Block::bordered()
        .title(format!(" {title} "))
        .title_bottom(format!(
            " {} or {} to go back ",
            key_hint(keymap, own_action),
            key_hint(keymap, Action::Cancel)
        ))
}

pub(super) fn render_help(frame: &mut Frame<'_>, area: Rect, keymap: &Keymap) {
    let rows = keymap.bindings().into_iter().map(|(action, chords)| {
        let keys = chords.iter().map(ToString::to_string).collect::<Vec<_>>().join(", ");
        Row::new(vec![keys, action.description().to_string()])
    });

    let table = Table::new(rows, [Constraint::Length(28), Constraint::Min(10)])
        .header(Row::new(vec!["Keys", "Action"]).style(Style::default().add_modifier(Modifier::BOLD)))
        .block(panel_block("Help", keymap, Action::ShowHelp));
    frame.render_widget(table, area);
}

pub(super) fn render_config(frame: &mut Frame<'_>, area: Rect, view: &SessionView<'_>) {
    let general = &view.settings.general;
    let on_off = |v: bool| if v { "on" } else { "off" };
    let label = Style::default().fg(Color::DarkGray);

    let mut lines = vec![
        Line::from(vec![
            Span::styled("toast duration   ", label),
            Span::raw(format!("{} ms", general.toast_duration_ms)),
        ]),
        Line::from(vec![
            Span::styled("sync on save     ", label),
            Span::raw(on_off(general.sync_on_save)),
            Span::styled(
                format!("  ({} toggles)", key_hint(view.keymap, Action::ToggleSyncOnSave)),
                label,
            ),
        ]),
        Line::from(vec![
            Span::styled("sync remote      ", label),
            Span::raw(if view.sync_enabled {
                "configured"
            } else {
                "not configured ([sync] remote_path in config.toml)"
            }),
        ]),
        Line::default(),
    ];

    if view.settings.keybindings.is_empty() {
        lines.push(Line::from(Span::styled("default key bindings", label)));
    } else {
        lines.push(Line::from(Span::styled("custom key bindings", label)));
        lines.extend(
            view.settings
                .keybindings
                .iter()
                .map(|(action, chord)| Line::from(format!("  {action} = {chord}"))),
        );
    }

    let paragraph = Paragraph::new(lines).block(panel_block("Config", view.keymap, Action::ShowConfig));
    frame.render_widget(paragraph, area);
}

pub(super) fn render_feedback(frame: &mut Frame<'_>, area: Rect, keymap: &Keymap) {
    let text = vec![
        Line::from("Found a bug or missing a feature?"),
        Line::default(),
        Line::from("Describe what you did and what you expected, and attach the latest"),
        Line::from("log file from the logs folder in the snipboard data directory."),
        Line::from("Setting RUST_LOG=debug before starting gives more detail."),
    ];
    let paragraph = Paragraph::new(text)
        .wrap(Wrap { trim: true })
        .block(panel_block("Feedback", keymap, Action::ShowFeedback));
    frame.render_widget(paragraph, area);
}
