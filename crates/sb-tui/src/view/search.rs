use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph};
use ratatui::Frame;
use sb_app::session::Focus;
use sb_app::SessionView;

const PLACEHOLDER: &str = "Copy something...";

pub(super) fn render(frame: &mut Frame<'_>, area: Rect, view: &SessionView<'_>) {
    let focused = view.focus == Focus::Search;
    let border = if focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let block = Block::bordered().title(" Search ").border_style(border);
    let inner = block.inner(area);

    let text = view.search.text();
    let line = if text.is_empty() {
        Line::from(Span::styled(
            PLACEHOLDER,
            Style::default().fg(Color::DarkGray).add_modifier(Modifier::ITALIC),
        ))
    } else {
        Line::from(text)
    };
    frame.render_widget(Paragraph::new(line).block(block), area);

    if focused {
        let before_cursor: String = text.chars().take(view.search.cursor()).collect();
        let x = inner.x + Line::from(before_cursor).width() as u16;
        frame.set_cursor_position((x.min(inner.right().saturating_sub(1)), inner.y));
    }
}
