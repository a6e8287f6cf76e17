use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Paragraph};
use ratatui::Frame;
use sb_app::session::{EditorField, Focus, SnippetEditor, TextField};

pub(super) fn render(frame: &mut Frame<'_>, area: Rect, editor: &SnippetEditor, focus: Focus) {
    let title = if editor.target().is_some() {
        " Edit snippet "
    } else {
        " New snippet "
    };
    let outer = Block::bordered().title(title).border_style(Style::default().fg(Color::Yellow));
    let inner = outer.inner(area);
    frame.render_widget(outer, area);

    let [description_area, content_area] =
        Layout::vertical([Constraint::Length(3), Constraint::Min(3)]).areas(inner);
    let active = (focus == Focus::Editor).then_some(editor.field());

    render_field(
        frame,
        description_area,
        " Description ",
        editor.description(),
        active == Some(EditorField::Description),
    );
    render_field(
        frame,
        content_area,
        " Content ",
        editor.content(),
        active == Some(EditorField::Content),
    );
}

fn render_field(frame: &mut Frame<'_>, area: Rect, title: &str, field: &TextField, active: bool) {
    let border = if active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let block = Block::bordered().title(title.to_string()).border_style(border);
    let inner = block.inner(area);

    let (row, col) = cursor_row_col(field);
    let scroll = row.saturating_sub(inner.height.saturating_sub(1));
    let paragraph = Paragraph::new(field.text().to_string()).block(block).scroll((scroll, 0));
    frame.render_widget(paragraph, area);

    if active {
        let x = (inner.x + col).min(inner.right().saturating_sub(1));
        let y = inner.y + row - scroll;
        frame.set_cursor_position((x, y));
    }
}

/// Cursor row and display column within a possibly multi-line field.
fn cursor_row_col(field: &TextField) -> (u16, u16) {
    let before: String = field.text().chars().take(field.cursor()).collect();
    let row = before.matches('\n').count();
    let last_line = before.rsplit('\n').next().unwrap_or_default();
    (row as u16, Line::from(last_line).width() as u16)
}
