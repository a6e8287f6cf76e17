use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Clear, Paragraph};
use ratatui::Frame;
use sb_app::session::Toasts;
use sb_core::SyncReport;

/// Bottom-right overlays; the sync report stacks above the copy notice.
pub(super) fn render(frame: &mut Frame<'_>, area: Rect, toasts: &Toasts) {
    let mut bottom = area.bottom();

    if toasts.copied {
        bottom = overlay(frame, area, bottom, vec![Line::from("copied snippet")]);
    }
    if let Some(report) = &toasts.sync {
        overlay(frame, area, bottom, sync_lines(report));
    }
}

fn sync_lines(report: &SyncReport) -> Vec<Line<'static>> {
    vec![
        Line::from(format!("new  {} local, {} remote", report.new_local, report.new_remote)),
        Line::from(format!("old  {} local, {} remote", report.dropped_local, report.dropped_remote)),
    ]
}

/// Draw a bordered box whose bottom edge sits at `bottom`; returns its top.
fn overlay(frame: &mut Frame<'_>, area: Rect, bottom: u16, lines: Vec<Line<'static>>) -> u16 {
    let width = lines.iter().map(Line::width).max().unwrap_or(0) as u16 + 2;
    let height = lines.len() as u16 + 2;
    if width > area.width || bottom < area.y + height {
        return bottom;
    }

    let rect = Rect::new(area.right() - width, bottom - height, width, height);
    frame.render_widget(Clear, rect);
    frame.render_widget(
        Paragraph::new(lines).block(Block::bordered().border_style(Style::default().fg(Color::Green))),
        rect,
    );
    rect.y
}

#[cfg(test)]
mod tests {
    use super::super::test_support::{contains, render, Fixture};
    use super::*;
    use sb_app::session::Focus;
    use sb_core::Screen;

    #[test]
    fn both_toasts_are_visible_together() {
        let mut fixture = Fixture::new(Vec::new());
        fixture.toasts.copied = true;
        fixture.toasts.sync = Some(SyncReport {
            new_local: 2,
            new_remote: 1,
            dropped_local: 0,
            dropped_remote: 3,
        });

        let screen = render(&fixture.view(Screen::Snippets, Focus::List));
        assert!(contains(&screen, "copied snippet"));
        assert!(contains(&screen, "new  2 local, 1 remote"));
        assert!(contains(&screen, "old  0 local, 3 remote"));
    }

    #[test]
    fn no_toast_by_default() {
        let fixture = Fixture::new(Vec::new());
        let screen = render(&fixture.view(Screen::Snippets, Focus::List));
        assert!(!contains(&screen, "copied snippet"));
    }
}
