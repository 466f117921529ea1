use crate::ui::theme::{ACCENT, HEADER_TEXT};
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Padding, Paragraph, Wrap};
use ratatui::Frame;

/// Name and instructions exactly as they came from the route.
pub fn render(frame: &mut Frame<'_>, area: Rect, name: &str, instructions: &str, scroll: u16) {
    let mut lines = vec![
        Line::styled(
            name.to_string(),
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
        ),
        Line::from(""),
    ];
    lines.extend(
        instructions
            .lines()
            .map(|line| Line::styled(line.to_string(), Style::default().fg(HEADER_TEXT))),
    );

    let widget = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .scroll((scroll, 0))
        .block(Block::default().padding(Padding::horizontal(2)));
    frame.render_widget(widget, area);
}
