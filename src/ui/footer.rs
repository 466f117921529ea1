use crate::ui::theme::{GLOBAL_BORDER, HEADER_TEXT};
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

const VERSION: &str = concat!("v", env!("CARGO_PKG_VERSION"), " ");

/// Bordered bar: key hints on the left, version pinned to the right.
///
/// The version column is reserved first, so long hints are clipped
/// rather than pushing it out of view.
pub fn render(frame: &mut Frame<'_>, area: Rect, hints: &str) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(GLOBAL_BORDER));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let text_style = Style::default().fg(HEADER_TEXT).add_modifier(Modifier::DIM);
    let [hints_area, version_area] = Layout::horizontal([
        Constraint::Min(0),
        Constraint::Length(VERSION.chars().count() as u16),
    ])
    .areas(inner);

    frame.render_widget(Paragraph::new(hints).style(text_style), hints_area);
    frame.render_widget(
        Paragraph::new(VERSION)
            .style(text_style)
            .alignment(Alignment::Right),
        version_area,
    );
}
