use crate::ui::app::{App, SearchFocus};
use crate::ui::theme::{ACCENT, DIM_TEXT, ERROR_TEXT, GLOBAL_BORDER, HEADER_TEXT, SELECTED_HIGHLIGHT};
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap};
use ratatui::Frame;

const INPUT_LABEL: &str = " Search cocktails by name ";

pub fn render(frame: &mut Frame<'_>, area: Rect, app: &App) {
    let state = app.search_state();
    let error_height = if state.error.is_some() && !state.loading {
        2
    } else {
        0
    };
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(error_height),
        ])
        .split(area);

    render_input(frame, chunks[0], app);

    if state.loading {
        let line = Line::from(vec![
            Span::styled(app.spinner_frame(), Style::default().fg(ACCENT)),
            Span::styled(" Loading cocktails...", Style::default().fg(HEADER_TEXT)),
        ]);
        frame.render_widget(Paragraph::new(line), chunks[1]);
        return;
    }

    render_results(frame, chunks[1], app);

    if let Some(error) = &state.error {
        let widget = Paragraph::new(Line::styled(error.as_str(), Style::default().fg(ERROR_TEXT)))
            .wrap(Wrap { trim: true });
        frame.render_widget(widget, chunks[2]);
    }
}

fn render_input(frame: &mut Frame<'_>, area: Rect, app: &App) {
    let focused = app.focus() == SearchFocus::Input;
    let border = if focused { ACCENT } else { GLOBAL_BORDER };
    let widget = Paragraph::new(app.query()).block(
        Block::default()
            .title(INPUT_LABEL)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border)),
    );
    frame.render_widget(widget, area);

    if focused && area.width > 2 && area.height > 2 {
        let offset = app.query().chars().count() as u16;
        let x = area.x + 1 + offset.min(area.width.saturating_sub(3));
        frame.set_cursor_position((x, area.y + 1));
    }
}

fn render_results(frame: &mut Frame<'_>, area: Rect, app: &App) {
    let state = app.search_state();
    if state.items.is_empty() {
        if state.error.is_none() {
            let hint = Line::styled(
                "Type a name and press Enter to search.",
                Style::default().fg(DIM_TEXT),
            );
            frame.render_widget(Paragraph::new(hint), area);
        }
        return;
    }

    let items: Vec<ListItem> = state
        .items
        .iter()
        .map(|item| {
            ListItem::new(vec![
                Line::styled(item.name.as_str(), Style::default().fg(HEADER_TEXT)),
                Line::styled(
                    format!("  {}", item.thumbnail_url),
                    Style::default().fg(DIM_TEXT),
                ),
            ])
        })
        .collect();

    let list = List::new(items)
        .highlight_symbol("> ")
        .highlight_style(
            Style::default()
                .bg(SELECTED_HIGHLIGHT)
                .add_modifier(Modifier::BOLD),
        );

    let mut list_state = ListState::default();
    if app.focus() == SearchFocus::Results {
        list_state.select(Some(app.selection()));
    }
    frame.render_stateful_widget(list, area, &mut list_state);
}
