use crate::ui::layout::centered_rect;
use crate::ui::theme::{ACCENT, DIM_TEXT, HEADER_TEXT};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Paragraph, Wrap};
use ratatui::Frame;

const WELCOME_TITLE: &str = "Welcome to the world of cocktails!";

const WELCOME_BODY: &[&str] = &[
    "Shake it, mix it, sip it.",
    "",
    "Look up classics like the Mojito or the Margarita, or dig out",
    "something tropical for the next gathering. Every recipe comes",
    "with its preparation steps, straight from the public catalog.",
    "",
    "Grab a shaker and let's get started. Cheers!",
];

pub fn render(frame: &mut Frame<'_>, area: Rect) {
    let text_style = Style::default().fg(HEADER_TEXT);
    let mut lines = vec![
        Line::styled(
            WELCOME_TITLE,
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
        ),
        Line::from(""),
    ];
    lines.extend(WELCOME_BODY.iter().map(|line| Line::styled(*line, text_style)));
    lines.push(Line::from(""));
    lines.push(Line::styled(
        "Press Enter to go to the search page",
        Style::default().fg(DIM_TEXT),
    ));

    let widget = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: false });
    frame.render_widget(widget, centered_rect(90, 80, area));
}
