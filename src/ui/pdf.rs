use ratatui::{prelude::*, widgets::Paragraph};

use crate::app::PdfWindow;

use super::window_block;

pub fn render(frame: &mut Frame, area: Rect, window: &PdfWindow) {
    let chunks = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(9),
        Constraint::Fill(1),
        Constraint::Length(1),
    ])
    .margin(1)
    .split(area);

    let status = match &window.status {
        Some(status) => Line::from(status.as_str().fg(Color::Green)),
        None => Line::from(""),
    };

    let content = vec![
        Line::from(""),
        Line::from("The complete Rig Vedha text is served at".fg(Color::Gray)),
        Line::from(""),
        Line::from(Span::styled(
            window.viewport.url(),
            Style::default().fg(Color::Yellow).underlined(),
        )),
        Line::from(""),
        status,
    ];

    let widget = Paragraph::new(content)
        .alignment(Alignment::Center)
        .block(window_block("Rig Vedha PDF Reader"));
    frame.render_widget(widget, chunks[1]);

    let controls = Paragraph::new("o open in viewer  ·  esc close window")
        .alignment(Alignment::Center)
        .fg(Color::DarkGray);
    frame.render_widget(controls, chunks[3]);
}
