use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};

use crate::app::{App, Feature};

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(17),
        Constraint::Fill(1),
    ])
    .split(area);

    let mut content = vec![
        Line::from(""),
        Line::from(Span::styled(
            "RIG VEDHA KNOWLEDGE PORTAL",
            Style::default().fg(Color::Cyan).bold(),
        )),
        Line::from(""),
        Line::from("Explore the ancient wisdom of Rig Vedha".fg(Color::DarkGray)),
        Line::from(""),
    ];

    for (index, feature) in Feature::ALL.iter().enumerate() {
        let is_selected = index == app.menu_selected();
        let style = if is_selected {
            Style::default().fg(Color::Yellow).bold()
        } else {
            Style::default().fg(Color::White)
        };
        let marker = if is_selected { "> " } else { "  " };

        content.push(Line::from(vec![
            Span::styled(marker, style),
            Span::styled(format!("{}. {}", index + 1, feature.title()), style),
        ]));
        content.push(Line::from(feature.description().fg(Color::DarkGray)));
        content.push(Line::from(""));
    }

    content.push(Line::from(Span::styled(
        "j/k select  ·  enter open  ·  q quit",
        Style::default().fg(Color::DarkGray),
    )));

    let widget = Paragraph::new(content).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Color::DarkGray),
    );

    frame.render_widget(widget, chunks[1]);
}
