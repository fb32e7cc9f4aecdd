use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Padding, Paragraph, Wrap},
};

use crate::app::ChatWindow;
use crate::chat::SUGGESTIONS;
use crate::models::{ChatEntry, Speaker};

use super::markdown::markdown_lines;
use super::window_block;

pub fn render(frame: &mut Frame, area: Rect, window: &ChatWindow) {
    let block = window_block("Rig Vedha Chatbot");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(3),
        Constraint::Length(1),
    ])
    .split(inner);

    if window.session.transcript().is_empty() && !window.session.is_pending() {
        render_welcome(frame, chunks[0]);
    } else {
        render_transcript(frame, chunks[0], window);
    }
    render_input(frame, chunks[1], window);

    let controls = Paragraph::new("enter send  ·  tab suggestion  ·  ctrl+l clear  ·  esc close")
        .alignment(Alignment::Center)
        .fg(Color::DarkGray);
    frame.render_widget(controls, chunks[2]);
}

fn render_welcome(frame: &mut Frame, area: Rect) {
    let mut content = vec![
        Line::from(""),
        Line::from(Span::styled(
            "Welcome to Rig Vedha Chatbot",
            Style::default().fg(Color::Cyan).bold(),
        )),
        Line::from(""),
        Line::from(
            "Ask me anything about Rig Vedha, its hymns, philosophy, or historical significance."
                .fg(Color::Gray),
        ),
        Line::from(""),
    ];
    for suggestion in SUGGESTIONS {
        content.push(Line::from(format!("\"{}\"", suggestion).fg(Color::DarkGray)));
    }

    let widget = Paragraph::new(content)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(widget, area);
}

fn render_transcript(frame: &mut Frame, area: Rect, window: &ChatWindow) {
    let mut lines: Vec<Line> = Vec::new();
    for entry in window.session.transcript() {
        push_entry(&mut lines, entry);
    }
    if window.session.is_pending() {
        lines.push(Line::from(Span::styled(
            "Thinking about Rig Vedha...",
            Style::default().fg(Color::Yellow).italic(),
        )));
    }

    // Keep the newest message in view.
    let scroll = wrapped_height(&lines, area.width).saturating_sub(area.height as usize);

    let widget = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .scroll((scroll.min(u16::MAX as usize) as u16, 0));
    frame.render_widget(widget, area);
}

fn push_entry<'a>(lines: &mut Vec<Line<'a>>, entry: &'a ChatEntry) {
    let color = match entry.speaker {
        Speaker::User => Color::Green,
        Speaker::Assistant => Color::Cyan,
    };

    lines.push(Line::from(Span::styled(
        format!("{}:", entry.speaker.label()),
        Style::default().fg(color).bold(),
    )));
    let body = Style::default().fg(Color::White);
    match entry.speaker {
        Speaker::User => {
            for text in entry.text.lines() {
                lines.push(Line::from(Span::styled(text, body)));
            }
        }
        Speaker::Assistant => lines.extend(markdown_lines(&entry.text, body)),
    }
    lines.push(Line::from(""));
}

/// Rows `lines` occupy once wrapped to `width`.
fn wrapped_height(lines: &[Line], width: u16) -> usize {
    let width = usize::from(width.max(1));
    lines
        .iter()
        .map(|line| line.width().max(1).div_ceil(width))
        .sum()
}

fn render_input(frame: &mut Frame, area: Rect, window: &ChatWindow) {
    let line = if window.session.is_pending() {
        Line::from(vec![
            Span::styled(window.input.as_str(), Style::default().fg(Color::DarkGray)),
            Span::styled("  (waiting for reply)", Style::default().fg(Color::DarkGray)),
        ])
    } else if window.input.is_empty() {
        Line::from(vec![
            Span::styled("_", Style::default().fg(Color::Yellow)),
            Span::styled(" Ask about Rig Vedha...", Style::default().fg(Color::DarkGray)),
        ])
    } else {
        Line::from(vec![
            Span::styled(window.input.as_str(), Style::default().fg(Color::Yellow)),
            Span::styled("_", Style::default().fg(Color::Yellow)),
        ])
    };

    let widget = Paragraph::new(line).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .padding(Padding::horizontal(1)),
    );
    frame.render_widget(widget, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrapped_height() {
        let lines = vec![Line::from("abcdefghij"), Line::from(""), Line::from("abc")];
        assert_eq!(wrapped_height(&lines, 4), 3 + 1 + 1);
        assert_eq!(wrapped_height(&lines, 20), 3);
        assert_eq!(wrapped_height(&lines, 0), 10 + 1 + 3);
    }
}
