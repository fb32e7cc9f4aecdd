use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Padding, Paragraph, Wrap},
};

use crate::app::QuizWindow;
use crate::models::{QuestionOutcome, QuizResult};

use super::window_block;

pub fn render(frame: &mut Frame, area: Rect, window: &QuizWindow) {
    let block = window_block("Rig Vedha Quiz");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let Some(result) = window.session.result() else {
        return;
    };

    let chunks = Layout::vertical([
        Constraint::Length(7),
        Constraint::Fill(1),
        Constraint::Length(2),
    ])
    .margin(1)
    .split(inner);

    render_score_summary(frame, chunks[0], result);
    render_question_breakdown(frame, chunks[1], &result.detailed_results, window.result_scroll);
    render_controls(frame, chunks[2]);
}

fn get_grade_color(percentage: u32) -> Color {
    match percentage {
        90..=100 => Color::Green,
        70..=89 => Color::Cyan,
        50..=69 => Color::Yellow,
        _ => Color::Red,
    }
}

fn render_score_summary(frame: &mut Frame, area: Rect, result: &QuizResult) {
    let grade_color = get_grade_color(result.percentage);

    let content = vec![
        Line::from(Span::styled(
            "QUIZ COMPLETED!",
            Style::default().fg(Color::Cyan).bold(),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled(result.name.as_str(), Style::default().fg(Color::White).bold()),
            Span::styled(", your score: ", Style::default().fg(Color::Gray)),
            Span::styled(
                format!("{}/{}", result.score, result.total),
                Style::default().fg(grade_color).bold(),
            ),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            format!("{}%", result.percentage),
            Style::default().fg(grade_color).bold(),
        )),
        Line::from(""),
    ];

    let widget = Paragraph::new(content).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Color::DarkGray),
    );
    frame.render_widget(widget, area);
}

fn render_question_breakdown(
    frame: &mut Frame,
    area: Rect,
    outcomes: &[QuestionOutcome],
    scroll: usize,
) {
    let mut lines: Vec<Line> = Vec::with_capacity(outcomes.len() * 5);

    for (index, outcome) in outcomes.iter().enumerate().skip(scroll) {
        let (symbol, color) = if outcome.is_correct {
            ("+", Color::Green)
        } else {
            ("-", Color::Red)
        };

        lines.push(Line::from(vec![
            Span::styled(format!(" {} ", symbol), Style::default().fg(color).bold()),
            Span::styled(format!("Q{}: ", index + 1), Style::default().fg(Color::DarkGray)),
            Span::styled(outcome.question.as_str(), Style::default().fg(Color::White)),
        ]));
        lines.push(Line::from(vec![
            Span::styled("   Your answer: ", Style::default().fg(Color::DarkGray)),
            Span::styled(outcome.user_answer.as_str(), Style::default().fg(color)),
        ]));
        if !outcome.is_correct {
            lines.push(Line::from(vec![
                Span::styled("   Correct answer: ", Style::default().fg(Color::DarkGray)),
                Span::styled(outcome.correct_answer.as_str(), Style::default().fg(Color::Green)),
            ]));
        }
        if !outcome.explanation.is_empty() {
            lines.push(Line::from(vec![
                Span::styled("   Explanation: ", Style::default().fg(Color::DarkGray)),
                Span::styled(outcome.explanation.as_str(), Style::default().fg(Color::Gray)),
            ]));
        }
        lines.push(Line::from(""));
    }

    let widget = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .block(Block::default().padding(Padding::horizontal(1)));
    frame.render_widget(widget, area);
}

fn render_controls(frame: &mut Frame, area: Rect) {
    let widget = Paragraph::new("j/k scroll  ·  r restart  ·  esc close")
        .alignment(Alignment::Center)
        .fg(Color::DarkGray);
    frame.render_widget(widget, area);
}
