use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Padding, Paragraph, Wrap},
};

use crate::app::{QuizCursor, QuizWindow};
use crate::models::QuizQuestion;
use crate::quiz::{QuizPhase, SubmitPolicy};

use super::window_block;

const OPTION_LABELS: [char; 4] = ['A', 'B', 'C', 'D'];

pub fn render(frame: &mut Frame, area: Rect, window: &QuizWindow) {
    let block = window_block("Rig Vedha Quiz");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if window.session.phase() == QuizPhase::Loading {
        render_loading(frame, inner);
        return;
    }

    match window.cursor {
        QuizCursor::Question(index) => match window.session.questions().get(index) {
            Some(question) => render_question(frame, inner, window, index, question),
            None => render_loading(frame, inner),
        },
        QuizCursor::Submit => render_submit(frame, inner, window),
    }
}

fn render_loading(frame: &mut Frame, area: Rect) {
    let chunks = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(4),
        Constraint::Fill(1),
    ])
    .split(area);

    let content = vec![
        Line::from(Span::styled(
            "Generating quiz questions with AI...",
            Style::default().fg(Color::Yellow).bold(),
        )),
        Line::from(""),
        Line::from("Creating your personalized Rig Vedha knowledge test".fg(Color::DarkGray)),
    ];

    let widget = Paragraph::new(content).alignment(Alignment::Center);
    frame.render_widget(widget, chunks[1]);
}

fn render_question(
    frame: &mut Frame,
    area: Rect,
    window: &QuizWindow,
    index: usize,
    question: &QuizQuestion,
) {
    let chunks = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(4),
        Constraint::Fill(1),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .margin(1)
    .split(area);

    render_progress(frame, chunks[0], window, index);
    render_question_text(frame, chunks[1], index, &question.prompt);
    render_options(
        frame,
        chunks[2],
        &question.options,
        window.highlighted,
        window.session.selection(index),
    );
    render_notice(frame, chunks[3], window.notice.as_deref());
    render_controls(
        frame,
        chunks[4],
        "j/k navigate  ·  enter choose  ·  h/l prev/next  ·  esc close",
    );
}

fn render_progress(frame: &mut Frame, area: Rect, window: &QuizWindow, index: usize) {
    let progress = format!(
        "{}/{}  ·  {} answered",
        index + 1,
        window.session.total_questions(),
        window.session.answered()
    );
    let widget = Paragraph::new(progress)
        .alignment(Alignment::Right)
        .fg(Color::DarkGray);
    frame.render_widget(widget, area);
}

fn render_question_text(frame: &mut Frame, area: Rect, index: usize, text: &str) {
    let widget = Paragraph::new(format!("{}. {}", index + 1, text))
        .wrap(Wrap { trim: true })
        .fg(Color::White)
        .bold();
    frame.render_widget(widget, area);
}

fn render_options(
    frame: &mut Frame,
    area: Rect,
    options: &[String; 4],
    highlighted: usize,
    chosen: Option<usize>,
) {
    let mut lines: Vec<Line> = Vec::with_capacity(options.len() * 2);

    for (index, option) in options.iter().enumerate() {
        let is_highlighted = index == highlighted;
        let is_chosen = chosen == Some(index);
        let style = if is_highlighted {
            Style::default().fg(Color::Cyan).bold()
        } else if is_chosen {
            Style::default().fg(Color::Green)
        } else {
            Style::default().fg(Color::Gray)
        };
        let marker = if is_highlighted { ">" } else { " " };
        let radio = if is_chosen { "(•)" } else { "( )" };

        lines.push(Line::from(vec![
            Span::styled(format!(" {} ", marker), style),
            Span::styled(format!("{} {}. ", radio, OPTION_LABELS[index]), style),
            Span::styled(option.as_str(), style),
        ]));
        lines.push(Line::from(""));
    }

    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), area);
}

fn render_submit(frame: &mut Frame, area: Rect, window: &QuizWindow) {
    let chunks = Layout::vertical([
        Constraint::Length(3),
        Constraint::Fill(1),
        Constraint::Length(3),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .margin(1)
    .split(area);

    let session = &window.session;
    let answered = session.answered();
    let total = session.total_questions();
    let complete = answered == total;

    let summary_color = if complete { Color::Green } else { Color::Yellow };
    let mut summary = vec![Line::from(Span::styled(
        format!("{} of {} questions answered", answered, total),
        Style::default().fg(summary_color).bold(),
    ))];
    if !complete && session.policy() == SubmitPolicy::RequireAll {
        summary.push(Line::from(
            "Answer every question to enable submission".fg(Color::DarkGray),
        ));
    }
    frame.render_widget(Paragraph::new(summary).alignment(Alignment::Center), chunks[0]);

    let overview: Vec<Line> = session
        .questions()
        .iter()
        .enumerate()
        .map(|(index, question)| {
            let (symbol, color) = match session.selection(index) {
                Some(_) => ("•", Color::Green),
                None => ("·", Color::DarkGray),
            };
            Line::from(vec![
                Span::styled(format!(" {} ", symbol), Style::default().fg(color)),
                Span::styled(format!("{:2}. ", index + 1), Style::default().fg(Color::DarkGray)),
                Span::styled(question.prompt.as_str(), Style::default().fg(Color::Gray)),
            ])
        })
        .collect();
    frame.render_widget(
        Paragraph::new(overview).block(Block::default().padding(Padding::horizontal(1))),
        chunks[1],
    );

    let name_line = if session.is_submitting() {
        Line::from(Span::styled("Submitting...", Style::default().fg(Color::Yellow)))
    } else {
        Line::from(vec![
            Span::styled("Your Name: ", Style::default().fg(Color::White)),
            Span::styled(session.name(), Style::default().fg(Color::Yellow)),
            Span::styled("_", Style::default().fg(Color::Yellow)),
        ])
    };
    let name_box = Paragraph::new(name_line).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .padding(Padding::horizontal(1)),
    );
    frame.render_widget(name_box, chunks[2]);

    render_notice(frame, chunks[3], window.notice.as_deref());
    render_controls(
        frame,
        chunks[4],
        "type your name  ·  enter submit  ·  ← back  ·  esc close",
    );
}

fn render_notice(frame: &mut Frame, area: Rect, notice: Option<&str>) {
    if let Some(notice) = notice {
        let widget = Paragraph::new(notice)
            .alignment(Alignment::Center)
            .fg(Color::Red);
        frame.render_widget(widget, area);
    }
}

fn render_controls(frame: &mut Frame, area: Rect, text: &'static str) {
    let widget = Paragraph::new(text)
        .alignment(Alignment::Center)
        .fg(Color::DarkGray);
    frame.render_widget(widget, area);
}
