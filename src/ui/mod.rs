mod chat;
mod markdown;
mod menu;
mod pdf;
mod quiz;
mod result;

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Padding},
};

use crate::app::{App, Window};
use crate::quiz::QuizPhase;

pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();
    frame.render_widget(Block::default().bg(Color::Reset), area);

    match app.window() {
        None => menu::render(frame, area, app),
        Some(Window::Pdf(window)) => pdf::render(frame, area, window),
        Some(Window::Quiz(window)) => match window.session.phase() {
            QuizPhase::Submitted => result::render(frame, area, window),
            _ => quiz::render(frame, area, window),
        },
        Some(Window::Chat(window)) => chat::render(frame, area, window),
    }
}

/// Bordered frame every feature window is drawn in.
fn window_block(title: &str) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray))
        .title(format!(" {} ", title))
        .title_style(Style::default().fg(Color::Cyan).bold())
        .padding(Padding::horizontal(1))
}
