use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::app::{App, Feature, QuizCursor, Window};
use crate::quiz::QuizPhase;

enum Target {
    Menu,
    Pdf,
    Quiz(QuizPhase, QuizCursor, bool),
    Chat,
}

/// Routes a key press to whatever is on screen.
pub fn handle_key(app: &mut App, key: KeyEvent) {
    let target = match app.window() {
        None => Target::Menu,
        Some(Window::Pdf(_)) => Target::Pdf,
        Some(Window::Quiz(quiz)) => Target::Quiz(
            quiz.session.phase(),
            quiz.cursor,
            quiz.session.is_submitting(),
        ),
        Some(Window::Chat(_)) => Target::Chat,
    };

    match target {
        Target::Menu => handle_menu_input(app, key.code),
        Target::Pdf => handle_pdf_input(app, key.code),
        Target::Quiz(_, _, true) => handle_busy_input(app, key.code),
        Target::Quiz(QuizPhase::Loading, _, _) => handle_busy_input(app, key.code),
        Target::Quiz(QuizPhase::AwaitingAnswers, QuizCursor::Question(_), _) => {
            handle_question_input(app, key.code)
        }
        Target::Quiz(QuizPhase::AwaitingAnswers, QuizCursor::Submit, _) => {
            handle_name_input(app, key.code)
        }
        Target::Quiz(QuizPhase::Submitted, _, _) => handle_result_input(app, key.code),
        Target::Chat => handle_chat_input(app, key),
    }
}

fn handle_menu_input(app: &mut App, key: KeyCode) {
    match key {
        KeyCode::Up | KeyCode::Char('k') => app.select_previous_feature(),
        KeyCode::Down | KeyCode::Char('j') => app.select_next_feature(),
        KeyCode::Enter | KeyCode::Char(' ') => app.open_selected(),
        KeyCode::Char('1') => app.open(Feature::Pdf),
        KeyCode::Char('2') => app.open(Feature::Quiz),
        KeyCode::Char('3') => app.open(Feature::Chat),
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => app.should_quit = true,
        _ => {}
    }
}

fn handle_pdf_input(app: &mut App, key: KeyCode) {
    match key {
        KeyCode::Enter | KeyCode::Char('o') | KeyCode::Char('O') => app.open_pdf(),
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => app.close_window(),
        _ => {}
    }
}

/// While questions load or a grade is outstanding the only way out is closing.
fn handle_busy_input(app: &mut App, key: KeyCode) {
    if matches!(key, KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('Q')) {
        app.close_window();
    }
}

fn handle_question_input(app: &mut App, key: KeyCode) {
    match key {
        KeyCode::Up | KeyCode::Char('k') => app.highlight_previous_option(),
        KeyCode::Down | KeyCode::Char('j') => app.highlight_next_option(),
        KeyCode::Enter | KeyCode::Char(' ') => app.choose_highlighted(),
        KeyCode::Left | KeyCode::Char('h') => app.previous_question(),
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Tab => app.next_question(),
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => app.close_window(),
        _ => {}
    }
}

fn handle_name_input(app: &mut App, key: KeyCode) {
    match key {
        KeyCode::Char(c) => app.quiz_name_push(c),
        KeyCode::Backspace => app.quiz_name_pop(),
        KeyCode::Enter => app.submit_quiz(),
        KeyCode::Left | KeyCode::Up | KeyCode::BackTab => app.previous_question(),
        KeyCode::Esc => app.close_window(),
        _ => {}
    }
}

fn handle_result_input(app: &mut App, key: KeyCode) {
    match key {
        KeyCode::Down | KeyCode::Char('j') => app.scroll_results_down(),
        KeyCode::Up | KeyCode::Char('k') => app.scroll_results_up(),
        KeyCode::Char('r') | KeyCode::Char('R') => app.restart_quiz(),
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => app.close_window(),
        _ => {}
    }
}

fn handle_chat_input(app: &mut App, key: KeyEvent) {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        if matches!(key.code, KeyCode::Char('l') | KeyCode::Char('L')) {
            app.clear_chat();
        }
        return;
    }

    let pending = app.chat().is_some_and(|chat| chat.session.is_pending());
    match key.code {
        KeyCode::Char(c) => app.chat_input_push(c),
        KeyCode::Backspace => app.chat_input_pop(),
        KeyCode::Tab => app.chat_suggest(),
        KeyCode::Enter if !pending => app.send_chat(),
        KeyCode::Esc => app.close_window(),
        _ => {}
    }
}
