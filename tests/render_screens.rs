mod common;

use common::{small_bank, wrong_answer};
use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};
use quizzo::config::Config;
use quizzo::quiz::{Mode, QuizFlow};
use quizzo::screens::ScreenAction;
use quizzo::ui::UiState;
use ratatui::backend::TestBackend;
use ratatui::Terminal;
use std::path::PathBuf;
use std::time::Duration;

fn ui() -> UiState {
    UiState::new(
        Config::default(),
        PathBuf::from("/tmp/quizzo/config.toml"),
        QuizFlow::seeded(small_bank(), 21),
    )
}

fn draw(ui: &mut UiState) -> String {
    let mut terminal = Terminal::new(TestBackend::new(80, 30)).unwrap();
    terminal.draw(|frame| ui.render(frame).unwrap()).unwrap();
    let buffer = terminal.backend().buffer().clone();
    let width = buffer.area.width as usize;
    buffer
        .content
        .chunks(width)
        .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
        .collect::<Vec<_>>()
        .join("\n")
}

fn key(code: KeyCode) -> Event {
    Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
}

#[test]
fn test_welcome_screen() {
    let mut ui = ui();
    let screen = draw(&mut ui);
    assert!(screen.contains("Welcome to Quizzo!"));
    assert!(screen.contains("Begin"));
    assert!(screen.contains("3 questions"));
}

#[test]
fn test_enter_begins_and_shows_question() {
    let mut ui = ui();
    draw(&mut ui);
    ui.handle_event(key(KeyCode::Enter)).unwrap();
    assert_eq!(ui.flow().mode(), Mode::InProgress);

    let question = ui.flow().session().current_question().unwrap().clone();
    let screen = draw(&mut ui);
    assert!(screen.contains(&question.text));
    assert!(screen.contains("Question 1 of 3"));
    for answer in &question.answers {
        assert!(screen.contains(answer.as_str()), "answer {:?} not drawn", answer);
    }
}

#[test]
fn test_digit_key_taps_answer() {
    let mut ui = ui();
    ui.apply(ScreenAction::Begin).unwrap();
    draw(&mut ui);

    let question = ui.flow().session().current_question().unwrap().clone();
    let wrong = wrong_answer(&question);
    let slot = ui
        .flow()
        .session()
        .current_answers()
        .iter()
        .position(|a| *a == wrong)
        .unwrap();
    let digit = char::from_digit(slot as u32 + 1, 10).unwrap();

    ui.handle_event(key(KeyCode::Char(digit))).unwrap();
    assert_eq!(ui.flow().session().incorrect_count(), 1);
    assert_eq!(ui.flow().session().index(), 1);
}

#[test]
fn test_score_screen_and_retake() {
    let mut ui = ui();
    ui.apply(ScreenAction::Begin).unwrap();
    while ui.flow().mode() == Mode::InProgress {
        let question = ui.flow().session().current_question().unwrap().clone();
        ui.apply(ScreenAction::Tap(question.correct_answer.clone())).unwrap();
        ui.tick(Duration::from_millis(600)).unwrap();
    }

    let screen = draw(&mut ui);
    assert!(screen.contains("Quiz Finished!"));
    assert!(screen.contains("Correct Answers: 3"));
    assert!(screen.contains("Incorrect Answers: 0"));
    assert!(screen.contains("Retake Quiz"));

    ui.handle_event(key(KeyCode::Enter)).unwrap();
    assert_eq!(ui.flow().mode(), Mode::InProgress);
    assert_eq!(ui.flow().session().index(), 0);
}

#[test]
fn test_help_overlay_opens_and_closes() {
    let mut ui = ui();
    ui.handle_event(key(KeyCode::Char('?'))).unwrap();
    assert!(ui.help_visible());
    let screen = draw(&mut ui);
    assert!(screen.contains("Keyboard Shortcuts"));
    assert!(screen.contains("Press Esc or ? to close"));

    // other keys neither close the overlay nor reach the screen below
    ui.handle_event(key(KeyCode::Enter)).unwrap();
    assert!(ui.help_visible());
    assert_eq!(ui.flow().mode(), Mode::Welcome);

    ui.handle_event(key(KeyCode::Esc)).unwrap();
    assert!(!ui.help_visible());
    assert_eq!(ui.flow().mode(), Mode::Welcome);
}

#[test]
fn test_quit_from_help_overlay() {
    let mut ui = ui();
    ui.handle_event(key(KeyCode::Char('?'))).unwrap();
    ui.handle_event(key(KeyCode::Char('q'))).unwrap();
    assert!(ui.should_quit());
}

#[test]
fn test_quit_key() {
    let mut ui = ui();
    ui.handle_event(key(KeyCode::Char('q'))).unwrap();
    assert!(ui.should_quit());
}
