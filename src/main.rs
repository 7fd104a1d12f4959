use anyhow::{Context, Result};
use clap::Parser;
use quizzo::app::App;
use quizzo::cli::Cli;
use quizzo::config::Config;
use quizzo::quiz::{QuizEvent, QuizFlow, QuizSession};
use quizzo::styles::{init_theme, ThemeType};
use tracing::{debug, info};
use tracing_appender::non_blocking::WorkerGuard;

/// Set up panic hook to restore terminal state on panic
fn setup_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        // Restore terminal state before handling panic
        let _ = crossterm::terminal::disable_raw_mode();
        let _ = crossterm::execute!(
            std::io::stdout(),
            crossterm::terminal::LeaveAlternateScreen,
            crossterm::event::DisableMouseCapture
        );
        original_hook(panic_info);
    }));
}

/// File logging; the terminal belongs to the TUI
fn init_logging() -> Result<WorkerGuard> {
    let log_dir = quizzo::utils::get_log_dir();
    std::fs::create_dir_all(&log_dir)
        .with_context(|| format!("Failed to create log directory: {:?}", log_dir))?;

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let file_appender = tracing_appender::rolling::never(&log_dir, "quizzo.log");
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(non_blocking)
        .with_ansi(false) // Disable ANSI colors in file
        .init();

    Ok(guard)
}

fn log_quiz_event(event: &QuizEvent) {
    match event {
        QuizEvent::Started { questions } => info!("Run started ({} questions)", questions),
        QuizEvent::QuestionShown {
            question_id,
            position,
            total,
        } => debug!("Showing question {} ({}/{})", question_id, position, total),
        QuizEvent::AnswerSubmitted {
            question_id,
            answer,
            correct,
        } => info!("Answered {} with {:?}: correct={}", question_id, answer, correct),
        QuizEvent::Finished(score) => info!("Run finished: {}", score),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let guard = init_logging()?;

    if cli.execute()? {
        drop(guard);
        return Ok(());
    }

    setup_panic_hook();

    let config_path = cli.config_path();
    let config = Config::load_or_create(&config_path)
        .with_context(|| format!("Failed to load config from {:?}", config_path))?;

    let theme_type = if std::env::var_os("NO_COLOR").is_some() {
        ThemeType::NoColor
    } else {
        config.theme_type()
    };
    init_theme(theme_type);

    let bank = config.load_bank()?;
    let session = match cli.seed {
        Some(seed) => {
            info!("Using fixed seed {}", seed);
            QuizSession::with_seed(bank, seed)
        }
        None => QuizSession::new(bank),
    };
    let mut flow = QuizFlow::new(session, config.feedback.clone());
    flow.session_mut().subscribe(log_quiz_event);

    // Print log location before TUI starts (this will be visible briefly)
    let log_file = quizzo::utils::get_log_dir().join("quizzo.log");
    eprintln!("Logs are being written to: {:?}", log_file);

    let mut app = App::new(config, config_path, flow)?;
    let result = app.run();

    drop(guard);
    result
}
