mod common;

use common::TestEnv;
use indoc::indoc;
use quizzo::config::Config;
use quizzo::quiz::{BankError, QuestionBank};

const GOOD_BANK: &str = indoc! {r#"
    [[questions]]
    id = 1
    category = "Music"
    text = "How many strings does a standard guitar have?"
    answers = ["4", "6", "7", "12"]
    correct_answer = "6"

    [[questions]]
    id = 2
    text = "Which note follows A in the musical alphabet?"
    answers = ["B", "G"]
    correct_answer = "B"
"#};

#[test]
fn test_load_bank_file() {
    let env = TestEnv::new();
    let path = env.write("bank.toml", GOOD_BANK);

    let bank = QuestionBank::load(&path).unwrap();
    assert_eq!(bank.len(), 2);
    // category defaults when omitted
    assert_eq!(bank.categories(), vec!["Music", "General"]);
}

#[test]
fn test_config_points_at_bank_next_to_it() {
    let env = TestEnv::new();
    let bank_path = env.write("bank.toml", GOOD_BANK);
    let config_path = env.path("config.toml");

    let config = Config {
        bank_path: Some(bank_path.display().to_string()),
        ..Config::default()
    };
    config.save(&config_path).unwrap();

    let loaded = Config::load_or_create(&config_path).unwrap();
    assert_eq!(loaded.bank_file(), Some(bank_path));
    assert_eq!(loaded.load_bank().unwrap().len(), 2);
}

#[test]
fn test_relative_bank_path_resolves_next_to_config() {
    let env = TestEnv::new();
    env.write("bank.toml", GOOD_BANK);
    let config_path = env.write("config.toml", "bank_path = \"bank.toml\"\n");

    let config = Config::load_or_create(&config_path).unwrap();
    assert_eq!(config.bank_file(), Some(env.path("bank.toml")));
    assert_eq!(config.load_bank().unwrap().len(), 2);
}

#[test]
fn test_missing_bank_file_is_an_error() {
    let env = TestEnv::new();
    let config = Config {
        bank_path: Some(env.path("nope.toml").display().to_string()),
        ..Config::default()
    };
    let err = config.load_bank().unwrap_err();
    assert!(format!("{:#}", err).contains("Failed to read question bank"));
}

#[test]
fn test_bank_with_missing_correct_answer_is_rejected() {
    let env = TestEnv::new();
    let path = env.write(
        "bad.toml",
        indoc! {r#"
            [[questions]]
            id = 4
            text = "Pick one"
            answers = ["a", "b"]
            correct_answer = "c"
        "#},
    );

    let err = QuestionBank::load(&path).unwrap_err();
    let bank_err = err
        .chain()
        .find_map(|e| e.downcast_ref::<BankError>())
        .expect("BankError in chain");
    assert!(matches!(bank_err, BankError::CorrectAnswerMissing { .. }));
}

#[test]
fn test_empty_bank_file_is_rejected() {
    let env = TestEnv::new();
    let path = env.write("empty.toml", "questions = []\n");
    let err = QuestionBank::load(&path).unwrap_err();
    assert!(err
        .chain()
        .any(|e| matches!(e.downcast_ref::<BankError>(), Some(BankError::Empty))));
}

#[test]
fn test_builtin_bank_round_trips_through_a_file() {
    let env = TestEnv::new();
    let builtin = QuestionBank::builtin().unwrap();
    let path = env.write("builtin.toml", &builtin.to_toml_string().unwrap());

    let loaded = QuestionBank::load(&path).unwrap();
    assert_eq!(loaded.questions(), builtin.questions());
}
