use crossterm::event::{KeyCode, KeyModifiers};
use quizzo::config::Config;
use quizzo::keymap::{Action, KeyBinding, KeymapPreset};
use tempfile::TempDir;

#[test]
fn test_keymap_override_in_config() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("config.toml");

    let mut config = Config::default();
    config.keymap.preset = KeymapPreset::Vim;
    // 'x' quits, 'a' picks the first answer
    config
        .keymap
        .overrides
        .push(KeyBinding::new("x", Action::Quit));
    config
        .keymap
        .overrides
        .push(KeyBinding::new("a", Action::Choice1));
    config.save(&config_path).unwrap();

    let loaded = Config::load_or_create(&config_path).unwrap();
    assert_eq!(loaded.keymap.preset, KeymapPreset::Vim);
    assert_eq!(loaded.keymap.overrides.len(), 2);

    assert_eq!(
        loaded.keymap.get_action(KeyCode::Char('x'), KeyModifiers::NONE),
        Some(Action::Quit)
    );
    assert_eq!(
        loaded.keymap.get_action(KeyCode::Char('a'), KeyModifiers::NONE),
        Some(Action::Choice1)
    );

    // vim movement still comes from the preset
    assert_eq!(
        loaded.keymap.get_action(KeyCode::Char('j'), KeyModifiers::NONE),
        Some(Action::MoveDown)
    );
}

#[test]
fn test_override_shadows_preset_keys_for_same_action() {
    let mut config = Config::default();
    config
        .keymap
        .overrides
        .push(KeyBinding::new("x", Action::Quit));

    // 'q' was the preset Quit key
    assert_eq!(
        config.keymap.get_action(KeyCode::Char('q'), KeyModifiers::NONE),
        None
    );
    assert!(config.keymap.footer_button("Begin").ends_with("X: Quit"));
}

#[test]
fn test_keymap_toml_section() {
    let config: Config = toml::from_str(
        r#"
        [keymap]
        preset = "emacs"

        [[keymap.overrides]]
        key = "ctrl+r"
        action = "confirm"
        "#,
    )
    .unwrap();

    assert_eq!(config.keymap.preset, KeymapPreset::Emacs);
    assert_eq!(
        config.keymap.get_action(KeyCode::Char('r'), KeyModifiers::CONTROL),
        Some(Action::Confirm)
    );
}
