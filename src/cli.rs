use crate::config::Config;
use crate::quiz::QuestionBank;
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use clap_complete::Shell;
use indoc::indoc;
use std::path::{Path, PathBuf};

pub mod completions;

const AFTER_HELP: &str = indoc! {"
    Run without a subcommand to play.

    Config:  ~/.config/quizzo/config.toml (override the directory with QUIZZO_CONFIG_DIR)
    Logs:    ~/.cache/quizzo/quizzo.log (set RUST_LOG=debug for more detail)
"};

/// A terminal trivia quiz with animated answer feedback
#[derive(Parser, Debug)]
#[command(
    name = "quizzo",
    version,
    about = "A terminal trivia quiz with animated answer feedback",
    long_about = None,
    after_help = AFTER_HELP
)]
pub struct Cli {
    /// Config file to use instead of ~/.config/quizzo/config.toml
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Seed the shuffles for a reproducible question order
    #[arg(long)]
    pub seed: Option<u64>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the active question bank
    Bank {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Validate a question bank file
    Check {
        /// Path to the bank file (TOML)
        path: PathBuf,
    },
    /// Print shell completions
    Completions {
        /// Shell to generate for (detected from $SHELL when omitted)
        shell: Option<Shell>,
    },
}

impl Cli {
    /// Config path from `--config`, or the default location
    pub fn config_path(&self) -> PathBuf {
        self.config
            .clone()
            .unwrap_or_else(crate::utils::get_config_path)
    }

    /// Execute the CLI command. Returns false when no subcommand was given
    /// and the TUI should be launched instead.
    pub fn execute(&self) -> Result<bool> {
        match &self.command {
            Some(Commands::Bank { json }) => self.cmd_bank(*json)?,
            Some(Commands::Check { path }) => Self::cmd_check(path)?,
            Some(Commands::Completions { shell }) => completions::generate(*shell)?,
            None => return Ok(false),
        }
        Ok(true)
    }

    fn cmd_bank(&self, json: bool) -> Result<()> {
        let config = Config::load_or_create(&self.config_path())
            .context("Failed to load configuration")?;
        let bank = config.load_bank()?;

        if json {
            let out = serde_json::to_string_pretty(bank.questions())
                .context("Failed to serialize question bank")?;
            println!("{}", out);
        } else {
            print!("{}", format_bank(&bank));
        }
        Ok(())
    }

    fn cmd_check(path: &Path) -> Result<()> {
        let bank = QuestionBank::load(path)?;
        println!(
            "✅ {}: {} questions across {} categories",
            path.display(),
            bank.len(),
            bank.categories().len()
        );
        Ok(())
    }
}

/// Human-readable listing of a bank, grouped by category
pub fn format_bank(bank: &QuestionBank) -> String {
    let mut out = format!("Question bank ({} questions)\n", bank.len());
    for category in bank.categories() {
        out.push_str(&format!("\n{}\n", category));
        for question in bank.in_category(category) {
            out.push_str(&format!("  {} {}\n", question.id, question.text));
            let answers: Vec<String> = question
                .answers
                .iter()
                .map(|a| {
                    if question.is_correct(a) {
                        format!("✓ {}", a)
                    } else {
                        a.clone()
                    }
                })
                .collect();
            out.push_str(&format!("     {}\n", answers.join(" | ")));
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quiz::Question;

    #[test]
    fn test_parse_no_subcommand_launches_tui() {
        let cli = Cli::try_parse_from(["quizzo", "--seed", "3"]).unwrap();
        assert!(cli.command.is_none());
        assert_eq!(cli.seed, Some(3));
    }

    #[test]
    fn test_parse_check() {
        let cli = Cli::try_parse_from(["quizzo", "check", "bank.toml"]).unwrap();
        assert!(matches!(cli.command, Some(Commands::Check { ref path }) if path == Path::new("bank.toml")));
    }

    #[test]
    fn test_format_bank_marks_correct_answer() {
        let bank = QuestionBank::new(vec![Question::new(
            1,
            "Science",
            "What is the chemical symbol for water?",
            &["H2O", "CO2"],
            "H2O",
        )])
        .unwrap();
        let text = format_bank(&bank);
        assert!(text.starts_with("Question bank (1 questions)"));
        assert!(text.contains("\nScience\n"));
        assert!(text.contains("#1 What is the chemical symbol for water?"));
        assert!(text.contains("✓ H2O | CO2"));
    }
}
