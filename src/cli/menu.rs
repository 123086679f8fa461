// src/cli/menu.rs
use inquire::{Confirm, Select, Text};
use std::error::Error;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use crate::core::config::Config;
use crate::generators::password::generate_password;
use crate::history::PasswordHistory;
use crate::models::GenerationOptions;
use crate::strength::{class_feedback, score_password, suggest_stronger, StrengthLabel};
use crate::utils::{format_time_ago, truncate_string};

pub async fn run_cli_menu(
    config: &Config,
    history: Arc<Mutex<PasswordHistory>>,
    should_exit: Arc<AtomicBool>,
) -> Result<(), Box<dyn Error>> {
    println!("🔐 Welcome to");
    println!("╔══════════════════════════════════════╗");
    println!("║       🔐 SMARTPASS GENERATOR         ║");
    println!("╚══════════════════════════════════════╝");

    // Main application loop
    let mut exit_requested = false;
    while !exit_requested && !should_exit.load(Ordering::SeqCst) {
        let options = vec![
            "🔐  Generate a password",
            "🧪  Check password strength",
            "🕘  Recent passwords",
            "🗑️  Clear history",
            "❌  Exit",
        ];

        let selection_result = tokio::task::spawn_blocking(move || {
            Select::new("Choose an option:", options)
                .with_help_message("Use arrow keys to navigate, Enter to select. Ctrl+C to exit.")
                .prompt_skippable()
        })
        .await?;

        if should_exit.load(Ordering::SeqCst) {
            break;
        }

        match selection_result {
            Ok(Some(selection)) => match selection {
                "🔐  Generate a password" => {
                    if let Err(e) = generate_page(config, &history) {
                        eprintln!("❌ {}", e);
                    }
                }
                "🧪  Check password strength" => {
                    if let Err(e) = check_page() {
                        eprintln!("❌ {}", e);
                    }
                }
                "🕘  Recent passwords" => {
                    if let Err(e) = history_page(&history) {
                        eprintln!("❌ {}", e);
                    }
                }
                "🗑️  Clear history" => {
                    if let Err(e) = clear_history_page(&history) {
                        eprintln!("❌ {}", e);
                    }
                }
                "❌  Exit" => exit_requested = true,
                _ => {}
            },
            Ok(None) => exit_requested = true,
            Err(e) => {
                eprintln!("❌ Menu error: {}", e);
                exit_requested = true;
            }
        }
    }

    println!("👋 Goodbye!");
    Ok(())
}

fn generate_page(
    config: &Config,
    history: &Arc<Mutex<PasswordHistory>>,
) -> Result<(), Box<dyn Error>> {
    let length: usize = Text::new("Password length:")
        .with_default(&config.default_password_length.to_string())
        .prompt()
        .and_then(|s| {
            s.trim()
                .parse()
                .map_err(|_| inquire::InquireError::Custom("Invalid number".into()))
        })?;

    let exclude = Text::new("Characters to exclude:")
        .with_default("")
        .with_help_message("e.g. abc123")
        .prompt()?;

    let options = GenerationOptions {
        length,
        exclude_chars: exclude,
    };

    loop {
        match generate_password(&options) {
            Ok(password) => {
                let score = score_password(&password);
                println!("\n🔑 Generated password: {}", password);
                println!("💪 Strength: {} ({}/4)", StrengthLabel::from_score(score), score);

                let mut history = history
                    .lock()
                    .map_err(|_| "password history is unavailable")?;
                history.record(&password, score);
                if let Err(e) = history.save() {
                    log::warn!("Failed to save password history: {}", e);
                }
            }
            Err(e) => {
                println!("❌ Could not generate password: {}", e);
                println!("   Adjust the excluded characters and try again.");
                return Ok(());
            }
        }

        let again = Confirm::new("Generate another with the same settings?")
            .with_default(true)
            .prompt()?;
        if !again {
            return Ok(());
        }
    }
}

fn check_page() -> Result<(), Box<dyn Error>> {
    let password = Text::new("Password to check:").prompt()?;

    let score = score_password(&password);
    let label = StrengthLabel::from_score(score);

    match label {
        StrengthLabel::Undefined => println!("⚠️  Nothing to rate - the password is empty."),
        _ => println!("💪 Strength: {} ({}/4)", label, score),
    }

    if score < 3 {
        for line in class_feedback(&password) {
            println!("  • {}", line);
        }
        println!("💡 Suggested stronger password: {}", suggest_stronger(&password));
    }

    Ok(())
}

fn history_page(history: &Arc<Mutex<PasswordHistory>>) -> Result<(), Box<dyn Error>> {
    let history = history
        .lock()
        .map_err(|_| "password history is unavailable")?;

    if history.is_empty() {
        println!("🕘 No passwords generated yet.");
        return Ok(());
    }

    println!("🕘 Last {} generated passwords:", history.len());
    for entry in history.entries() {
        println!(
            "  {}  [{}] {}",
            truncate_string(&entry.password, 40),
            StrengthLabel::from_score(entry.strength),
            format_time_ago(entry.created_at)
        );
    }

    Ok(())
}

fn clear_history_page(history: &Arc<Mutex<PasswordHistory>>) -> Result<(), Box<dyn Error>> {
    let confirmed = Confirm::new("Clear all recorded passwords?")
        .with_default(false)
        .prompt()?;

    if confirmed {
        let mut history = history
            .lock()
            .map_err(|_| "password history is unavailable")?;
        history.clear()?;
        println!("🗑️  Password history cleared.");
    }

    Ok(())
}
