// src/cli/handlers.rs
use std::error::Error;
use std::sync::{Arc, Mutex};

use crate::cli::CliCommand;
use crate::core::config::Config;
use crate::generators::password::generate_password;
use crate::history::PasswordHistory;
use crate::models::GenerationOptions;
use crate::strength::{class_feedback, score_password, suggest_stronger, StrengthLabel};
use crate::utils::{format_time_ago, truncate_string};

// Handlers for CLI subcommands
pub fn dispatch(
    command: CliCommand,
    config: &Config,
    history: &Arc<Mutex<PasswordHistory>>,
    json: bool,
) -> Result<(), Box<dyn Error>> {
    match command {
        CliCommand::Generate { length, exclude } => {
            let options = GenerationOptions {
                length: length.unwrap_or(config.default_password_length),
                exclude_chars: exclude,
            };
            handle_generate(&options, history, json)
        }
        CliCommand::Check { password } => handle_check(&password, json),
        CliCommand::Suggest { password } => handle_suggest(&password, json),
        CliCommand::History => handle_history(history, json),
        CliCommand::ClearHistory => handle_clear_history(history),
    }
}

pub fn handle_generate(
    options: &GenerationOptions,
    history: &Arc<Mutex<PasswordHistory>>,
    json: bool,
) -> Result<(), Box<dyn Error>> {
    let password = generate_password(options)?;
    let score = score_password(&password);
    let label = StrengthLabel::from_score(score);

    {
        let mut history = history.lock().map_err(|_| "password history is unavailable")?;
        history.record(&password, score);
        if let Err(e) = history.save() {
            log::warn!("Failed to save password history: {}", e);
        }
    }

    if json {
        let output = serde_json::json!({
            "password": password,
            "strength": score,
            "label": label.to_string(),
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        println!("🔑 {}", password);
        println!("💪 Strength: {} ({}/4)", label, score);
    }

    Ok(())
}

pub fn handle_check(password: &str, json: bool) -> Result<(), Box<dyn Error>> {
    let score = score_password(password);
    let label = StrengthLabel::from_score(score);
    let suggestion = (score < 3).then(|| suggest_stronger(password));

    if json {
        let output = serde_json::json!({
            "strength": score,
            "label": label.to_string(),
            "feedback": class_feedback(password),
            "suggestion": suggestion,
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    match label {
        StrengthLabel::Undefined => println!("⚠️  Nothing to rate - the password is empty."),
        _ => println!("💪 Strength: {} ({}/4)", label, score),
    }

    if let Some(suggestion) = suggestion {
        for line in class_feedback(password) {
            println!("  • {}", line);
        }
        println!("💡 Suggested stronger password: {}", suggestion);
    }

    Ok(())
}

pub fn handle_suggest(password: &str, json: bool) -> Result<(), Box<dyn Error>> {
    let suggestion = suggest_stronger(password);

    if json {
        let output = serde_json::json!({
            "password": password,
            "suggestion": suggestion,
            "strength": score_password(&suggestion),
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        println!("💡 {}", suggestion);
    }

    Ok(())
}

pub fn handle_history(
    history: &Arc<Mutex<PasswordHistory>>,
    json: bool,
) -> Result<(), Box<dyn Error>> {
    let history = history.lock().map_err(|_| "password history is unavailable")?;

    if json {
        let entries: Vec<_> = history.entries().iter().cloned().collect();
        println!("{}", serde_json::to_string_pretty(&entries)?);
        return Ok(());
    }

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

pub fn handle_clear_history(history: &Arc<Mutex<PasswordHistory>>) -> Result<(), Box<dyn Error>> {
    let mut history = history.lock().map_err(|_| "password history is unavailable")?;
    history.clear()?;
    println!("🗑️  Password history cleared.");
    Ok(())
}
