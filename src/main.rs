//! Binary entry point: loads configuration, sets up logging and the Ctrl+C
//! handler, then dispatches to a subcommand, the API server, or the
//! interactive menu.

use clap::Parser;
use std::io;
use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use smartpass::api;
use smartpass::cli::{self, Args};
use smartpass::core::config::Config;
use smartpass::history::PasswordHistory;

#[tokio::main]
async fn main() -> Result<(), io::Error> {
    // Load environment variables
    if Path::new(".env").exists() {
        dotenvy::dotenv().ok();
    }

    let args = Args::parse();
    let config = Config::load();
    config.ensure_directories_exist();

    env_logger::Builder::new()
        .filter_level(config.log_level)
        .format_timestamp_secs()
        .init();

    log::info!("🔐 Starting SmartPass - Password Generator & Strength Checker");

    let history_file = args.history.clone().or_else(|| config.history_file.clone());
    let history = Arc::new(Mutex::new(match history_file {
        Some(path) => PasswordHistory::load(path),
        None => PasswordHistory::in_memory(),
    }));

    let api_port = args.api_port.unwrap_or(config.web_port);

    // API-only mode (blocks forever)
    if args.api_only {
        log::info!("API-only mode active. CLI interface disabled.");
        return api::start_server(history, config.web_address.clone(), api_port).await;
    }

    // One-shot subcommand dispatch
    if let Some(command) = args.command {
        if let Err(e) = cli::handlers::dispatch(command, &config, &history, args.json) {
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
        return Ok(());
    }

    let should_exit = Arc::new(AtomicBool::new(false));
    {
        let should_exit = Arc::clone(&should_exit);
        ctrlc::set_handler(move || {
            log::info!("Ctrl+C received. Shutting down...");
            should_exit.store(true, Ordering::SeqCst);
            println!("\n👋 Goodbye!");
            std::process::exit(0);
        })
        .expect("Failed to set Ctrl+C handler");
    }

    // Start the API server in the background (separate thread with its own runtime)
    if !args.no_api && config.web_enabled {
        let history_clone = Arc::clone(&history);
        let address = config.web_address.clone();
        std::thread::spawn(move || match tokio::runtime::Runtime::new() {
            Ok(rt) => rt.block_on(async {
                if let Err(e) = api::start_server(history_clone, address, api_port).await {
                    log::error!("API server error: {}", e);
                }
            }),
            Err(e) => log::error!("Failed to create runtime for API server: {}", e),
        });
        println!("🚀 API server started on port {}", api_port);
    }

    if let Err(e) = cli::menu::run_cli_menu(&config, history, should_exit).await {
        log::error!("Menu error: {}", e);
        return Err(io::Error::new(io::ErrorKind::Other, e.to_string()));
    }

    Ok(())
}
