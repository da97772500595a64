// src/main.rs

use clap::{CommandFactory, FromArgMatches};
use colored::*;
use std::{
    env,
    sync::{
        Arc,
        atomic::{AtomicBool, Ordering},
    },
    time::Duration,
};
use teachable_dl::{cli::Cli, error::AppError, logging, run_from_cli};

#[tokio::main]
async fn main() {
    // enable ANSI colors on Windows terminals
    #[cfg(windows)]
    {
        colored::control::set_virtual_terminal(true).ok();
    }

    let cancellation_token = Arc::new(AtomicBool::new(false));
    let ctrl_c_token = cancellation_token.clone();
    tokio::spawn(async move {
        tokio::signal::ctrl_c().await.ok();
        println!("\n{} Interrupted, shutting down.", "[!]".yellow());
        ctrl_c_token.store(true, Ordering::Relaxed);
        // give the extraction loop a moment to notice, then leave for real
        tokio::time::sleep(Duration::from_secs(2)).await;
        std::process::exit(130);
    });

    let bin_name = env::var("CARGO_BIN_NAME").unwrap_or_else(|_| "teachable-dl".to_string());

    let after_help = format!(
        "Examples:\n  # extract a course and write the aria2c manifest\n  {bin} --members-url \"https://members.example.com/\" --course \"courses/enrolled/123\" \\\n      --cookies cookies.json --output links.txt\n\n  # environment-driven, with a visible browser window\n  MEMBERS_URL=... COURSE=... COOKIES_PATH=... ARIA2C_OUTPUT=... {bin} --headful\n\n  # afterwards, hand the manifest to aria2c\n  aria2c -i links.txt",
        bin = bin_name
    );

    let cmd = Cli::command().after_help(after_help);
    let args = Arc::new(Cli::from_arg_matches(&cmd.get_matches()).unwrap());

    logging::init(args.log_level);

    if let Err(e) = run_from_cli(args, cancellation_token).await {
        log::error!("fatal: {}", e);
        eprintln!(
            "\n{} {}",
            "[X]".red(),
            format!("Extraction failed: {}", e).red()
        );
        let code = if matches!(e, AppError::UserInterrupt) {
            130
        } else {
            1
        };
        std::process::exit(code);
    }
}
