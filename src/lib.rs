// src/lib.rs

pub mod browser;
pub mod cli;
pub mod config;
pub mod constants;
pub mod cookies;
pub mod error;
pub mod extractor;
pub mod logging;
pub mod manifest;
pub mod models;
pub mod naming;
pub mod symbols;
pub mod ui;

use crate::{
    browser::{ChromiumSession, PageSession},
    cli::Cli,
    config::AppConfig,
    error::AppResult,
    extractor::{CourseExtractor, ScrapeTracker, Throttle},
};
use log::{debug, info};
use std::sync::{Arc, atomic::AtomicBool};

/// Shared execution context for one extraction run.
///
/// The browser session is the single shared mutable resource of the whole
/// pipeline; it is passed explicitly so nothing depends on ambient state and
/// the tests can substitute a fake implementation.
#[derive(Clone)]
pub struct ScrapeContext {
    pub session: Arc<dyn PageSession>,
    pub config: Arc<AppConfig>,
    pub tracker: ScrapeTracker,
    pub throttle: Throttle,
    pub cancellation_token: Arc<AtomicBool>,
}

/// Library entry point, called by `main.rs`.
pub async fn run_from_cli(args: Arc<Cli>, cancellation_token: Arc<AtomicBool>) -> AppResult<()> {
    debug!("CLI arguments: {:?}", args);
    let config = Arc::new(AppConfig::new(&args)?);
    debug!("resolved configuration: {:?}", config);

    let cookies = cookies::load_cookies(&config.cookies_path)?;
    info!(
        "loaded {} cookies from {:?}",
        cookies.len(),
        config.cookies_path
    );
    println!(
        "\n{} Loaded {} cookies from '{}'.",
        *symbols::INFO,
        cookies.len(),
        config.cookies_path.display()
    );

    ui::print_header(&format!("Extracting '{}'", config.course_slug));
    println!(
        "Press {} to abort. The manifest is only written after a complete run.",
        *symbols::CTRL_C
    );

    let session: Arc<dyn PageSession> = Arc::new(ChromiumSession::launch(&config).await?);
    session.set_cookies(&cookies).await?;

    let context = ScrapeContext {
        session: session.clone(),
        config: config.clone(),
        tracker: ScrapeTracker::new(),
        throttle: Throttle::new(config.throttle),
        cancellation_token,
    };

    let result = CourseExtractor::new(context.clone()).extract().await;
    // browser teardown is best effort, on success and on failure alike
    session.close().await.ok();
    let course = result?;

    let entries = manifest::build_manifest(&course);
    manifest::write_manifest(&config.output_path, &entries)?;

    context.tracker.print_report();
    println!(
        "\n{} Manifest with {} entries written to '{}'.",
        *symbols::OK,
        entries.len(),
        config.output_path.display()
    );
    Ok(())
}
