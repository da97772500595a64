// src/cli.rs

use clap::{Parser, ValueEnum, command, crate_version};
use std::path::PathBuf;

/// Log verbosity of the file logger
#[derive(ValueEnum, Copy, Clone, Debug, PartialEq, Eq)]
pub enum LogLevel {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

#[derive(Parser, Debug, Clone)]
#[command(
    version = crate_version!(),
    about,
    long_about = None,
    disable_help_flag = true,
    disable_version_flag = true,
)]
pub struct Cli {
    // --- Course selection (Course) ---
    /// Course path under the member area, e.g. 'courses/enrolled/123456'
    #[arg(long, value_name = "SLUG", help_heading = "Course")]
    pub course: Option<String>,
    /// Member-area base URL, e.g. 'https://members.example.com/'
    #[arg(long, value_name = "URL", help_heading = "Course")]
    pub members_url: Option<String>,

    // --- Session & output (Options) ---
    /// JSON file with the exported login cookies
    #[arg(short = 'c', long, value_name = "FILE", help_heading = "Options")]
    pub cookies: Option<PathBuf>,
    /// Destination of the generated aria2c input file
    #[arg(short = 'o', long, value_name = "FILE", help_heading = "Options")]
    pub output: Option<PathBuf>,
    /// Pause between chapter resolutions, in milliseconds
    #[arg(long, value_name = "MS", help_heading = "Options")]
    pub throttle_ms: Option<u64>,
    /// Show the browser window instead of running headless
    #[arg(long, action = clap::ArgAction::SetTrue, help_heading = "Options")]
    pub headful: bool,

    // --- General ---
    /// Print this help message and exit
    #[arg(short = 'h', long, action = clap::ArgAction::Help, global = true, help_heading = "General")]
    _help: Option<bool>,
    /// Print version information and exit
    #[arg(short = 'V', long, action = clap::ArgAction::Version, global = true, help_heading = "General")]
    _version: Option<bool>,
    /// (hidden) log level of the file logger, for debugging
    #[arg(long, value_enum, default_value_t = LogLevel::Off, global = true, hide = true)]
    pub log_level: LogLevel,
}
