// src/extractor/mod.rs

pub mod chapter;
pub mod course;
pub mod section;
mod utils;

pub use course::CourseExtractor;

use crate::{symbols, ui};
use colored::*;
use log::info;
use std::{
    sync::{Arc, Mutex},
    time::Duration,
};

/// Rate-limit policy between chapter resolutions. A zero interval disables
/// the pause entirely, which is what the tests inject.
#[derive(Debug, Clone, Copy)]
pub struct Throttle {
    interval: Duration,
}

impl Throttle {
    pub fn new(interval: Duration) -> Self {
        Self { interval }
    }

    pub async fn pause(&self) {
        if !self.interval.is_zero() {
            tokio::time::sleep(self.interval).await;
        }
    }
}

#[derive(Clone, Default)]
pub struct ScrapeStats {
    pub sections: usize,
    pub videos: usize,
    pub resolved: usize,
    pub unresolved: usize,
    pub skipped: usize,
}

/// Shared counters for one extraction run, plus the names of chapters whose
/// download link never appeared.
#[derive(Clone)]
pub struct ScrapeTracker {
    stats: Arc<Mutex<ScrapeStats>>,
    unresolved_chapters: Arc<Mutex<Vec<String>>>,
}

impl Default for ScrapeTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl ScrapeTracker {
    pub fn new() -> Self {
        Self {
            stats: Arc::new(Mutex::new(ScrapeStats::default())),
            unresolved_chapters: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn record_section(&self) {
        self.stats.lock().unwrap().sections += 1;
    }

    pub fn record_resolved(&self) {
        let mut stats = self.stats.lock().unwrap();
        stats.videos += 1;
        stats.resolved += 1;
    }

    pub fn record_unresolved(&self, chapter_name: &str) {
        info!("no download link resolved for chapter '{}'", chapter_name);
        let mut stats = self.stats.lock().unwrap();
        stats.videos += 1;
        stats.unresolved += 1;
        drop(stats);
        self.unresolved_chapters
            .lock()
            .unwrap()
            .push(chapter_name.to_string());
    }

    pub fn record_skipped(&self) {
        self.stats.lock().unwrap().skipped += 1;
    }

    pub fn get_stats(&self) -> ScrapeStats {
        self.stats.lock().unwrap().clone()
    }

    pub fn print_report(&self) {
        let stats = self.get_stats();
        let unresolved = self.unresolved_chapters.lock().unwrap();
        info!(
            "extraction report: sections={}, videos={}, resolved={}, unresolved={}, skipped={}",
            stats.sections, stats.videos, stats.resolved, stats.unresolved, stats.skipped
        );

        ui::print_sub_header("Extraction summary");
        println!(
            "{} | {} | {}",
            format!("sections: {}", stats.sections).cyan(),
            format!("video chapters: {}", stats.videos).green(),
            format!("non-video items skipped: {}", stats.skipped).yellow()
        );
        if !unresolved.is_empty() {
            println!(
                "\n{} chapters without a download link ({}):",
                *symbols::WARN,
                stats.unresolved
            );
            for name in unresolved.iter() {
                println!("  - {}", name.yellow());
            }
        }
    }
}
