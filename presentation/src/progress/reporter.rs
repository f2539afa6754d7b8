//! Progress reporting for board construction

use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::Mutex;
use trivia_application::BuildProgressNotifier;
use trivia_domain::CategoryId;

/// Reports fetch progress with a progress bar
pub struct ProgressReporter {
    bar: Mutex<Option<ProgressBar>>,
}

impl ProgressReporter {
    pub fn new() -> Self {
        Self {
            bar: Mutex::new(None),
        }
    }

    fn bar_style() -> ProgressStyle {
        ProgressStyle::default_bar()
            .template("{spinner:.green} {prefix:.bold.cyan} [{bar:30.cyan/blue}] {pos}/{len} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("=>-")
    }
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl BuildProgressNotifier for ProgressReporter {
    fn on_build_start(&self, total_categories: usize) {
        let pb = ProgressBar::new(total_categories as u64);
        pb.set_style(Self::bar_style());
        pb.set_prefix("Fetching categories");
        pb.set_message("Starting...");

        if let Ok(mut bar) = self.bar.lock() {
            *bar = Some(pb);
        }
    }

    fn on_category_fetched(&self, id: CategoryId, success: bool) {
        let Ok(bar) = self.bar.lock() else {
            return;
        };
        if let Some(pb) = bar.as_ref() {
            let status = if success {
                format!("{} {}", "v".green(), id)
            } else {
                format!("{} {}", "x".red(), id)
            };
            pb.set_message(status);
            pb.inc(1);
        }
    }

    fn on_build_complete(&self, success: bool) {
        let Ok(mut bar) = self.bar.lock() else {
            return;
        };
        if let Some(pb) = bar.take() {
            if success {
                pb.finish_with_message(format!("{}", "Board ready!".green()));
            } else {
                pb.abandon_with_message(format!("{}", "Board failed".red()));
            }
        }
    }
}

/// Simple text-based progress (no fancy UI), one line per event on stderr
pub struct SimpleProgress;

impl BuildProgressNotifier for SimpleProgress {
    fn on_build_start(&self, total_categories: usize) {
        eprintln!(
            "{} {} ({} categories)",
            "->".cyan(),
            "Fetching categories".bold(),
            total_categories
        );
    }

    fn on_category_fetched(&self, id: CategoryId, success: bool) {
        if success {
            eprintln!("  {} {}", "v".green(), id);
        } else {
            eprintln!("  {} {} (failed)", "x".red(), id);
        }
    }

    fn on_build_complete(&self, success: bool) {
        if success {
            eprintln!("{} {}", "->".cyan(), "Board ready".green());
        }
        eprintln!();
    }
}
