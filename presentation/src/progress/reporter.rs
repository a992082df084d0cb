//! Progress reporting for chat rounds

use colored::Colorize;
use ims_application::ports::chat_progress::ChatProgressNotifier;
use ims_domain::{ToolCall, ToolResult};
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::Mutex;
use std::time::Duration;

/// Spinner that shows the current round and tool activity
pub struct ProgressReporter {
    spinner: Mutex<Option<ProgressBar>>,
}

impl ProgressReporter {
    pub fn new() -> Self {
        Self {
            spinner: Mutex::new(None),
        }
    }

    fn spinner_style() -> ProgressStyle {
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {prefix:.bold.cyan} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
    }

    fn with_spinner(&self, f: impl FnOnce(&ProgressBar)) {
        if let Ok(guard) = self.spinner.lock() {
            if let Some(pb) = guard.as_ref() {
                f(pb);
            }
        }
    }
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ChatProgressNotifier for ProgressReporter {
    fn on_round_start(&self, round: usize, max_rounds: usize) {
        let Ok(mut guard) = self.spinner.lock() else {
            return;
        };
        let pb = guard.get_or_insert_with(|| {
            let pb = ProgressBar::new_spinner();
            pb.set_style(Self::spinner_style());
            pb.enable_steady_tick(Duration::from_millis(100));
            pb
        });
        pb.set_prefix(format!("Round {}/{}", round, max_rounds));
        pb.set_message("Waiting for model...");
    }

    fn on_tool_call(&self, _round: usize, call: &ToolCall) {
        self.with_spinner(|pb| pb.set_message(format!("Calling {}", call.tool_name.yellow())));
    }

    fn on_tool_result(&self, _round: usize, result: &ToolResult) {
        let mark = if result.is_success() {
            "v".green()
        } else {
            "x".red()
        };
        self.with_spinner(|pb| pb.println(format!("  {} {}", mark, result.tool_name)));
    }

    fn on_complete(&self, rounds: usize) {
        if let Ok(mut guard) = self.spinner.lock() {
            if let Some(pb) = guard.take() {
                pb.finish_and_clear();
            }
        }
        tracing::debug!("Chat finished after {} rounds", rounds);
    }
}
