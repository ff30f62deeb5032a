use std::time::Duration;

use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};

use crate::ui;

const SPINNER_TEMPLATE: &str = "{spinner:.cyan} {msg}";
const BAR_TEMPLATE: &str = "{wide_bar:.cyan/blue} {pos}/{len} {msg}";

/// A pipeline stage indicator on stderr, inert when progress is disabled.
pub struct Progress {
    bar: Option<ProgressBar>,
}

impl Progress {
    #[must_use]
    pub fn spinner(message: &str) -> Self {
        Self::start(ProgressBar::new_spinner(), SPINNER_TEMPLATE, message, true)
    }

    #[must_use]
    pub fn bar(total: u64, message: &str) -> Self {
        Self::start(ProgressBar::new(total), BAR_TEMPLATE, message, false)
    }

    fn start(bar: ProgressBar, template: &str, message: &str, ticking: bool) -> Self {
        if !ui::prefs().progress {
            return Self { bar: None };
        }
        bar.set_draw_target(ProgressDrawTarget::stderr());
        if let Ok(style) = ProgressStyle::with_template(template) {
            bar.set_style(style);
        }
        if ticking {
            bar.enable_steady_tick(Duration::from_millis(100));
        }
        bar.set_message(message.to_string());
        Self { bar: Some(bar) }
    }

    pub fn inc(&self, delta: u64) {
        if let Some(bar) = &self.bar {
            bar.inc(delta);
        }
    }

    pub fn finish_clear(&self) {
        if let Some(bar) = &self.bar {
            bar.finish_and_clear();
        }
    }

    pub fn finish_err(&self, message: &str) {
        if let Some(bar) = &self.bar {
            bar.abandon_with_message(message.to_string());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inert_without_terminal_prefs() {
        let bar = Progress::bar(10, "scoring descriptions");
        assert!(bar.bar.is_none());
        bar.inc(3);
        bar.finish_clear();

        let spinner = Progress::spinner("loading CSV files");
        assert!(spinner.bar.is_none());
        spinner.finish_err("failed");
    }
}
