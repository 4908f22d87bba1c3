#[cfg(feature = "colored-output")]
use colored::*;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::Path;
use std::time::Duration;

/// Console progress for a single run. Everything goes to stdout except the
/// spinner, which indicatif draws on stderr and hides when it is not a
/// terminal.
pub struct Reporter {
    quiet: bool,
    #[cfg_attr(not(feature = "colored-output"), allow(dead_code))]
    colored: bool,
}

impl Reporter {
    pub fn new(quiet: bool, colored: bool) -> Self {
        Self { quiet, colored }
    }

    pub fn step(&self, message: &str) {
        if !self.quiet {
            println!("{}", self.colorize(message, &Color::Cyan, false));
        }
    }

    pub fn channel(&self, name: &str) {
        if !self.quiet {
            println!("{name}");
        }
    }

    pub fn done(&self, path: &Path) {
        if !self.quiet {
            println!(
                "Done, all saved to {}",
                self.colorize(&path.display().to_string(), &Color::Green, true)
            );
        }
    }

    pub fn spinner(&self, message: &str) -> ProgressBar {
        if self.quiet {
            return ProgressBar::hidden();
        }

        let pb = ProgressBar::new_spinner();
        pb.enable_steady_tick(Duration::from_millis(120));
        if let Ok(style) = ProgressStyle::default_spinner().template("{spinner:.cyan} {msg}") {
            pb.set_style(style.tick_chars("⠁⠂⠄⡀⢀⠠⠐⠈ "));
        }
        pb.set_message(message.to_string());
        pb
    }

    fn colorize(&self, text: &str, color: &Color, bold: bool) -> String {
        #[cfg(feature = "colored-output")]
        {
            if self.colored {
                let colored_text = match color {
                    Color::Green => text.green(),
                    Color::Cyan => text.cyan(),
                };
                if bold {
                    colored_text.bold().to_string()
                } else {
                    colored_text.to_string()
                }
            } else {
                text.to_string()
            }
        }

        #[cfg(not(feature = "colored-output"))]
        {
            let _ = (color, bold);
            text.to_string()
        }
    }
}

enum Color {
    Green,
    Cyan,
}
