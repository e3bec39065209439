//! Human-facing output.
//!
//! Status lines go to stderr so that values a caller may capture (the
//! register command, the docker GID, `config show` entries) are the only
//! thing on stdout.

pub mod styles;

use console::Term;
use owo_colors::{OwoColorize as _, Style};
pub use styles::Styles;

/// Width of the key column in `config show`; fits `ssh.strict_host_key_checking`.
const KEY_WIDTH: usize = 28;

/// Colors plus the `--quiet` gate.
pub struct OutputContext {
    styles: Styles,
    quiet: bool,
}

impl OutputContext {
    /// Color only when stdout is a terminal and neither `--no-color` nor
    /// `NO_COLOR` is set.
    #[must_use]
    pub fn new(no_color: bool, quiet: bool) -> Self {
        let colored =
            !no_color && std::env::var_os("NO_COLOR").is_none() && Term::stdout().is_term();
        Self::with_styles(Styles::new(colored), quiet)
    }

    #[must_use]
    pub fn with_styles(styles: Styles, quiet: bool) -> Self {
        Self { styles, quiet }
    }

    /// `✓ msg` on stderr unless quiet.
    pub fn success(&self, msg: &str) {
        self.status("✓", self.styles.done, msg);
    }

    /// `ℹ msg` on stderr unless quiet.
    pub fn info(&self, msg: &str) {
        self.status("ℹ", self.styles.note, msg);
    }

    /// One `config show` entry on stdout. Printed even when quiet.
    pub fn kv(&self, key: &str, value: &str) {
        println!("{}", self.kv_line(key, value));
    }

    fn status(&self, mark: &str, style: Style, msg: &str) {
        if !self.quiet {
            eprintln!("{}", status_line(mark, style, msg));
        }
    }

    fn kv_line(&self, key: &str, value: &str) -> String {
        let padded = format!("{key:<KEY_WIDTH$}");
        format!("  {}  {value}", padded.style(self.styles.key))
    }
}

fn status_line(mark: &str, style: Style, msg: &str) -> String {
    format!("  {} {msg}", mark.style(style))
}
