//! How listings and reports are laid out on stdout.

use clap::ValueEnum;

/// Layout requested with `--format` on `list` and `stats`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Aligned columns and bar charts
    Table,
    /// Tab-separated rows and `key=value` lines
    Plain,
}

/// Resolved output mode for one command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// JSON document only
    Json,
    /// Stable text for pipes and scripts
    #[default]
    Plain,
    /// Tables, badges and colour
    Pretty,
}

impl OutputMode {
    /// Pick the mode for a command.
    ///
    /// `--json` wins. An explicit `--format` is honoured even when stdout is
    /// piped, except that a dumb terminal never gets tables. Without a flag,
    /// terminals get tables and everything else gets plain text.
    pub fn select(
        json: bool,
        format: Option<OutputFormat>,
        stdout_is_tty: bool,
        term_is_dumb: bool,
    ) -> Self {
        if json {
            return Self::Json;
        }
        match format {
            Some(OutputFormat::Plain) => Self::Plain,
            _ if term_is_dumb => Self::Plain,
            Some(OutputFormat::Table) => Self::Pretty,
            None if stdout_is_tty => Self::Pretty,
            None => Self::Plain,
        }
    }

    pub fn is_json(&self) -> bool {
        matches!(self, Self::Json)
    }

    pub fn is_pretty(&self) -> bool {
        matches!(self, Self::Pretty)
    }
}
