//! Output formatting for diff events and the final summary

mod json;
mod terminal;

use std::io;

use termcolor::{ColorChoice, StandardStream};

use crate::config::{ColorMode, OutputFormat};
use crate::diff::{DiffEvent, SummaryStats};

pub use json::JsonOutput;
pub use terminal::{TerminalOutput, SEPARATOR};

/// Writes events as they arrive, then the summary once the stream ends
pub trait OutputFormatter {
    /// Render one event
    fn write_event(&mut self, event: &DiffEvent) -> io::Result<()>;

    /// Render the totals; called once, after the last event
    fn write_summary(&mut self, stats: &SummaryStats) -> io::Result<()>;
}

/// Factory for creating output formatters
pub struct OutputFactory;

impl OutputFactory {
    /// Create a formatter writing to stdout
    pub fn stdout(format: OutputFormat, color: ColorMode) -> Box<dyn OutputFormatter> {
        match format {
            OutputFormat::Text => {
                let choice = match color {
                    ColorMode::Auto if io::IsTerminal::is_terminal(&io::stdout()) => {
                        ColorChoice::Auto
                    }
                    ColorMode::Auto | ColorMode::Never => ColorChoice::Never,
                    ColorMode::Always => ColorChoice::Always,
                };
                Box::new(TerminalOutput::new(StandardStream::stdout(choice)))
            }
            OutputFormat::Json => Box::new(JsonOutput::new(io::stdout().lock())),
        }
    }
}
