//! Line-oriented text report, optionally coloured

use std::io;

use termcolor::{Color, ColorSpec, WriteColor};

use crate::diff::{DiffEvent, FieldChange, FieldLabel, SummaryStats};

use super::OutputFormatter;

/// Line printed between the event lines and the totals
pub const SEPARATOR: &str = "-----------------------------------------------------------";

/// Text report writer
pub struct TerminalOutput<W> {
    writer: W,
}

impl<W: WriteColor> TerminalOutput<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }

    fn write_heading(&mut self, color: Color, text: std::fmt::Arguments<'_>) -> io::Result<()> {
        self.writer
            .set_color(ColorSpec::new().set_fg(Some(color)).set_bold(true))?;
        self.writer.write_fmt(text)?;
        self.writer.reset()?;
        writeln!(self.writer)
    }

    fn write_field_change(&mut self, change: &FieldChange) -> io::Result<()> {
        match &change.label {
            FieldLabel::Same(name) => writeln!(
                self.writer,
                "    {:?}: {:?} - {:?}",
                name, change.left_value, change.right_value
            ),
            FieldLabel::Renamed { left, right } => writeln!(
                self.writer,
                "    {:?}: {:?} - {:?}: {:?}",
                left, change.left_value, right, change.right_value
            ),
        }
    }
}

impl<W: WriteColor> OutputFormatter for TerminalOutput<W> {
    fn write_event(&mut self, event: &DiffEvent) -> io::Result<()> {
        match event {
            DiffEvent::Added { id, row_number } => self.write_heading(
                Color::Green,
                format_args!("Added record #{} with ID = {:?}", row_number, id),
            ),
            DiffEvent::Removed { id, row_number } => self.write_heading(
                Color::Red,
                format_args!("Removed record #{} with ID = {:?}", row_number, id),
            ),
            DiffEvent::Incompatible {
                left_row_number,
                right_row_number,
                id,
                left_width,
                right_width,
            } => self.write_heading(
                Color::Magenta,
                format_args!(
                    "Incompatible record #{} - #{} with ID = {:?} ({} - {})",
                    left_row_number, right_row_number, id, left_width, right_width
                ),
            ),
            DiffEvent::Modified {
                left_row_number,
                right_row_number,
                id,
                field_changes,
            } => {
                self.write_heading(
                    Color::Yellow,
                    format_args!(
                        "Changed records #{} - #{} with ID = {:?}:",
                        left_row_number, right_row_number, id
                    ),
                )?;
                for change in field_changes {
                    self.write_field_change(change)?;
                }
                Ok(())
            }
        }
    }

    fn write_summary(&mut self, stats: &SummaryStats) -> io::Result<()> {
        writeln!(self.writer, "{}", SEPARATOR)?;
        writeln!(self.writer, "Added {} records", stats.added_count)?;
        writeln!(self.writer, "Removed {} records", stats.removed_count)?;
        writeln!(self.writer, "Changed fields:")?;
        for (label, count) in &stats.modified_field_counts {
            writeln!(self.writer, "    {:?}: {}", label, count)?;
        }
        self.writer.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use termcolor::NoColor;

    fn render(events: &[DiffEvent], stats: &SummaryStats) -> String {
        let mut output = TerminalOutput::new(NoColor::new(Vec::new()));
        for event in events {
            output.write_event(event).unwrap();
        }
        output.write_summary(stats).unwrap();
        String::from_utf8(output.into_inner().into_inner()).unwrap()
    }

    #[test]
    fn test_event_lines() {
        let events = vec![
            DiffEvent::Modified {
                left_row_number: 1,
                right_row_number: 2,
                id: "1".into(),
                field_changes: vec![
                    FieldChange {
                        label: FieldLabel::Same("age".into()),
                        left_value: "30".into(),
                        right_value: "31".into(),
                    },
                    FieldChange {
                        label: FieldLabel::new("name", "full_name"),
                        left_value: "Al".into(),
                        right_value: "Alice".into(),
                    },
                ],
            },
            DiffEvent::Added {
                id: "3".into(),
                row_number: 3,
            },
            DiffEvent::Incompatible {
                left_row_number: 4,
                right_row_number: 5,
                id: "x\"y".into(),
                left_width: 3,
                right_width: 2,
            },
            DiffEvent::Removed {
                id: "2".into(),
                row_number: 2,
            },
        ];

        let text = render(&events, &SummaryStats::default());
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines[0], "Changed records #1 - #2 with ID = \"1\":");
        assert_eq!(lines[1], "    \"age\": \"30\" - \"31\"");
        assert_eq!(lines[2], "    \"name\": \"Al\" - \"full_name\": \"Alice\"");
        assert_eq!(lines[3], "Added record #3 with ID = \"3\"");
        assert_eq!(lines[4], "Incompatible record #4 - #5 with ID = \"x\\\"y\" (3 - 2)");
        assert_eq!(lines[5], "Removed record #2 with ID = \"2\"");
        assert_eq!(lines[6], SEPARATOR);
    }

    #[test]
    fn test_summary_sorted_by_label() {
        let mut stats = SummaryStats {
            added_count: 2,
            removed_count: 0,
            ..Default::default()
        };
        stats.modified_field_counts.insert("name".into(), 1);
        stats.modified_field_counts.insert("age".into(), 3);

        let text = render(&[], &stats);
        assert_eq!(
            text,
            format!(
                "{}\nAdded 2 records\nRemoved 0 records\nChanged fields:\n    \"age\": 3\n    \"name\": 1\n",
                SEPARATOR
            )
        );
    }
}
