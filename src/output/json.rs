//! JSON lines output format

use std::io::{self, Write};

use serde::Serialize;

use crate::diff::{DiffEvent, SummaryStats};

use super::OutputFormatter;

/// Writes one JSON object per event, then a summary object
pub struct JsonOutput<W> {
    writer: W,
}

#[derive(Serialize)]
#[serde(tag = "type", rename = "summary")]
struct JsonSummary<'a> {
    #[serde(flatten)]
    stats: &'a SummaryStats,
}

impl<W: Write> JsonOutput<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }

    fn write_line<T: Serialize>(&mut self, value: &T) -> io::Result<()> {
        serde_json::to_writer(&mut self.writer, value)?;
        writeln!(self.writer)
    }
}

impl<W: Write> OutputFormatter for JsonOutput<W> {
    fn write_event(&mut self, event: &DiffEvent) -> io::Result<()> {
        self.write_line(event)
    }

    fn write_summary(&mut self, stats: &SummaryStats) -> io::Result<()> {
        self.write_line(&JsonSummary { stats })?;
        self.writer.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_lines() {
        let mut output = JsonOutput::new(Vec::new());
        output
            .write_event(&DiffEvent::Added {
                id: "3".into(),
                row_number: 2,
            })
            .unwrap();
        let mut stats = SummaryStats {
            added_count: 1,
            ..Default::default()
        };
        stats.modified_field_counts.insert("age".into(), 1);
        output.write_summary(&stats).unwrap();

        let text = String::from_utf8(output.into_inner()).unwrap();
        let lines: Vec<serde_json::Value> = text
            .lines()
            .map(|l| serde_json::from_str(l).unwrap())
            .collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0]["type"], "added");
        assert_eq!(lines[0]["id"], "3");
        assert_eq!(lines[0]["row_number"], 2);
        assert_eq!(lines[1]["type"], "summary");
        assert_eq!(lines[1]["added"], 1);
        assert_eq!(lines[1]["removed"], 0);
        assert_eq!(lines[1]["changed_fields"]["age"], 1);
    }
}
