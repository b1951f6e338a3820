use std::io::Write;

use super::operation::ActionRecord;

/// Receives action records in the order they happen.
///
/// Reporting is best effort: a sink that fails to write logs a warning and
/// the run carries on, since the filesystem is the only source of errors.
pub trait Reporter {
    fn report(&mut self, record: &ActionRecord);
}

/// Collects records in memory.
impl Reporter for Vec<ActionRecord> {
    fn report(&mut self, record: &ActionRecord) {
        self.push(record.clone());
    }
}

/// Writes one `  <verb>  <path>` line per record.
pub struct LineReporter<W: Write> {
    writer: W,
}

impl<W: Write> LineReporter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> Reporter for LineReporter<W> {
    fn report(&mut self, record: &ActionRecord) {
        if let Err(e) = writeln!(self.writer, "{record}") {
            log::warn!("Failed to report '{}': {e}", record.display_path());
        }
    }
}

/// Writes one JSON object per line, e.g.
/// `{"action":"directory_created","path":"widget"}`.
pub struct JsonReporter<W: Write> {
    writer: W,
}

impl<W: Write> JsonReporter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> Reporter for JsonReporter<W> {
    fn report(&mut self, record: &ActionRecord) {
        let result = serde_json::to_writer(&mut self.writer, record)
            .map_err(std::io::Error::from)
            .and_then(|_| writeln!(self.writer));
        if let Err(e) = result {
            log::warn!("Failed to report '{}': {e}", record.display_path());
        }
    }
}
