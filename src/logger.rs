//! In-memory buffered logging for a single run.

use chrono::Local;
use std::cell::RefCell;

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.3f";

/// Accumulates timestamped lines in memory and emits nothing unless
/// `print()` is called; an unprinted buffer is silently discarded with the
/// run that owned it.
///
/// Appends go through `&self` so every future in a concurrent pass can hold
/// the same logger. The `RefCell` is only borrowed inside the synchronous
/// `log()` call, never across an await. Not safe against true parallel
/// mutation; a multi-threaded port would need a lock here.
#[derive(Debug, Default)]
pub struct BufferedLogger {
    buffer: RefCell<String>,
}

impl BufferedLogger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one `<timestamp>: <message>` line to the buffer.
    pub fn log(&self, message: impl AsRef<str>) {
        let mut buffer = self.buffer.borrow_mut();
        buffer.push_str(&format!(
            "{}: {}\n",
            Local::now().format(TIMESTAMP_FORMAT),
            message.as_ref()
        ));
    }

    /// Emit the entire buffer to stdout, leaving it intact.
    pub fn print(&self) {
        print!("{}", self.buffer.borrow());
    }

    /// Snapshot of the buffer, for asserting on line ordering in tests.
    pub fn contents(&self) -> String {
        self.buffer.borrow().clone()
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.borrow().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDateTime;

    #[test]
    fn test_starts_empty() {
        let logger = BufferedLogger::new();
        assert!(logger.is_empty());
        assert_eq!(logger.contents(), "");
    }

    #[test]
    fn test_lines_append_in_order() {
        let logger = BufferedLogger::new();
        logger.log("first");
        logger.log("second");

        let contents = logger.contents();
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].ends_with(": first"));
        assert!(lines[1].ends_with(": second"));
    }

    #[test]
    fn test_lines_carry_parseable_timestamps() {
        let logger = BufferedLogger::new();
        logger.log("message with: a colon");

        let contents = logger.contents();
        let line = contents.lines().next().unwrap();
        let (timestamp, rest) = line.split_once(": ").unwrap();
        assert!(NaiveDateTime::parse_from_str(timestamp, TIMESTAMP_FORMAT).is_ok());
        assert_eq!(rest, "message with: a colon");
    }

    #[test]
    fn test_print_leaves_buffer_intact() {
        let logger = BufferedLogger::new();
        logger.log("kept");
        logger.print();
        assert!(logger.contents().contains("kept"));
    }
}
