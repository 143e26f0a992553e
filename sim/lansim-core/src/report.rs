//! Sinks for the human-readable trace of a request.
//!
//! Reports are best effort. A failing sink never changes the outcome of the
//! request that is being described; the failure is logged and dropped.

use crate::logging::report_dropped_event;
use std::io::{self, Write};
use thiserror::Error as ThisError;

/// An append-only, line oriented sink.
pub trait Report {
    /// Appends `text` to the report.
    fn append(&mut self, text: &str) -> Result<(), ReportError>;
}

#[derive(Debug, ThisError)]
pub enum ReportError {
    #[error("Failed to write report: {0}")]
    Io(#[from] io::Error),
    #[error("The report was closed")]
    Closed,
}

impl Report for String {
    fn append(&mut self, text: &str) -> Result<(), ReportError> {
        self.push_str(text);
        Ok(())
    }
}

impl<R: Report + ?Sized> Report for &mut R {
    fn append(&mut self, text: &str) -> Result<(), ReportError> {
        (**self).append(text)
    }
}

/// Writes a report to any [`Write`] implementation, flushing after every
/// append.
#[derive(Debug)]
pub struct IoReport<W> {
    writer: W,
}

impl<W: Write> IoReport<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> Report for IoReport<W> {
    fn append(&mut self, text: &str) -> Result<(), ReportError> {
        self.writer.write_all(text.as_bytes())?;
        self.writer.flush()?;
        Ok(())
    }
}

/// A report that rejects every append. Counts how often it was written to.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct FailingReport {
    attempts: usize,
}

impl FailingReport {
    pub fn attempts(&self) -> usize {
        self.attempts
    }
}

impl Report for FailingReport {
    fn append(&mut self, _text: &str) -> Result<(), ReportError> {
        self.attempts += 1;
        Err(ReportError::Closed)
    }
}

/// Appends `text`, discarding any failure.
pub(crate) fn write_best_effort(report: &mut dyn Report, text: &str) {
    if let Err(error) = report.append(text) {
        report_dropped_event(&error);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn io_report_writes_through() {
        let mut report = IoReport::new(Vec::new());
        report.append("Broadcast Request\n").unwrap();
        report.append("done").unwrap();
        assert_eq!(report.into_inner(), b"Broadcast Request\ndone");
    }

    #[test]
    fn best_effort_swallows_failures() {
        let mut report = FailingReport::default();
        write_best_effort(&mut report, "lost");
        write_best_effort(&mut report, "lost again");
        assert_eq!(report.attempts(), 2);
    }

    #[test]
    fn io_errors_convert() {
        let error: ReportError = io::Error::new(io::ErrorKind::BrokenPipe, "pipe").into();
        assert!(matches!(error, ReportError::Io(_)));
    }

    struct BrokenPipe;

    impl Write for BrokenPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::ErrorKind::BrokenPipe.into())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn io_report_surfaces_writer_errors() {
        let mut report = IoReport::new(BrokenPipe);
        match report.append("Broadcast Request\n") {
            Err(ReportError::Io(error)) => assert_eq!(error.kind(), io::ErrorKind::BrokenPipe),
            other => panic!("unexpected result {other:?}"),
        }
    }
}
