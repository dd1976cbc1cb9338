//! # Change Sinks
//!
//! Downstream collaborators that receive the run report. Writing to a
//! dashboard, a spreadsheet, or a notification channel is the sink's
//! business; the engine hands over one [`SyncReport`] per run.

use std::io::Write;

use thiserror::Error;

use crate::runner::SyncReport;

/// Errors raised while delivering a run report.
#[derive(Error, Debug)]
pub enum SinkError {
    /// I/O failure writing the report.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The report could not be serialized.
    #[error("report serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Backend-specific delivery failure.
    #[error("sink backend error: {0}")]
    Backend(String),
}

/// Downstream boundary: deliver the report of one sync run.
pub trait ChangeSink {
    /// Deliver the run report.
    fn report(&mut self, report: &SyncReport) -> Result<(), SinkError>;
}

/// A sink that emits the report as structured `tracing` events.
#[derive(Debug, Default)]
pub struct LogSink;

impl LogSink {
    /// Create a log sink.
    pub fn new() -> Self {
        Self
    }
}

impl ChangeSink for LogSink {
    fn report(&mut self, report: &SyncReport) -> Result<(), SinkError> {
        for change in &report.changes {
            tracing::info!(
                entity = %change.entity_id,
                kind = %change.kind,
                business = change.business_changed,
                full = change.full_changed,
                "drift detected"
            );
        }
        tracing::info!(
            run_id = %report.run_id,
            entities = report.entities_seen,
            changes = report.changes.len(),
            etag_hits = report.etag_hits,
            "sync report"
        );
        Ok(())
    }
}

/// A sink that writes the report as pretty-printed JSON to a writer.
#[derive(Debug)]
pub struct JsonWriterSink<W: Write> {
    writer: W,
}

impl<W: Write> JsonWriterSink<W> {
    /// Create a sink over the given writer.
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Consume the sink and return the writer.
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> ChangeSink for JsonWriterSink<W> {
    fn report(&mut self, report: &SyncReport) -> Result<(), SinkError> {
        serde_json::to_writer_pretty(&mut self.writer, report)?;
        self.writer.write_all(b"\n")?;
        Ok(())
    }
}
