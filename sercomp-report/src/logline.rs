//! Log Line Format
//!
//! One measurement log line is `<timestamp>|<LEVEL>||<message>`. For data
//! lines the message is `<seriesName>:<sample1>:<sample2>:...`; boundary
//! messages are plain text containing the start/stop markers. This module
//! holds both directions of the wire format: the pure line classifier the
//! parser is built on, and the [`MeasurementLog`] writer the harness side
//! appends with.

use std::io::{self, Write};

use chrono::Local;
use thiserror::Error;

/// Marker opening the measurement window.
pub const START_MARKER: &str = "Starting measurements";

/// Marker closing the measurement window.
pub const STOP_MARKER: &str = "Stopping measurements";

/// Separator between the segments of a log entry.
pub const FIELD_SEPARATOR: char = '|';

/// Separator between the series name and its samples within the message.
pub const SAMPLE_SEPARATOR: char = ':';

/// Segment count a line must have to be treated as data.
const DATA_SEGMENTS: usize = 4;

// ─── Classifier ──────────────────────────────────────────────────────────────

/// Classification of one raw log line.
#[derive(Debug, Clone, PartialEq)]
pub enum LineKind {
    /// Boundary line opening the window.
    Start,
    /// Boundary line closing the window.
    Stop,
    /// A data line: series name plus raw samples.
    Data(DataLine),
    /// Anything else: blank lines, differently-shaped log entries.
    Ignored,
}

/// Name and samples extracted from one data line.
///
/// `samples` may be empty here; rejecting empty series is the reducer's
/// invariant, not the classifier's.
#[derive(Debug, Clone, PartialEq)]
pub struct DataLine {
    /// Raw (un-normalized) series name.
    pub name: String,
    /// Samples in log order.
    pub samples: Vec<f64>,
}

/// Errors classifying a single line.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LineError {
    /// A sample token on a data-shaped line did not parse as a number.
    #[error("sample {token:?} is not a number")]
    InvalidSample {
        /// The offending token, verbatim.
        token: String,
    },
}

/// Classify one raw log line.
///
/// Pure function. Marker containment wins over shape; after that, only
/// lines with exactly four `|`-separated segments are data, and everything
/// else is [`LineKind::Ignored`]. Classification fails only for data-shaped
/// lines carrying a malformed sample.
pub fn classify_line(line: &str) -> Result<LineKind, LineError> {
    if line.contains(START_MARKER) {
        return Ok(LineKind::Start);
    }
    if line.contains(STOP_MARKER) {
        return Ok(LineKind::Stop);
    }

    let segments: Vec<&str> = line.split(FIELD_SEPARATOR).collect();
    if segments.len() != DATA_SEGMENTS {
        return Ok(LineKind::Ignored);
    }

    let mut fields = segments[DATA_SEGMENTS - 1].split(SAMPLE_SEPARATOR);
    let name = fields.next().unwrap_or_default().to_string();

    let mut samples = Vec::new();
    for token in fields {
        let value: f64 = token.parse().map_err(|_| LineError::InvalidSample {
            token: token.to_string(),
        })?;
        samples.push(value);
    }

    Ok(LineKind::Data(DataLine { name, samples }))
}

// ─── Writer ──────────────────────────────────────────────────────────────────

/// Writer producing the exact wire format the parser consumes.
///
/// Lines are flushed as they are written, so a run that dies mid-suite
/// leaves a parseable prefix behind.
pub struct MeasurementLog<W: Write> {
    sink: W,
}

impl<W: Write> MeasurementLog<W> {
    /// Wrap a sink (typically an append-mode log file).
    pub fn new(sink: W) -> Self {
        Self { sink }
    }

    /// Write the window-opening boundary line.
    pub fn start(&mut self) -> io::Result<()> {
        self.write_line("INFO", START_MARKER)
    }

    /// Write one data line for a named series.
    ///
    /// `name` must not contain the field or sample separators; it would
    /// corrupt the line shape for every later reader.
    pub fn record(&mut self, name: &str, samples: &[f64]) -> io::Result<()> {
        debug_assert!(
            !name.contains(FIELD_SEPARATOR) && !name.contains(SAMPLE_SEPARATOR),
            "series name {name:?} contains a separator"
        );

        let mut message = String::from(name);
        for sample in samples {
            message.push(SAMPLE_SEPARATOR);
            message.push_str(&sample.to_string());
        }
        self.write_line("DEBUG", &message)
    }

    /// Write the window-closing boundary line.
    pub fn finish(&mut self) -> io::Result<()> {
        self.write_line("INFO", STOP_MARKER)
    }

    /// Consume the writer, handing back the sink.
    pub fn into_inner(self) -> W {
        self.sink
    }

    fn write_line(&mut self, level: &str, message: &str) -> io::Result<()> {
        let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S%.3f");
        writeln!(self.sink, "{}|{}||{}", timestamp, level, message)?;
        self.sink.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_markers() {
        assert_eq!(
            classify_line("2017-06-11 10:32:19.7302|INFO||Starting measurements"),
            Ok(LineKind::Start)
        );
        assert_eq!(
            classify_line("2017-06-11 10:35:02.0031|INFO||Stopping measurements"),
            Ok(LineKind::Stop)
        );
        // Containment is enough; the marker need not be a full message
        assert_eq!(
            classify_line("note: Starting measurements soon"),
            Ok(LineKind::Start)
        );
    }

    #[test]
    fn test_classify_data_line() {
        let kind = classify_line("ts|DEBUG||Json Serialization:1.5:2:3.25").unwrap();
        assert_eq!(
            kind,
            LineKind::Data(DataLine {
                name: "Json Serialization".to_string(),
                samples: vec![1.5, 2.0, 3.25],
            })
        );
    }

    #[test]
    fn test_classify_wrong_segment_count() {
        assert_eq!(classify_line(""), Ok(LineKind::Ignored));
        assert_eq!(classify_line("plain text"), Ok(LineKind::Ignored));
        assert_eq!(classify_line("a|b|c"), Ok(LineKind::Ignored));
        assert_eq!(classify_line("a|b|c|d|e"), Ok(LineKind::Ignored));
    }

    #[test]
    fn test_classify_bad_sample_is_an_error() {
        assert_eq!(
            classify_line("ts|DEBUG||Foo:1:bar:3"),
            Err(LineError::InvalidSample {
                token: "bar".to_string()
            })
        );
    }

    #[test]
    fn test_classify_message_without_samples() {
        // Data-shaped but sampleless; the reducer decides what to do with it
        let kind = classify_line("ts|DEBUG||just a note").unwrap();
        assert_eq!(
            kind,
            LineKind::Data(DataLine {
                name: "just a note".to_string(),
                samples: vec![],
            })
        );
    }

    #[test]
    fn test_writer_emits_classifiable_lines() {
        let mut log = MeasurementLog::new(Vec::new());
        log.start().unwrap();
        log.record("Json Serialization", &[10.0, 20.5, 30.0]).unwrap();
        log.finish().unwrap();

        let text = String::from_utf8(log.into_inner()).unwrap();
        let mut lines = text.lines();

        assert_eq!(classify_line(lines.next().unwrap()), Ok(LineKind::Start));
        assert_eq!(
            classify_line(lines.next().unwrap()),
            Ok(LineKind::Data(DataLine {
                name: "Json Serialization".to_string(),
                samples: vec![10.0, 20.5, 30.0],
            }))
        );
        assert_eq!(classify_line(lines.next().unwrap()), Ok(LineKind::Stop));
        assert_eq!(lines.next(), None);
    }

    #[test]
    fn test_writer_line_shape() {
        let mut log = MeasurementLog::new(Vec::new());
        log.record("Name", &[1.0]).unwrap();

        let text = String::from_utf8(log.into_inner()).unwrap();
        let line = text.lines().next().unwrap();
        let segments: Vec<&str> = line.split('|').collect();

        assert_eq!(segments.len(), 4);
        assert_eq!(segments[1], "DEBUG");
        assert_eq!(segments[2], "");
        assert_eq!(segments[3], "Name:1");
    }
}
