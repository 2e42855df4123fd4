//! Display drivers.
//!
//! The interpreter never touches output directly; it produces
//! [`DisplayUpdate`](crate::calculator::DisplayUpdate)s that the widget
//! forwards to a [`DisplayDriver`] on one of two channels.

use std::io::Write;

use serde::{Deserialize, Serialize};

use crate::Result;

/// Receiver for the two display channels.
pub trait DisplayDriver {
    /// Show the buffer or a result.
    fn set_primary_text(&mut self, text: &str) -> Result<()>;

    /// Show the pending-operation label, or an empty string.
    fn set_operation_text(&mut self, text: &str) -> Result<()>;
}

/// How a terminal display writes its frames.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Serialize)]
struct Frame<'a> {
    primary: &'a str,
    operation: &'a str,
}

/// A display that keeps the current texts and writes them out on demand.
pub struct TerminalDisplay<W: Write> {
    writer: W,
    format: OutputFormat,
    show_operation: bool,
    primary: String,
    operation: String,
}

impl<W: Write> TerminalDisplay<W> {
    pub fn new(writer: W, format: OutputFormat, show_operation: bool) -> Self {
        Self {
            writer,
            format,
            show_operation,
            primary: String::new(),
            operation: String::new(),
        }
    }

    pub fn primary(&self) -> &str {
        &self.primary
    }

    pub fn operation(&self) -> &str {
        &self.operation
    }

    /// Write the current frame.
    ///
    /// Text frames put the operation label (when enabled and non-empty)
    /// before the primary value; JSON frames are one object per line.
    pub fn present(&mut self) -> Result<()> {
        match self.format {
            OutputFormat::Text => {
                if self.show_operation && !self.operation.is_empty() {
                    writeln!(self.writer, "{}  {}", self.operation, self.primary)?;
                } else {
                    writeln!(self.writer, "{}", self.primary)?;
                }
            }
            OutputFormat::Json => {
                let operation = if self.show_operation {
                    self.operation.as_str()
                } else {
                    ""
                };
                let frame = Frame {
                    primary: &self.primary,
                    operation,
                };
                serde_json::to_writer(&mut self.writer, &frame)?;
                writeln!(self.writer)?;
            }
        }
        self.writer.flush()?;
        Ok(())
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> DisplayDriver for TerminalDisplay<W> {
    fn set_primary_text(&mut self, text: &str) -> Result<()> {
        self.primary.clear();
        self.primary.push_str(text);
        Ok(())
    }

    fn set_operation_text(&mut self, text: &str) -> Result<()> {
        self.operation.clear();
        self.operation.push_str(text);
        Ok(())
    }
}

/// A call received by a [`RecordingDisplay`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DisplayCall {
    Primary(String),
    Operation(String),
}

/// A display that records every call, for tests and headless use.
#[derive(Clone, Debug, Default)]
pub struct RecordingDisplay {
    pub calls: Vec<DisplayCall>,
}

impl RecordingDisplay {
    pub fn new() -> Self {
        Self::default()
    }

    /// Latest primary text, if any was set.
    pub fn primary(&self) -> Option<&str> {
        self.calls.iter().rev().find_map(|call| match call {
            DisplayCall::Primary(text) => Some(text.as_str()),
            DisplayCall::Operation(_) => None,
        })
    }

    /// Latest operation label, if any was set.
    pub fn operation(&self) -> Option<&str> {
        self.calls.iter().rev().find_map(|call| match call {
            DisplayCall::Operation(text) => Some(text.as_str()),
            DisplayCall::Primary(_) => None,
        })
    }
}

impl DisplayDriver for RecordingDisplay {
    fn set_primary_text(&mut self, text: &str) -> Result<()> {
        self.calls.push(DisplayCall::Primary(text.to_string()));
        Ok(())
    }

    fn set_operation_text(&mut self, text: &str) -> Result<()> {
        self.calls.push(DisplayCall::Operation(text.to_string()));
        Ok(())
    }
}
