//! Line-oriented input and output used by the draw controller.

use std::collections::VecDeque;
use std::io::{BufRead, Write};

use anchor_lang::prelude::*;

use crate::error::LottoError;

pub trait InputSource {
    /// Next raw line, without its line terminator.
    fn read_line(&mut self) -> Result<String>;
}

pub trait OutputSink {
    fn write_line(&mut self, line: &str) -> Result<()>;
}

/// Reads lines from any buffered reader, typically locked stdin.
pub struct ConsoleInput<B> {
    reader: B,
}

impl<B: BufRead> ConsoleInput<B> {
    pub fn new(reader: B) -> Self {
        Self { reader }
    }
}

impl<B: BufRead> InputSource for ConsoleInput<B> {
    fn read_line(&mut self) -> Result<String> {
        let mut line = String::new();
        let read = self
            .reader
            .read_line(&mut line)
            .map_err(|_| error!(LottoError::InputUnavailable))?;
        require!(read > 0, LottoError::InputUnavailable);
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }
}

/// Writes each line to a writer, typically stdout.
pub struct ConsoleOutput<W> {
    writer: W,
}

impl<W: Write> ConsoleOutput<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputSink for ConsoleOutput<W> {
    fn write_line(&mut self, line: &str) -> Result<()> {
        writeln!(self.writer, "{line}").map_err(|_| error!(LottoError::OutputUnavailable))?;
        self.writer
            .flush()
            .map_err(|_| error!(LottoError::OutputUnavailable))
    }
}

/// Scripted input, consumed front to back.
impl InputSource for VecDeque<String> {
    fn read_line(&mut self) -> Result<String> {
        self.pop_front()
            .ok_or_else(|| error!(LottoError::InputUnavailable))
    }
}

/// Captured transcript.
impl OutputSink for Vec<String> {
    fn write_line(&mut self, line: &str) -> Result<()> {
        self.push(line.to_string());
        Ok(())
    }
}
