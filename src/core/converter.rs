//! Score converter: turns score text lines into [`Frame`]s and renders a [`Score`] as JSON.
//!
//! Parsing is lenient. Header, separator, comment and blank lines are ignored;
//! data lines with fewer than seven `|` fields are dropped without an error.
//! Nothing about a skipped line is reported apart from the counters in
//! [`ScoreExtract`].

use crate::core::decoder::decode_block;
use crate::domain::model::{Frame, Score, ScoreExtract};
use crate::utils::error::Result;
use serde::Serialize;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};

pub const FIELD_SEPARATOR: char = '|';
pub const FIELDS_PER_LINE: usize = 7;
pub const DEFAULT_INDENT: usize = 4;
pub const DEFAULT_IGNORED_PREFIXES: [&str; 3] = ["TIME", "=", "//"];

pub fn default_ignored_prefixes() -> Vec<String> {
    DEFAULT_IGNORED_PREFIXES
        .iter()
        .map(|p| p.to_string())
        .collect()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineKind {
    /// Blank, header, separator or comment.
    Ignored,
    /// Too few fields to form a frame.
    Malformed,
    Data(Frame),
}

/// Classify one raw input line.
pub fn classify_line<S: AsRef<str>>(line: &str, ignored_prefixes: &[S]) -> LineKind {
    let line = line.trim();
    if line.is_empty()
        || ignored_prefixes
            .iter()
            .any(|prefix| line.starts_with(prefix.as_ref()))
    {
        return LineKind::Ignored;
    }

    let fields: Vec<&str> = line.split(FIELD_SEPARATOR).map(str::trim).collect();
    if fields.len() < FIELDS_PER_LINE {
        return LineKind::Malformed;
    }

    LineKind::Data(Frame {
        timestamp: fields[0].to_string(),
        left_arm: decode_block(fields[1]),
        left_leg: decode_block(fields[2]),
        trunk: decode_block(fields[3]),
        right_leg: decode_block(fields[4]),
        right_arm: decode_block(fields[5]),
        head: decode_block(fields[6]),
    })
}

/// Split a `\n`-delimited line further on bare `\r`, so CR-only files still
/// yield one entry per line. A trailing `\r` does not start an extra line.
fn split_carriage_returns(line: &str) -> impl Iterator<Item = &str> {
    let pieces: Vec<&str> = if line.is_empty() {
        vec![line]
    } else {
        line.split_terminator('\r').collect()
    };
    pieces.into_iter()
}

#[derive(Debug, Clone)]
pub struct ScoreConverter {
    ignored_prefixes: Vec<String>,
}

impl Default for ScoreConverter {
    fn default() -> Self {
        Self::new(default_ignored_prefixes())
    }
}

impl ScoreConverter {
    pub fn new(ignored_prefixes: Vec<String>) -> Self {
        Self { ignored_prefixes }
    }

    pub fn parse_line(&self, line: &str) -> LineKind {
        classify_line(line, self.ignored_prefixes.as_slice())
    }

    /// Read `reader` line by line, in order, collecting one frame per data line.
    pub async fn read_score<R>(&self, reader: R) -> Result<ScoreExtract>
    where
        R: AsyncBufRead + Unpin,
    {
        let mut extract = ScoreExtract::default();
        let mut lines = reader.lines();

        while let Some(line) = lines.next_line().await? {
            for line in split_carriage_returns(&line) {
                extract.lines_read += 1;
                match self.parse_line(line) {
                    LineKind::Data(frame) => extract.score.push(frame),
                    LineKind::Ignored => extract.ignored_lines += 1,
                    LineKind::Malformed => {
                        tracing::trace!("Skipping line {}: too few fields", extract.lines_read);
                        extract.malformed_lines += 1;
                    }
                }
            }
        }

        Ok(extract)
    }

    /// Convenience for already-loaded text.
    pub fn parse_str(&self, text: &str) -> Score {
        text.lines()
            .flat_map(split_carriage_returns)
            .filter_map(|line| match self.parse_line(line) {
                LineKind::Data(frame) => Some(frame),
                _ => None,
            })
            .collect::<Vec<_>>()
            .into()
    }
}

/// Pretty-print `score` as a JSON array indented by `indent` spaces.
pub fn render_json(score: &Score, indent: usize) -> Result<Vec<u8>> {
    let indent = " ".repeat(indent);
    let formatter = serde_json::ser::PrettyFormatter::with_indent(indent.as_bytes());
    let mut buf = Vec::new();
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    score.serialize(&mut ser)?;
    Ok(buf)
}
