//! Reader for the UCD `EastAsianWidth.txt` data file.
//!
//! Each meaningful line has the shape `<cp>[..<cp>];<category>[ # comment]`.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::apperr::{Error, Result};

/// The `ea` property values defined by UAX #11.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Category {
    Ambiguous, // A
    Fullwidth, // F
    Halfwidth, // H
    Neutral,   // N
    Narrow,    // Na
    Wide,      // W
    /// Any value not listed above, as it appeared in the file.
    Unrecognized(String),
}

impl Category {
    pub fn from_token(token: &str) -> Self {
        match token {
            "A" => Category::Ambiguous,
            "F" => Category::Fullwidth,
            "H" => Category::Halfwidth,
            "N" => Category::Neutral,
            "Na" => Category::Narrow,
            "W" => Category::Wide,
            t => Category::Unrecognized(t.to_string()),
        }
    }

    /// Whether the character occupies two terminal columns.
    pub fn is_full_size(&self) -> bool {
        matches!(self, Category::Fullwidth | Category::Wide)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RangeRecord {
    pub start: u32,
    pub end: u32,
    pub category: Category,
}

/// Parses a single line. `line_number` is 1-based and only used for errors.
///
/// Returns `Ok(None)` for lines that are blank, comment-only, or lack a `;`.
pub fn parse_line(line: &str, line_number: usize) -> Result<Option<RangeRecord>> {
    let line = match line.find('#') {
        Some(i) => &line[..i],
        None => line,
    };
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }

    let Some((codepoints, category)) = line.split_once(';') else {
        return Ok(None);
    };

    let codepoints = codepoints.trim();
    let (start, end) = codepoints.split_once("..").unwrap_or((codepoints, codepoints));
    let start = parse_hex(start, line_number)?;
    let end = parse_hex(end, line_number)?;

    Ok(Some(RangeRecord { start, end, category: Category::from_token(category.trim()) }))
}

fn parse_hex(field: &str, line_number: usize) -> Result<u32> {
    let field = field.trim();
    u32::from_str_radix(field, 16).map_err(|err| Error::Parse {
        line: line_number,
        field: field.to_string(),
        err,
    })
}

/// Parses every line of `reader`, in order.
pub fn parse<R: BufRead>(reader: R) -> Result<Vec<RangeRecord>> {
    let mut records = Vec::new();
    for (i, line) in reader.lines().enumerate() {
        if let Some(record) = parse_line(&line?, i + 1)? {
            records.push(record);
        }
    }
    Ok(records)
}

pub fn parse_str(input: &str) -> Result<Vec<RangeRecord>> {
    parse(input.as_bytes())
}

pub fn parse_file(path: &Path) -> Result<Vec<RangeRecord>> {
    let file = File::open(path).map_err(|err| Error::from(err).with_path(path))?;
    parse(BufReader::new(file)).map_err(|err| err.with_path(path))
}
