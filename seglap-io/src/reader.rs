use std::fmt::{self, Display};
use std::io::BufRead;
use std::path::Path;
use std::str::FromStr;

use log::debug;
use serde::{Deserialize, Serialize};

use seglap_core::models::RawRecord;

use crate::error::Result;
use crate::utils::get_dynamic_reader;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Delimiter {
    #[default]
    Tab,
    Comma,
}

impl Delimiter {
    pub fn as_char(self) -> char {
        match self {
            Delimiter::Tab => '\t',
            Delimiter::Comma => ',',
        }
    }

    pub fn as_byte(self) -> u8 {
        self.as_char() as u8
    }

    /// Guess the delimiter from a file name: comma for `.csv` (optionally
    /// gzip'd), tab for everything else.
    pub fn from_path(path: &Path) -> Self {
        let name = path
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or_default()
            .to_lowercase();
        let name = name.strip_suffix(".gz").unwrap_or(&name);

        if name.ends_with(".csv") {
            Delimiter::Comma
        } else {
            Delimiter::Tab
        }
    }
}

impl FromStr for Delimiter {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "tab" | "tsv" | "\\t" => Ok(Delimiter::Tab),
            "comma" | "csv" | "," => Ok(Delimiter::Comma),
            _ => Err(format!(
                "Invalid delimiter: {}. Valid options are 'tab' or 'comma'",
                s
            )),
        }
    }
}

impl Display for Delimiter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Delimiter::Tab => write!(f, "tab"),
            Delimiter::Comma => write!(f, "comma"),
        }
    }
}

///
/// How to split an input file into raw records.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReadOptions {
    pub delimiter: Delimiter,
    /// Skip the first non-comment line.
    pub has_header: bool,
    /// Lines starting with this character are ignored.
    pub comment: Option<char>,
}

impl Default for ReadOptions {
    fn default() -> Self {
        ReadOptions {
            delimiter: Delimiter::Tab,
            has_header: false,
            comment: Some('#'),
        }
    }
}

impl ReadOptions {
    /// Default options with the delimiter guessed from the file name.
    pub fn for_path(path: &Path) -> Self {
        ReadOptions {
            delimiter: Delimiter::from_path(path),
            ..Default::default()
        }
    }
}

///
/// Split delimited text into raw records.
///
/// Blank and comment lines are skipped. Each record keeps the line number it
/// was read from so parse errors point at the right place in the file. The
/// number of fields is not checked here.
///
/// # Arguments
/// - reader: the source to read from
/// - options: delimiter, header and comment handling
///
pub fn read_raw_records<R: BufRead>(reader: R, options: &ReadOptions) -> Result<Vec<RawRecord>> {
    let delimiter = options.delimiter.as_char();
    let mut header_pending = options.has_header;
    let mut records = Vec::new();

    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        let line = line.trim_end_matches('\r');

        if line.trim().is_empty() {
            continue;
        }
        if options.comment.is_some_and(|prefix| line.starts_with(prefix)) {
            continue;
        }
        if header_pending {
            header_pending = false;
            continue;
        }

        records.push(RawRecord::new(index + 1, line.split(delimiter)));
    }

    Ok(records)
}

///
/// Read raw records from a plain or gzip'd file.
///
pub fn read_raw_records_from_path<P: AsRef<Path>>(
    path: P,
    options: &ReadOptions,
) -> Result<Vec<RawRecord>> {
    let path = path.as_ref();
    let records = read_raw_records(get_dynamic_reader(path)?, options)?;
    debug!("Read {} records from {}", records.len(), path.display());
    Ok(records)
}
