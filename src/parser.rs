use lazy_static::lazy_static;
use regex::Regex;

use crate::data::models::DictEntry;
use crate::error::ImportError;

lazy_static! {
    // TRAD SIMP [PINYIN] /ENGLISH/ where ENGLISH may hold inner slashes
    static ref LINE_RE: Regex = Regex::new(r"^(.*?) (.*?) \[(.*?)\] ?/(.*)/\s*$").unwrap();
}

#[derive(Debug, PartialEq, Eq)]
pub enum Line<'a> {
    Blank,
    Comment,
    Data(&'a str),
}

impl<'a> Line<'a> {
    pub fn classify(line: &'a str) -> Self {
        if line.trim().is_empty() {
            Line::Blank
        } else if line.starts_with('#') {
            Line::Comment
        } else {
            Line::Data(line)
        }
    }
}

#[derive(Debug, Default)]
pub struct ParsedDictionary {
    pub entries: Vec<DictEntry>,
    /// Blank and comment lines.
    pub skipped: usize,
}

/// Extracts the four raw fields of a data line, or `None` if the line does
/// not have the expected shape.
pub fn parse_line(line: &str) -> Option<DictEntry> {
    let caps = LINE_RE.captures(line)?;
    Some(DictEntry {
        traditional: caps[1].to_string(),
        simplified: caps[2].to_string(),
        pinyin: caps[3].to_string(),
        english: caps[4].to_string(),
    })
}

/// Parses a whole dictionary file. The first malformed data line aborts the
/// parse.
pub fn parse_cedict(content: &str) -> Result<ParsedDictionary, ImportError> {
    let mut parsed = ParsedDictionary::default();

    for (idx, line) in content.lines().enumerate() {
        match Line::classify(line) {
            Line::Blank | Line::Comment => parsed.skipped += 1,
            Line::Data(data) => {
                let entry = parse_line(data).ok_or_else(|| ImportError::Parse {
                    line_no: idx + 1,
                    line: data.to_string(),
                })?;
                parsed.entries.push(entry);
            }
        }
    }

    log::debug!(
        "parsed {} entries, skipped {} blank or comment lines",
        parsed.entries.len(),
        parsed.skipped
    );
    Ok(parsed)
}
