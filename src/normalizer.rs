use lazy_static::lazy_static;
use regex::Regex;

use crate::data::models::DictEntry;

lazy_static! {
    static ref SENSE_SEPARATOR_RE: Regex = Regex::new(r"\s*/\s*").unwrap();
}

/// `u:` is the ASCII spelling of ü; store it as `v`.
pub fn normalize_pinyin(pinyin: &str) -> String {
    pinyin.replace("u:", "v")
}

/// Spreads sense separators out to ` / `. Whitespace already around a slash
/// is absorbed, so normalized text comes back unchanged.
pub fn normalize_english(english: &str) -> String {
    SENSE_SEPARATOR_RE.replace_all(english, " / ").into_owned()
}

pub fn normalize(entry: DictEntry) -> DictEntry {
    DictEntry {
        pinyin: normalize_pinyin(&entry.pinyin),
        english: normalize_english(&entry.english),
        ..entry
    }
}
