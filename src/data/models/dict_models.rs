use diesel::Insertable;

use crate::data::models::DictEntry;
use crate::schema::dict;

// Advisory column bounds from the legacy schema, in characters.
pub const TRAD_MAX_CHARS: usize = 50;
pub const SIMP_MAX_CHARS: usize = 50;
pub const PINYIN_MAX_CHARS: usize = 100;
pub const ENGLISH_MAX_CHARS: usize = 500;

#[derive(Insertable, Debug)]
#[diesel(table_name = dict)]
pub struct NewDictRow<'a> {
    pub trad: &'a str,
    pub simp: &'a str,
    pub pinyin: &'a str,
    pub english: &'a str,
}

impl<'a> From<&'a DictEntry> for NewDictRow<'a> {
    fn from(entry: &'a DictEntry) -> Self {
        NewDictRow {
            trad: &entry.traditional,
            simp: &entry.simplified,
            pinyin: &entry.pinyin,
            english: &entry.english,
        }
    }
}

impl NewDictRow<'_> {
    /// Names of the columns whose value is longer than the legacy bound.
    pub fn oversized_columns(&self) -> Vec<&'static str> {
        [
            ("trad", self.trad, TRAD_MAX_CHARS),
            ("simp", self.simp, SIMP_MAX_CHARS),
            ("pinyin", self.pinyin, PINYIN_MAX_CHARS),
            ("english", self.english, ENGLISH_MAX_CHARS),
        ]
        .into_iter()
        .filter(|(_, value, max)| value.chars().count() > *max)
        .map(|(name, _, _)| name)
        .collect()
    }
}
