/// One dictionary line, split into its four fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DictEntry {
    pub traditional: String,
    pub simplified: String,
    pub pinyin: String,
    pub english: String,
}
