// The table has no declared key; rowid is SQLite's implicit one.

diesel::table! {
    dict (rowid) {
        rowid -> Integer,
        trad -> Text,
        simp -> Text,
        pinyin -> Text,
        english -> Text,
    }
}
