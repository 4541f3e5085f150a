use diesel::prelude::*;

use crate::data::models::{DictEntry, NewDictRow};
use crate::schema::dict;

const CREATE_TABLE_SQL: &str = "CREATE TABLE dict (
    trad    VARCHAR(50)  NOT NULL,
    simp    VARCHAR(50)  NOT NULL,
    pinyin  VARCHAR(100) NOT NULL,
    english VARCHAR(500) NOT NULL)";

const INDEX_SQL: [&str; 2] = [
    "CREATE INDEX trad_index ON dict(trad)",
    "CREATE INDEX simp_index ON dict(simp)",
];

pub struct DictRepository;

impl DictRepository {
    pub fn create_table(conn: &mut SqliteConnection) -> Result<(), diesel::result::Error> {
        diesel::sql_query(CREATE_TABLE_SQL).execute(conn)?;
        Ok(())
    }

    pub fn clear(conn: &mut SqliteConnection) -> Result<usize, diesel::result::Error> {
        diesel::delete(dict::table).execute(conn)
    }

    /// Writes every entry inside a single transaction. Any failed insert rolls
    /// the whole batch back.
    pub fn insert_all(
        conn: &mut SqliteConnection,
        entries: &[DictEntry],
    ) -> Result<usize, diesel::result::Error> {
        conn.transaction::<_, diesel::result::Error, _>(|conn| {
            let mut inserted = 0;
            for entry in entries {
                let row = NewDictRow::from(entry);
                let oversized = row.oversized_columns();
                if !oversized.is_empty() {
                    log::warn!(
                        "entry {} exceeds legacy column bounds: {}",
                        entry.traditional,
                        oversized.join(", ")
                    );
                }
                inserted += diesel::insert_into(dict::table).values(&row).execute(conn)?;
            }
            Ok(inserted)
        })
    }

    pub fn create_indexes(conn: &mut SqliteConnection) -> Result<(), diesel::result::Error> {
        for sql in INDEX_SQL {
            diesel::sql_query(sql).execute(conn)?;
        }
        Ok(())
    }

    pub fn count(conn: &mut SqliteConnection) -> Result<i64, diesel::result::Error> {
        dict::table.count().get_result(conn)
    }
}
