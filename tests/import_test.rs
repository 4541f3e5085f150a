use std::fs;
use std::path::Path;

use anyhow::Result;
use cedict_txt2db::schema::dict;
use cedict_txt2db::{Config, ImportError, run};
use diesel::prelude::*;
use diesel::sql_types::Text;
use tempfile::TempDir;

const SAMPLE: &str = "\
# CC-CEDICT
# this is a comment

書 书 [shu1] /book/volume/
女 女 [nu:3] /woman/female/
綠 绿 [lu:4] /green/
行 行 [hang2] /row/line/
行 行 [xing2] /to walk/to go/
";

#[derive(QueryableByName)]
struct IndexName {
    #[diesel(sql_type = Text)]
    name: String,
}

fn setup(content: &str) -> Result<(TempDir, Config)> {
    let dir = tempfile::tempdir()?;
    let input = dir.path().join("cedict_ts.u8");
    fs::write(&input, content)?;
    let config = Config::new(input, dir.path().join("cedict.sqlite3"));
    Ok((dir, config))
}

fn connect(path: &Path) -> Result<SqliteConnection> {
    Ok(SqliteConnection::establish(path.to_str().unwrap())?)
}

fn rows(conn: &mut SqliteConnection) -> Result<Vec<(String, String, String, String)>> {
    Ok(dict::table
        .select((dict::trad, dict::simp, dict::pinyin, dict::english))
        .order(dict::rowid)
        .load(conn)?)
}

#[test]
fn imports_every_data_line() -> Result<()> {
    let (_dir, config) = setup(SAMPLE)?;

    let summary = run(&config)?;
    assert_eq!(summary.entries, 5);
    assert_eq!(summary.skipped_lines, 3);

    let mut conn = connect(&config.output)?;
    let rows = rows(&mut conn)?;
    assert_eq!(rows.len(), 5);
    assert_eq!(
        rows[0],
        ("書".into(), "书".into(), "shu1".into(), "book / volume".into())
    );
    assert_eq!(rows[1].2, "nv3");
    assert_eq!(rows[1].3, "woman / female");
    assert_eq!(rows[2].2, "lv4");
    Ok(())
}

#[test]
fn duplicate_headwords_are_kept() -> Result<()> {
    let (_dir, config) = setup(SAMPLE)?;
    run(&config)?;

    let mut conn = connect(&config.output)?;
    let walks: Vec<String> = dict::table
        .filter(dict::trad.eq("行"))
        .select(dict::pinyin)
        .order(dict::rowid)
        .load(&mut conn)?;
    assert_eq!(walks, vec!["hang2", "xing2"]);
    Ok(())
}

#[test]
fn builds_both_lookup_indexes() -> Result<()> {
    let (_dir, config) = setup(SAMPLE)?;
    run(&config)?;

    let mut conn = connect(&config.output)?;
    let mut names: Vec<String> = diesel::sql_query(
        "SELECT name FROM sqlite_master WHERE type = 'index' AND tbl_name = 'dict'",
    )
    .load::<IndexName>(&mut conn)?
    .into_iter()
    .map(|i| i.name)
    .collect();
    names.sort();
    assert_eq!(names, vec!["simp_index", "trad_index"]);
    Ok(())
}

#[test]
fn rerun_replaces_instead_of_appending() -> Result<()> {
    let (_dir, config) = setup(SAMPLE)?;
    run(&config)?;
    run(&config)?;

    let mut conn = connect(&config.output)?;
    let count: i64 = dict::table.count().get_result(&mut conn)?;
    assert_eq!(count, 5);
    Ok(())
}

#[test]
fn comments_and_blank_lines_only_give_empty_table() -> Result<()> {
    let (_dir, config) = setup("# this is a comment\n\n")?;

    let summary = run(&config)?;
    assert_eq!(summary.entries, 0);

    let mut conn = connect(&config.output)?;
    let count: i64 = dict::table.count().get_result(&mut conn)?;
    assert_eq!(count, 0);
    Ok(())
}

#[test]
fn malformed_line_aborts_without_touching_database() -> Result<()> {
    let (_dir, config) = setup(SAMPLE)?;
    run(&config)?;

    fs::write(&config.input, "書 书 [shu1] /book/\n壞 坏 [huai4] /bad\n")?;
    match run(&config) {
        Err(ImportError::Parse { line_no, .. }) => assert_eq!(line_no, 2),
        other => panic!("expected parse error, got {:?}", other),
    }

    // the previous import is still intact
    let mut conn = connect(&config.output)?;
    let count: i64 = dict::table.count().get_result(&mut conn)?;
    assert_eq!(count, 5);
    Ok(())
}

#[test]
fn missing_input_creates_no_database() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let config = Config::new(
        dir.path().join("absent.u8"),
        dir.path().join("cedict.sqlite3"),
    );

    let err = run(&config).unwrap_err();
    assert!(matches!(err, ImportError::Io { .. }));
    assert!(!config.output.exists());
    Ok(())
}

#[test]
fn unwritable_output_fails_init() -> Result<()> {
    let (dir, mut config) = setup(SAMPLE)?;
    config.output = dir.path().join("no_such_dir").join("cedict.sqlite3");

    let err = run(&config).unwrap_err();
    assert!(matches!(err, ImportError::StoreInit { .. }));
    assert!(!config.output.exists());
    Ok(())
}
