use crate::config::Config;
use crate::error::ImportError;
use crate::loader;
use crate::normalizer;
use crate::parser;
use crate::store::Store;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportSummary {
    pub entries: usize,
    pub skipped_lines: usize,
}

/// Runs the whole import: load, parse, normalize, then rebuild the database.
///
/// The input is fully parsed before the output path is touched, so a missing
/// or malformed input leaves any previous database in place. A failure while
/// creating or filling the database removes the file again; an index failure
/// keeps the populated table.
pub fn run(config: &Config) -> Result<ImportSummary, ImportError> {
    println!("Load raw data...");
    let content = loader::load(&config.input)?;
    let parsed = parser::parse_cedict(&content)?;
    let entries: Vec<_> = parsed.entries.into_iter().map(normalizer::normalize).collect();

    println!("Create database...");
    let mut store = Store::create(&config.output)?;

    println!("Add data to database...");
    let written = match store.populate(&entries) {
        Ok(rows) => rows,
        Err(e) => {
            store.discard();
            return Err(e);
        }
    };
    log::debug!("{} rows committed to {}", written, store.path().display());

    println!("Create indices...");
    store.build_indexes()?;

    Ok(ImportSummary {
        entries: written,
        skipped_lines: parsed.skipped,
    })
}
