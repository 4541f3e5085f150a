use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use diesel::prelude::*;

use crate::data::models::DictEntry;
use crate::data::repositories::DictRepository;
use crate::error::ImportError;

/// The output database. Owns the file for the duration of an import: it is
/// deleted up front and rebuilt from scratch.
pub struct Store {
    path: PathBuf,
    conn: SqliteConnection,
}

impl Store {
    /// Replaces whatever is at `path` with a database holding an empty `dict`
    /// table.
    pub fn create(path: &Path) -> Result<Self, ImportError> {
        remove_existing(path)?;

        let url = path
            .to_str()
            .ok_or_else(|| ImportError::store_init(path, "path is not valid UTF-8"))?;
        let conn =
            SqliteConnection::establish(url).map_err(|e| ImportError::store_init(path, e))?;

        let mut store = Store {
            path: path.to_path_buf(),
            conn,
        };
        if let Err(e) = store.init_schema() {
            store.discard();
            return Err(e);
        }
        Ok(store)
    }

    fn init_schema(&mut self) -> Result<(), ImportError> {
        DictRepository::create_table(&mut self.conn)
            .map_err(|e| ImportError::store_init(&self.path, e))?;
        DictRepository::clear(&mut self.conn)
            .map_err(|e| ImportError::store_init(&self.path, e))?;
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn populate(&mut self, entries: &[DictEntry]) -> Result<usize, ImportError> {
        DictRepository::insert_all(&mut self.conn, entries).map_err(|source| {
            ImportError::StoreWrite {
                path: self.path.clone(),
                source,
            }
        })
    }

    pub fn build_indexes(&mut self) -> Result<(), ImportError> {
        DictRepository::create_indexes(&mut self.conn).map_err(|source| ImportError::StoreIndex {
            path: self.path.clone(),
            source,
        })
    }

    /// Closes the connection and deletes the half-built file.
    pub fn discard(self) {
        let Store { path, conn } = self;
        drop(conn);
        if let Err(e) = remove_existing(&path) {
            log::error!("could not remove {}: {}", path.display(), e);
        }
    }
}

fn remove_existing(path: &Path) -> Result<(), ImportError> {
    match fs::remove_file(path) {
        Ok(()) => {
            log::debug!("removed previous database {}", path.display());
            Ok(())
        }
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
        Err(e) => Err(ImportError::store_init(path, e)),
    }
}
