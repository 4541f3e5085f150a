use std::path::PathBuf;

use clap::Parser;

use crate::error::ImportError;

pub const DEFAULT_OUTPUT: &str = "cedict.sqlite3";

/// Convert a CEDICT text file into an SQLite lookup table.
#[derive(Parser, Debug)]
#[command(name = "cedict-txt2db", version, about, long_about = None)]
pub struct Args {
    /// CEDICT text file to import.
    pub input: PathBuf,

    /// Database file to (re)create.
    #[arg(short, long, env = "CEDICT_DB", default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub input: PathBuf,
    pub output: PathBuf,
}

impl Config {
    pub fn new(input: impl Into<PathBuf>, output: impl Into<PathBuf>) -> Self {
        Config {
            input: input.into(),
            output: output.into(),
        }
    }

    /// Builds the config from command-line arguments. A wrong argument count,
    /// `--help` and `--version` all come back as `ImportError::Usage`; the
    /// caller decides how to print them and which status to exit with.
    pub fn from_args<I, T>(args: I) -> Result<Self, ImportError>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        Args::try_parse_from(args)
            .map(Config::from)
            .map_err(ImportError::Usage)
    }
}

impl From<Args> for Config {
    fn from(args: Args) -> Self {
        Config::new(args.input, args.output)
    }
}
