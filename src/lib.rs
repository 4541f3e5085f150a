pub mod config;
pub mod data;
pub mod error;
pub mod import;
pub mod loader;
pub mod normalizer;
pub mod parser;
pub mod schema;
pub mod store;

pub use config::Config;
pub use error::ImportError;
pub use import::{run, ImportSummary};
