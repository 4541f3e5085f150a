pub mod dict_models;
pub mod parser;

pub use dict_models::NewDictRow;
pub use parser::DictEntry;
