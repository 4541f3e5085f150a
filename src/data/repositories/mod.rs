pub mod dict;

pub use dict::DictRepository;
