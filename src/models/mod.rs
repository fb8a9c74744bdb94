pub mod catalog;
pub mod loader;

pub use catalog::*;
pub use loader::{parse_catalog_json_file, parse_catalog_json_str};
