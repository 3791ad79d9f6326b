pub mod file;
pub mod parser;

pub use file::{find_suite_files, resolve_path};
pub use parser::parse_filepath_with_line;
