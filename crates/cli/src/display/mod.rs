pub mod command_breakdown;
pub mod formatter;

pub use command_breakdown::print_command_breakdown;
pub use formatter::{describe_file_kind, format_marker, format_merged_marker};
