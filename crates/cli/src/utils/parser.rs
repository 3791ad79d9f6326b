/// Split a `suite.robot:12` argument into the path and a 0-based line.
///
/// The suffix only counts as a line when it is all digits, so Windows drive
/// prefixes such as `C:suite.robot` stay part of the path.
pub fn parse_filepath_with_line(filepath_arg: &str) -> (String, Option<usize>) {
    let line_suffix = filepath_arg.rsplit_once(':').and_then(|(path, line)| {
        line.parse::<usize>()
            .ok()
            .map(|line| (path, line.saturating_sub(1)))
    });

    match line_suffix {
        Some((path, line)) => (path.to_string(), Some(line)),
        None => (filepath_arg.to_string(), None),
    }
}
