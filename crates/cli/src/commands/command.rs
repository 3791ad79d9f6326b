use anyhow::{Context, Result};
use robot_runnables_core::SuiteRunner;
use tracing::debug;

use crate::utils::{parse_filepath_with_line, resolve_path};

/// Print the runner invocation for a line, or for the whole file
pub fn command_command(filepath_arg: &str, json: bool) -> Result<()> {
    let (filepath, line) = parse_filepath_with_line(filepath_arg);
    let path = resolve_path(&filepath)?;
    let runner = SuiteRunner::for_path(&path)
        .with_context(|| format!("Failed to load configuration for {}", path.display()))?;

    let command = match line {
        Some(line_num) => runner.command_at_line(&path, line_num as u32)?,
        None => runner
            .get_file_command(&path)?
            .ok_or_else(|| anyhow::anyhow!("No runnable section in {}", path.display()))?,
    };
    debug!("Command for {}: {:?}", filepath_arg, command);

    if json {
        println!("{}", serde_json::to_string_pretty(&command)?);
    } else {
        println!("{}", command.to_shell_command());
    }
    Ok(())
}
