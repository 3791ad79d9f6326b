use std::path::Path;
use tracing::debug;

use super::run_command::RunCommand;
use crate::{
    config::Config,
    types::{RunnableMarker, SectionKind},
};

/// Turns markers into runner invocations using the runner config
pub struct CommandBuilder<'a> {
    config: &'a Config,
}

impl<'a> CommandBuilder<'a> {
    pub fn new(config: &'a Config) -> Self {
        Self { config }
    }

    /// Run a single marker: a named case or task, or the whole file
    pub fn build(&self, marker: &RunnableMarker, file_path: &Path) -> RunCommand {
        let selector = marker.runnable_name.as_ref().map(|name| {
            let flag = match marker.section {
                SectionKind::Tasks => "--task",
                _ => "--test",
            };
            (flag, name.as_str())
        });
        self.assemble(selector, file_path)
    }

    /// Run every case in the file
    pub fn build_file(&self, file_path: &Path) -> RunCommand {
        self.assemble(None, file_path)
    }

    fn assemble(&self, selector: Option<(&str, &str)>, file_path: &Path) -> RunCommand {
        // `command` may carry leading arguments, e.g. "python -m robot"
        let mut words = self.config.runner_command().split_whitespace();
        let program = words.next().unwrap_or(crate::config::DEFAULT_RUNNER_COMMAND);
        let mut args: Vec<String> = words.map(str::to_string).collect();

        args.extend(self.config.runner.extra_args.iter().cloned());
        if let Some((flag, name)) = selector {
            args.push(flag.to_string());
            args.push(name.to_string());
        }
        args.push(file_path.display().to_string());

        let mut command = RunCommand::new(program, args);
        if let Some(dir) = &self.config.runner.working_dir {
            command = command.with_working_dir(dir.clone());
        }
        for (key, value) in &self.config.runner.env {
            command = command.with_env(key.clone(), value.clone());
        }

        debug!("Built command: {}", command.to_shell_command());
        command
    }
}
