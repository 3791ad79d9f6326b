use anyhow::{Context, Result};
use robot_runnables_core::{Config, config::CONFIG_FILE_NAMES};
use std::{env, path::PathBuf};
use tracing::info;

pub fn init_command(cwd: Option<&str>, force: bool) -> Result<()> {
    let project_root = if let Some(cwd) = cwd {
        PathBuf::from(cwd)
    } else {
        env::current_dir().context("Failed to get current directory")?
    };

    let project_root = project_root
        .canonicalize()
        .context("Failed to canonicalize project root")?;

    let config_path = project_root.join(CONFIG_FILE_NAMES[0]);
    if config_path.exists() && !force {
        println!("❌ Config already exists at: {}", config_path.display());
        println!("   Use --force to overwrite");
        return Ok(());
    }

    Config::default()
        .save_to_file(&config_path)
        .with_context(|| format!("Failed to write config to {}", config_path.display()))?;
    info!("Wrote default config to {}", config_path.display());

    println!("✅ Created config: {}", config_path.display());
    println!("\n📌 Edit 'runner' to change the command, extra_args, env or working_dir");
    println!("   and 'suite_extensions' to pick which files count as suites.");
    Ok(())
}
