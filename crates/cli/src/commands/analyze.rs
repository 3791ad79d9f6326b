use anyhow::{Context, Result};
use robot_runnables_core::{RunnableMarker, SuiteRunner};
use serde::Serialize;
use std::path::Path;
use tracing::debug;

use crate::display::{describe_file_kind, format_marker, format_merged_marker, print_command_breakdown};
use crate::utils::{find_suite_files, parse_filepath_with_line, resolve_path};

/// Markers of one suite found while walking a directory
#[derive(Debug, Serialize)]
pub struct SuiteReport {
    pub path: String,
    pub markers: Vec<RunnableMarker>,
}

pub fn analyze_command(filepath_arg: &str, verbose: bool, merged: bool, tree: bool) -> Result<()> {
    debug!("Analyzing: {}", filepath_arg);

    let (filepath, line) = parse_filepath_with_line(filepath_arg);
    let path = resolve_path(&filepath)?;
    let runner = SuiteRunner::for_path(&path)
        .with_context(|| format!("Failed to load configuration for {}", path.display()))?;

    if path.is_dir() {
        return analyze_directory(&runner, &path, verbose);
    }

    if tree {
        let document = runner.load_document(&path)?;
        print!("{}", document.dump_tree());
        return Ok(());
    }

    if verbose {
        // Show JSON output for verbose mode
        match line {
            Some(line_num) => {
                let marker = runner.detect_marker_at_line(&path, line_num as u32)?;
                println!("{}", serde_json::to_string_pretty(&marker)?);
            }
            None if merged => {
                println!("{}", serde_json::to_string_pretty(&runner.merged_markers(&path)?)?);
            }
            None => println!("{}", runner.analyze(&path)?),
        }
        return Ok(());
    }

    print_formatted_analysis(&runner, &filepath, &path, line, merged)
}

pub fn print_formatted_analysis(
    runner: &SuiteRunner,
    display_path: &str,
    path: &Path,
    line: Option<usize>,
    merged: bool,
) -> Result<()> {
    println!(
        "🔍 Analyzing: {}{}",
        display_path,
        line.map(|l| format!(":{}", l + 1)).unwrap_or_default()
    );
    println!("{}", "=".repeat(80));
    println!("   📦 Type: {}", describe_file_kind(path, runner.file_kind(path)));

    match runner.get_file_command(path)? {
        Some(cmd) => {
            println!("\n📄 File-level command:");
            print_command_breakdown(&cmd);
        }
        None => println!("\n📄 File-level command: None"),
    }

    if let Some(line_num) = line {
        match runner.detect_marker_at_line(path, line_num as u32)? {
            Some(marker) => {
                println!("\n✅ Runnable at line {}:\n", line_num + 1);
                println!("1. {}", format_marker(&marker));
                let command = runner.build_command(&marker, path);
                print_command_breakdown(&command);
                println!("\n🎯 Command to run:");
                println!("   {}", command.to_shell_command());
            }
            None => println!("\n❌ No runnable found at line {}.", line_num + 1),
        }
    } else if merged {
        let markers = runner.merged_markers(path)?;
        if markers.is_empty() {
            println!("\n❌ No runnables found in this file.");
        } else {
            println!("\n✅ Found {} gutter slot(s):\n", markers.len());
            for (i, marker) in markers.iter().enumerate() {
                println!("{}. {}", i + 1, format_merged_marker(marker));
            }
        }
    } else {
        let markers = runner.detect_markers(path)?;
        if markers.is_empty() {
            println!("\n❌ No runnables found in this file.");
        } else {
            println!("\n✅ Found {} runnable(s):\n", markers.len());
            for (i, marker) in markers.iter().enumerate() {
                println!("{}. {}", i + 1, format_marker(marker));
                println!(
                    "   🎯 {}",
                    runner.build_command(marker, path).to_shell_command()
                );
            }
        }
    }

    println!("\n{}", "=".repeat(80));
    Ok(())
}

fn analyze_directory(runner: &SuiteRunner, dir: &Path, verbose: bool) -> Result<()> {
    let suites = find_suite_files(dir, runner);
    debug!("Found {} suite file(s) under {}", suites.len(), dir.display());

    if verbose {
        let report = suites
            .iter()
            .map(|suite| {
                Ok(SuiteReport {
                    path: suite.display().to_string(),
                    markers: runner.detect_markers(suite)?,
                })
            })
            .collect::<Result<Vec<_>>>()?;
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("🔍 Analyzing directory: {}", dir.display());
    println!("{}", "=".repeat(80));
    if suites.is_empty() {
        println!("\n❌ No suite files found.");
    }
    for suite in &suites {
        let markers = runner.detect_markers(suite)?;
        let relative = suite.strip_prefix(dir).unwrap_or(suite);
        println!("\n📄 {} ({} runnable(s))", relative.display(), markers.len());
        for marker in &markers {
            println!("   • {}", format_marker(marker));
        }
    }
    println!("\n{}", "=".repeat(80));
    Ok(())
}
