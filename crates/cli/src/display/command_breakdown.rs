use robot_runnables_core::RunCommand;

/// Split a runner invocation into its parts for humans
pub fn print_command_breakdown(command: &RunCommand) {
    println!("   🔧 Command breakdown:");
    println!("      • command: {}", command.program);

    let mut selector = None;
    let mut extra_args = Vec::new();
    let mut target = None;

    let mut i = 0;
    while i < command.args.len() {
        let arg = &command.args[i];
        if (arg == "--test" || arg == "--task") && i + 1 < command.args.len() {
            selector = Some((arg.clone(), command.args[i + 1].clone()));
            i += 1;
        } else if i + 1 == command.args.len() {
            target = Some(arg.clone());
        } else {
            extra_args.push(arg.clone());
        }
        i += 1;
    }

    if let Some((flag, name)) = selector {
        println!("      • {}: {}", flag.trim_start_matches('-'), name);
    }
    if !extra_args.is_empty() {
        println!("      • extraArgs: {:?}", extra_args);
    }
    if let Some(target) = target {
        println!("      • suite: {}", target);
    }
    if let Some(ref dir) = command.working_dir {
        println!("      • workingDir: {}", dir.display());
    }
    if !command.env.is_empty() {
        println!("      • env:");
        for (key, value) in &command.env {
            println!("        - {}={}", key, value);
        }
    }
}
