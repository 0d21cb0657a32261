//! ClientSort planner CLI.

use csort::commands::{plan_file, verify_files};
use csort::ModeName;

fn main() {
    csort::init_tracing();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        return;
    }

    let command = &args[1];

    match command.as_str() {
        "plan" => {
            let (files, mode) = parse_args(&args[2..]);
            let [path] = files.as_slice() else {
                eprintln!("Usage: csort plan <layout.toml> [--mode=<mode>]");
                std::process::exit(1);
            };
            plan_file(path, mode);
        }
        "verify" => {
            let (files, mode) = parse_args(&args[2..]);
            if files.is_empty() {
                eprintln!("Usage: csort verify <layout.toml>... [--mode=<mode>]");
                std::process::exit(1);
            }
            if !verify_files(&files, mode) {
                std::process::exit(1);
            }
        }
        "help" | "--help" | "-h" => {
            print_usage();
        }
        "version" | "--version" | "-V" => {
            println!("csort {}", env!("CARGO_PKG_VERSION"));
        }
        _ => {
            eprintln!("Unknown command: {command}");
            eprintln!();
            print_usage();
            std::process::exit(1);
        }
    }
}

/// Split arguments into file paths and a `--mode=` override.
fn parse_args(args: &[String]) -> (Vec<String>, Option<ModeName>) {
    let mut files = Vec::new();
    let mut mode = None;

    for arg in args {
        if let Some(name) = arg.strip_prefix("--mode=") {
            let Some(parsed) = ModeName::parse(name) else {
                eprintln!("error: unknown sort mode '{name}' (expected none, item or quantity)");
                std::process::exit(1);
            };
            mode = Some(parsed);
        } else if arg.starts_with('-') {
            eprintln!("error: unknown option '{arg}'");
            std::process::exit(1);
        } else {
            files.push(arg.clone());
        }
    }

    (files, mode)
}

fn print_usage() {
    println!("ClientSort planner - plan inventory sorts as slot pickups");
    println!();
    println!("Usage: csort <command> [options]");
    println!();
    println!("Commands:");
    println!("  plan <layout.toml>       Print the pickups that sort a layout");
    println!("  verify <layout.toml>...  Replay each layout's plan and check the result");
    println!("  help                     Show this help message");
    println!("  version                  Show version information");
    println!();
    println!("Options:");
    println!("  --mode=<mode>            Sort mode: none, item, quantity (default: the layout's)");
    println!();
    println!("Environment:");
    println!("  RUST_LOG                 Log filter, e.g. RUST_LOG=csort_plan=trace");
    println!("  CSORT_LOG_TREE           Render logs as an indented tree");
}
