//! CLI entry point for sprout

use std::io::IsTerminal;
use std::path::PathBuf;
use std::process;

use clap::{Parser, ValueEnum};
use sprout::{load_tree, print_summary, scaffold};

/// Color output mode
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
enum ColorMode {
    /// Auto-detect based on terminal and environment
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// Determine whether to use color output based on mode and environment.
fn should_use_color(mode: ColorMode) -> bool {
    match mode {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => {
            // Respect NO_COLOR environment variable (https://no-color.org/)
            if std::env::var_os("NO_COLOR").is_some() {
                return false;
            }
            // Respect FORCE_COLOR environment variable
            if std::env::var_os("FORCE_COLOR").is_some() {
                return true;
            }
            // Respect TERM=dumb
            if std::env::var("TERM").map(|t| t == "dumb").unwrap_or(false) {
                return false;
            }
            // Check if stdout is a TTY
            std::io::stdout().is_terminal()
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "sprout")]
#[command(about = "Generate placeholder markdown description files from a JSON tree")]
#[command(version)]
struct Args {
    /// Path to the JSON tree file
    tree_file: PathBuf,

    /// Directory to create the markdown files in
    #[arg(
        short = 'o',
        long = "output-dir",
        default_value = "whip-docs/descriptions"
    )]
    output_dir: PathBuf,

    /// Control color output: auto, always, never
    #[arg(long = "color", value_name = "WHEN", default_value = "auto")]
    color: ColorMode,
}

fn main() {
    let args = Args::parse();

    let roots = match load_tree(&args.tree_file) {
        Ok(roots) => roots,
        Err(e) => {
            eprintln!("sprout: {}", e);
            process::exit(1);
        }
    };

    println!("Processing tree file: {}", args.tree_file.display());
    println!("Output directory: {}", args.output_dir.display());

    let use_color = should_use_color(args.color);
    let result = scaffold(&roots, &args.output_dir, use_color)
        .and_then(|summary| print_summary(&summary, use_color));

    if let Err(e) = result {
        eprintln!("sprout: error writing output: {}", e);
        process::exit(1);
    }
}
