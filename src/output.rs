//! Console output for creation notices and the run summary

use std::io::{self, Write};
use std::path::Path;

use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

use crate::scaffold::Summary;

// The caller has already settled the color question (flags, NO_COLOR,
// TTY detection), so the stream must not second-guess it via `Auto`.
fn stream(use_color: bool) -> StandardStream {
    let choice = if use_color {
        ColorChoice::Always
    } else {
        ColorChoice::Never
    };
    StandardStream::stdout(choice)
}

/// Print a `Created: <path>` notice for one new file.
pub fn print_created(path: &Path, use_color: bool) -> io::Result<()> {
    let mut stdout = stream(use_color);
    stdout.set_color(ColorSpec::new().set_fg(Some(Color::Green)))?;
    write!(stdout, "Created")?;
    stdout.reset()?;
    writeln!(stdout, ": {}", path.display())
}

/// Print the final summary block.
pub fn print_summary(summary: &Summary, use_color: bool) -> io::Result<()> {
    let mut stdout = stream(use_color);
    writeln!(stdout)?;
    stdout.set_color(ColorSpec::new().set_bold(true))?;
    writeln!(stdout, "--- Summary ---")?;
    stdout.reset()?;
    writeln!(stdout, "Nodes processed: {}", summary.processed)?;
    writeln!(stdout, "Files created: {}", summary.created)?;
    writeln!(stdout, "Files skipped: {}", summary.skipped)?;
    if summary.failed > 0 {
        stdout.set_color(ColorSpec::new().set_fg(Some(Color::Red)))?;
        writeln!(stdout, "Files failed: {}", summary.failed)?;
        stdout.reset()?;
    }
    writeln!(stdout, "Done.")
}
