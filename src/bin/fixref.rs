//! fixref CLI - in-place LaTeX cross-reference rewriting

#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use std::{fs, io, path::PathBuf};

#[cfg(feature = "cli")]
#[derive(Parser)]
#[command(name = "fixref")]
#[command(version)]
#[command(
    about = "Rewrites hypertarget/hyperlink markup in a generated LaTeX file into native label/ref cross-references",
    long_about = None
)]
struct Cli {
    /// LaTeX file to rewrite in place
    input: PathBuf,
}

#[cfg(feature = "cli")]
fn main() -> io::Result<()> {
    let cli = Cli::parse();

    // The transformed text is written back only after all passes have run,
    // so a panic mid-pass leaves the file on disk untouched.
    let input = fs::read_to_string(&cli.input)?;
    let output = fixref::fix_references(&input);
    fs::write(&cli.input, output)?;

    Ok(())
}

#[cfg(not(feature = "cli"))]
fn main() {
    eprintln!("CLI feature not enabled. Build with --features cli");
    eprintln!();
    eprintln!("Usage:");
    eprintln!("  cargo install fixref --features cli");
    eprintln!("  fixref <FILE>");
}
