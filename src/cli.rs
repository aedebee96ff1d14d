use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug, Clone)]
#[command(name = "glipper", version)]
#[command(about = "Glipper - utility for copying file contents to clipboard. Collects the text files under a directory into one annotated block, subject to a configurable size budget.")]
pub struct Args {
    /// Directory to collect files from (defaults to the current directory)
    pub path: Option<PathBuf>,

    /// Maximum clipboard size in bytes
    #[arg(short, long)]
    pub size: Option<usize>,

    /// Skip binary files (use --skip-binary=false to include placeholders)
    #[arg(long, num_args = 0..=1, require_equals = true, default_missing_value = "true")]
    pub skip_binary: Option<bool>,

    /// Skip hidden directories (use --skip-hidden=false to descend into them)
    #[arg(long, num_args = 0..=1, require_equals = true, default_missing_value = "true")]
    pub skip_hidden: Option<bool>,

    /// Write collected content to a file instead of the clipboard
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Print collected content to stdout instead of the clipboard
    #[arg(short, long)]
    pub no_clipboard: bool,
}
