use crate::cli::Args;
use crate::clipboard::ClipboardSink;
use crate::collect::collect_content;
use crate::config::Config;
use anyhow::{Context, Result};
use std::env;
use std::fs;
use std::path::Path;

/// Collaborators the run is wired with; tests substitute their own.
pub struct Deps<'a> {
    pub config_path: &'a Path,
    pub clipboard: &'a dyn ClipboardSink,
}

#[derive(Debug)]
pub struct Stats {
    pub files: usize,
    pub bytes: usize,
}

/// One full run: load and persist config, collect the tree, hand the buffer
/// to the selected sink.
pub fn run(args: Args, deps: Deps) -> Result<Stats> {
    let mut config = Config::load_or_create(deps.config_path);
    if let Some(size) = args.size {
        config.max_clipboard_size = size;
    }
    if let Some(skip) = args.skip_binary {
        config.skip_binary_files = skip;
    }
    if let Some(skip) = args.skip_hidden {
        config.skip_hidden_dirs = skip;
    }
    if let Err(err) = config.save(deps.config_path) {
        log::warn!("Could not save configuration: {err:#}");
    }

    let root = match args.path {
        Some(path) => path,
        None => {
            println!("Path not specified. Using current directory.");
            env::current_dir().context("Failed to get current directory")?
        }
    };

    let use_clipboard = !args.no_clipboard && args.output.is_none();
    if use_clipboard {
        println!("Copying {} to clipboard", root.display());
    }

    let collected = collect_content(&root, &config)
        .with_context(|| format!("Error processing directory '{}'", root.display()))?;

    println!("Collected content size: {} bytes", collected.content.len());
    if collected.truncated {
        println!("Size limit reached; remaining files were omitted.");
    }
    println!("Total processed files: {}", collected.files);

    let stats = Stats {
        files: collected.files,
        bytes: collected.content.len(),
    };

    if let Some(output) = &args.output {
        fs::write(output, &collected.content)
            .with_context(|| format!("Failed to create output file: {}", output.display()))?;
        println!("Output written to {}", output.display());
    } else if args.no_clipboard {
        print!("{}", collected.content);
    } else {
        println!("Writing to clipboard...");
        deps.clipboard
            .set_text(collected.content)
            .context("Error writing to clipboard")?;
        println!("All files have been copied to clipboard");
    }

    Ok(stats)
}
