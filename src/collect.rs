use crate::config::Config;
use crate::text::is_text;
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;
use walkdir::{DirEntry, WalkDir};

/// Files larger than this are never included in the output.
pub const MAX_FILE_SIZE: u64 = 1024 * 1024; // 1 MiB

/// Appended once when the size budget cuts the collection short.
pub const SIZE_LIMIT_MARKER: &str = "## SIZE LIMIT REACHED\nRemaining files were not added.\n";

/// Result of one collection run.
pub struct Collected {
    /// The formatted buffer: header block followed by one entry per file.
    pub content: String,
    /// Number of text files whose content made it into the buffer.
    pub files: usize,
    /// True when the size budget stopped the walk early.
    pub truncated: bool,
}

/// Walk `root` depth-first and concatenate the contents of its text files
/// into one annotated buffer, bounded by `config.max_clipboard_size`.
///
/// Entries appear in lexicographic order per directory. Hidden directories
/// are pruned when configured, files over [`MAX_FILE_SIZE`] are skipped, and
/// unreadable files are skipped with a warning. A failure to walk the tree
/// itself (missing root, unreadable directory) is fatal.
pub fn collect_content(root: &Path, config: &Config) -> Result<Collected> {
    let timestamp = chrono::Local::now().format("%Y-%m-%d %H:%M:%S");
    let mut content = format!(
        "# GLIPPER OUTPUT\n# Generated: {}\n# Source: {}\n\n",
        timestamp,
        root.display()
    );
    let mut files = 0usize;
    let mut truncated = false;

    let skip_hidden = config.skip_hidden_dirs;
    let walker = WalkDir::new(root)
        .follow_links(false)
        .sort_by_file_name()
        .into_iter()
        // The root itself is never pruned; "." would otherwise count as hidden.
        .filter_entry(move |entry| entry.depth() == 0 || !skip_hidden || !is_hidden_dir(entry));

    for entry in walker {
        let entry =
            entry.with_context(|| format!("Failed to walk directory: {}", root.display()))?;
        if entry.file_type().is_dir() {
            continue;
        }

        let path = entry.path();
        let size = match entry.metadata() {
            Ok(metadata) => metadata.len(),
            Err(err) => {
                log::warn!("Failed to read metadata for '{}': {err}", path.display());
                continue;
            }
        };
        if size > MAX_FILE_SIZE {
            log::warn!(
                "Skipping large file: {} ({:.2} MB)",
                path.display(),
                size as f64 / (1024.0 * 1024.0)
            );
            continue;
        }

        let bytes = match fs::read(path) {
            Ok(bytes) => bytes,
            Err(err) => {
                log::warn!("Failed to read file '{}': {err}", path.display());
                continue;
            }
        };

        let text_file = is_text(&bytes);
        if !text_file && config.skip_binary_files {
            continue;
        }
        let rel = display_path(path, root);
        let entry_text = if text_file {
            format!(
                "## File: {}\n```\n{}\n```\n\n",
                rel,
                String::from_utf8_lossy(&bytes)
            )
        } else {
            format!("## File: {rel}\n(Binary file, content skipped)\n\n")
        };

        if content.len() + entry_text.len() > config.max_clipboard_size {
            if content.len() + SIZE_LIMIT_MARKER.len() <= config.max_clipboard_size {
                content.push_str(SIZE_LIMIT_MARKER);
            }
            truncated = true;
            break;
        }
        content.push_str(&entry_text);
        if text_file {
            files += 1;
        }
    }

    Ok(Collected {
        content,
        files,
        truncated,
    })
}

fn is_hidden_dir(entry: &DirEntry) -> bool {
    entry.file_type().is_dir() && entry.file_name().to_string_lossy().starts_with('.')
}

/// Path shown in the entry header: relative to the root, with the full path
/// as a fallback when relativization fails or is empty.
fn display_path(path: &Path, root: &Path) -> String {
    let rel = match path.strip_prefix(root) {
        Ok(rel) if !rel.as_os_str().is_empty() => rel,
        _ => path,
    };
    rel.to_string_lossy().replace('\\', "/")
}
