use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Settings for one collection run, loaded from the config file and
/// optionally overridden by command-line flags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Maximum size of the collected output in bytes.
    pub max_clipboard_size: usize,
    /// Omit binary files entirely instead of emitting a placeholder line.
    pub skip_binary_files: bool,
    /// Do not descend into directories whose name starts with '.'.
    pub skip_hidden_dirs: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_clipboard_size: 64_000, // approximately 64 KB
            skip_binary_files: true,
            skip_hidden_dirs: true,
        }
    }
}

impl Config {
    /// Parse the key=value config format. Lines starting with '#' and blank
    /// lines are skipped; malformed lines, unknown keys and unparseable
    /// values are ignored so the corresponding default survives.
    pub fn parse(text: &str) -> Self {
        let mut config = Config::default();
        for line in text.lines() {
            if line.starts_with('#') || line.trim().is_empty() {
                continue;
            }
            let Some((key, value)) = line.split_once('=') else {
                continue;
            };
            let (key, value) = (key.trim(), value.trim());
            match key {
                "max_clipboard_size" => {
                    if let Ok(size) = value.parse() {
                        config.max_clipboard_size = size;
                    }
                }
                "skip_binary_files" => match value {
                    "true" => config.skip_binary_files = true,
                    "false" => config.skip_binary_files = false,
                    _ => {}
                },
                "skip_hidden_dirs" => match value {
                    "true" => config.skip_hidden_dirs = true,
                    "false" => config.skip_hidden_dirs = false,
                    _ => {}
                },
                _ => {}
            }
        }
        config
    }

    /// Read the config file at `path`, creating it with defaults when it does
    /// not exist yet. Never fails: an unreadable file falls back to defaults
    /// with a warning.
    pub fn load_or_create(path: &Path) -> Self {
        if !path.exists() {
            let config = Config::default();
            match config.save(path) {
                Ok(()) => println!("Created default configuration file at: {}", path.display()),
                Err(err) => log::warn!("Could not create config file: {err:#}"),
            }
            return config;
        }
        match fs::read_to_string(path) {
            Ok(text) => Config::parse(&text),
            Err(err) => {
                log::warn!("Error loading config file: {err}. Using default settings.");
                Config::default()
            }
        }
    }

    /// Write the config back out in the key=value format with a comment
    /// header.
    pub fn save(&self, path: &Path) -> Result<()> {
        let timestamp = chrono::Local::now().format("%Y-%m-%d %H:%M:%S");
        let mut out = String::new();
        out.push_str("# Glipper configuration file\n");
        out.push_str(&format!("# Generated: {timestamp}\n"));
        out.push_str("# Format: key=value\n\n");
        out.push_str(&format!("max_clipboard_size={}\n", self.max_clipboard_size));
        out.push_str(&format!("skip_binary_files={}\n", self.skip_binary_files));
        out.push_str(&format!("skip_hidden_dirs={}\n", self.skip_hidden_dirs));
        fs::write(path, out)
            .with_context(|| format!("Failed to write config file: {}", path.display()))
    }
}

/// Resolve where the config file lives: `~/.config/glipper/.glipper.conf`,
/// falling back to `~/.glipper.conf` when the directory cannot be created and
/// to the current directory when there is no home at all.
pub fn config_path() -> PathBuf {
    let Some(home) = dirs::home_dir() else {
        return PathBuf::from(".glipper.conf");
    };
    let config_dir = home.join(".config").join("glipper");
    if let Err(err) = fs::create_dir_all(&config_dir) {
        log::warn!(
            "Could not create config directory {}: {err}",
            config_dir.display()
        );
        return home.join(".glipper.conf");
    }
    config_dir.join(".glipper.conf")
}
