use anyhow::Result;
use clap::Parser;
use env_logger::Env;
use glipper::clipboard::SystemClipboard;
use glipper::{config, run, Args, Deps};

fn main() -> Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    let args = Args::parse();
    let config_path = config::config_path();
    let clipboard = SystemClipboard;

    run(
        args,
        Deps {
            config_path: &config_path,
            clipboard: &clipboard,
        },
    )?;

    Ok(())
}
