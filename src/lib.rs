pub mod cli;
pub mod config;
pub mod text;
pub mod collect;
pub mod clipboard;
pub mod app;

pub use app::{run, Deps, Stats};
pub use cli::Args;
pub use config::Config;
