//! Command-line flags
//!
//! Every flag is optional here; required values may also come from the config
//! file or the environment and are checked once all sources are merged.

use clap::{ArgAction, Parser};
use std::path::PathBuf;

#[derive(Debug, Default, Clone, Parser)]
#[command(name = "rax-notes-server", version, about = "Serve text notes over HTTP")]
#[command(disable_help_flag = true)]
pub struct CliArgs {
    /// Address to bind
    #[arg(short = 'h', long)]
    pub host: Option<String>,

    /// Port to bind
    #[arg(short = 'p', long)]
    pub port: Option<u16>,

    /// Directory holding the note files
    #[arg(short = 'c', long = "cache", visible_alias = "storage-dir")]
    pub storage_dir: Option<PathBuf>,

    /// TOML config file (defaults to ./notes.toml when present)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// HTML page served at /UploadForm.html
    #[arg(long)]
    pub upload_form: Option<PathBuf>,

    /// Number of HTTP worker threads
    #[arg(long)]
    pub workers: Option<usize>,

    /// Print help
    #[arg(long, action = ArgAction::Help)]
    pub help: Option<bool>,
}
