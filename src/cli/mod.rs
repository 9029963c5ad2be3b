pub mod completions;
pub mod init;
pub mod locate;
pub mod merge;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// shadowpaste - Paste an icon onto the shadow of a base image
#[derive(Parser, Debug)]
#[command(name = "shadowpaste")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Config file (default: ./shadowpaste.yaml when present)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Suppress status output on stderr
    #[arg(long, short, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Paste an overlay onto a base image and write a PNG
    Merge(merge::MergeArgs),

    /// Print the shadow center of an image
    Locate(locate::LocateArgs),

    /// Write a starter shadowpaste.yaml
    Init(init::InitArgs),

    /// Generate shell completions
    Completions(completions::CompletionsArgs),
}
