//! CLI module for xspfconv

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

pub mod commands;

#[derive(Parser, Debug)]
#[command(name = "xspfconv", about = "Convert URL lists to XSPF playlists")]
#[command(version, author)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// Options shared by every conversion command
#[derive(Args, Debug, Clone)]
pub struct ConvertArgs {
    /// Input file (reads stdin when omitted or "-")
    #[arg(value_name = "INPUT")]
    pub input: Option<PathBuf>,

    /// Playlist title, also used as the output filename
    #[arg(short, long)]
    pub title: Option<String>,

    /// Directory to write the playlist to (ignored with --stdout)
    #[arg(short, long, env = "XSPFCONV_OUTPUT_DIR")]
    pub output_dir: Option<PathBuf>,

    /// Print the playlist to stdout instead of writing a file
    #[arg(long)]
    pub stdout: bool,

    /// Line separator; \n, \r\n and \t escapes are understood
    #[arg(long, default_value = "\\n")]
    pub separator: String,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Convert a plain list of URLs, one per line
    Urls {
        #[command(flatten)]
        args: ConvertArgs,
    },

    /// Convert a JSON array of URLs and {url, title, artist, album} objects
    Json {
        #[command(flatten)]
        args: ConvertArgs,
    },

    /// Convert an aria2 input list, using `out=` options as titles
    Aria2 {
        #[command(flatten)]
        args: ConvertArgs,
    },

    /// Show or change stored defaults
    Config {
        /// Default playlist title
        #[arg(long)]
        title: Option<String>,

        /// Default output directory
        #[arg(long)]
        output_dir: Option<PathBuf>,

        /// Forget all stored defaults
        #[arg(long, conflicts_with_all = ["title", "output_dir"])]
        reset: bool,
    },

    /// Generate shell completions
    Completion {
        /// Shell to generate completions for
        shell: clap_complete::Shell,
    },
}
