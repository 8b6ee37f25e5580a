use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[clap(version, about)]
pub struct Args {
    /// Path to the site configuration
    #[clap(short, long, default_value = "config.toml")]
    pub config: PathBuf,

    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print every published post, newest first
    List,
    /// Print a single published post
    Show {
        slug: String,
        /// Render the body to HTML
        #[clap(long)]
        html: bool,
    },
    /// Render the blog index and every published post
    Build,
    /// Remove the output directory
    Clean,
    /// Build, then rebuild whenever watched files change
    Watch,
}
