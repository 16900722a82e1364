//! Command-line interface definitions.
//!
//! Defines all CLI arguments and subcommands using clap.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Site metadata provider CLI
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Config file path (default: site.toml)
    #[arg(short = 'C', long, default_value = "site.toml", global = true)]
    pub config: PathBuf,

    /// Base path the site is deployed under.
    ///
    /// Takes precedence over the `BASE_URL` environment variable and `[build].base_path`.
    ///
    /// Example: GitHub Pages project site (wayichao.github.io/running_page):
    ///   sitemeta --base-path /running_page/ show
    #[arg(long = "base-path", global = true)]
    pub base_path: Option<String>,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Output format for `show`
#[derive(ValueEnum, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Format {
    #[default]
    Json,
    Toml,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Print the resolved site metadata
    Show {
        /// Output format
        #[arg(short, long, value_enum, default_value_t = Format::Json)]
        format: Format,
    },

    /// Print head tags and the navigation fragment as HTML
    Head,

    /// Validate the config file
    Check,

    /// Write a starter config file with the built-in site data
    Init {
        /// Overwrite an existing config file
        #[arg(short, long)]
        force: bool,
    },
}
