//! Sitemeta - print and check the metadata of a running page site.

use anyhow::{Result, bail};
use clap::Parser;
use sitemeta::{
    SiteConfig, SiteMetadata,
    cli::{Cli, Commands, Format},
    init::new_config,
    init_metadata, log, render,
};

fn main() {
    if let Err(err) = run() {
        log!("error"; "{err:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    match &cli.command {
        Commands::Init { force } => new_config(&cli.config, *force),
        Commands::Check => check(&SiteConfig::load(&cli)?),
        Commands::Show { format } => {
            let meta = load_metadata(&cli)?;
            match format {
                Format::Json => println!("{}", render::to_json(meta)?),
                Format::Toml => print!("{}", render::to_toml(meta)?),
            }
            Ok(())
        }
        Commands::Head => {
            let meta = load_metadata(&cli)?;
            print!("{}{}", render::head_tags(meta), render::nav_html(meta));
            Ok(())
        }
    }
}

/// Resolve config and base path once, then install the process-wide value.
fn load_metadata(cli: &Cli) -> Result<&'static SiteMetadata> {
    let config = SiteConfig::load(cli)?;
    Ok(init_metadata(SiteMetadata::from_config(&config)?)?)
}

/// Validate the config file and report what it resolves to.
fn check(config: &SiteConfig) -> Result<()> {
    if !config.file_exists() {
        bail!("Config file `{}` not found.", config.config_path.display());
    }

    let meta = SiteMetadata::from_config(config)?;
    let base = config.base();
    if base.is_root() {
        log!("config"; "base path `{}` (domain root)", base.raw());
    } else {
        log!("config"; "base path `{}`", base.raw());
    }
    for link in meta.nav_links() {
        log!("check"; "{} -> {}", link.name(), link.url());
    }
    log!("check"; "{} is valid", config.config_path.display());
    Ok(())
}
