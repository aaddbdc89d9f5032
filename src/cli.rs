//! Command line arguments and logging setup shared by the binaries.
use std::path::PathBuf;

use structopt::StructOpt;

use crate::config::Paths;
use crate::error::Error;

#[derive(Debug, StructOpt)]
#[structopt(
    name = "kirundi-scrape",
    about = "Scrape Kirundi sentences from Wikipedia into kirundi_prompts_scraped.txt"
)]
pub struct Scrape {
    #[structopt(
        parse(from_os_str),
        help = "dataset root (where the scraped sentences file is written). Default is the current directory"
    )]
    pub path: Option<PathBuf>,
}

#[derive(Debug, StructOpt)]
#[structopt(
    name = "kirundi-append",
    about = "Append new scraped sentences to metadata.csv"
)]
pub struct Append {
    #[structopt(
        parse(from_os_str),
        help = "dataset root (contains metadata.csv and kirundi_prompts_scraped.txt). Default is the current directory"
    )]
    pub path: Option<PathBuf>,
}

#[derive(Debug, StructOpt)]
#[structopt(
    name = "kirundi-manage",
    about = "Clean, translate, backfill and sort metadata.csv, then print a progress report"
)]
/// Dataset manager.
/// ```sh
/// USAGE:
///     kirundi-manage [path]
///
/// ARGS:
///     <path>    dataset root (contains metadata.csv). Default is the current directory,
///               or its parent when run from the `scripts` folder
/// ```
pub struct Manage {
    #[structopt(
        parse(from_os_str),
        help = "dataset root (contains metadata.csv). Default is the current directory"
    )]
    pub path: Option<PathBuf>,
}

/// Resolves dataset paths against the current directory.
pub fn resolve_paths(path: Option<PathBuf>) -> Result<Paths, Error> {
    let cwd = std::env::current_dir()?;
    Ok(Paths::resolve(path.as_deref(), &cwd))
}

/// Initializes `env_logger`, at `info` level unless `RUST_LOG` says otherwise.
pub fn init_logging() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
}
