//! Scrapes Kirundi sentences into the scraped-sentences file.
#[macro_use]
extern crate log;

use kirundi_dataset::cli;
use kirundi_dataset::config::ScrapeConfig;
use kirundi_dataset::error::Error;
use kirundi_dataset::scrape::{self, HttpSource};
use structopt::StructOpt;

fn main() -> Result<(), Error> {
    cli::init_logging();

    let opt = cli::Scrape::from_args();
    debug!("cli args\n{:#?}", opt);

    let paths = cli::resolve_paths(opt.path)?;
    let config = ScrapeConfig::default();
    let source = HttpSource::new(&config.user_agent)?;

    if let Err(e) = scrape::scrape_to_file(&source, &config, &paths.scraped) {
        error!("{}", e);
        return Err(e);
    }
    Ok(())
}
