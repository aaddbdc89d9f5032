//! Appends the scraped sentences to the master table.
#[macro_use]
extern crate log;

use kirundi_dataset::append;
use kirundi_dataset::cli;
use kirundi_dataset::error::Error;
use structopt::StructOpt;

fn main() -> Result<(), Error> {
    cli::init_logging();

    let opt = cli::Append::from_args();
    debug!("cli args\n{:#?}", opt);

    let paths = cli::resolve_paths(opt.path)?;
    match append::append_scraped(&paths) {
        Ok(outcome) => {
            info!("done: {} sentences added", outcome.added);
            Ok(())
        }
        Err(e) => {
            error!("{}", e);
            if let Error::MissingFile(p) = &e {
                if p == &paths.scraped {
                    error!("run kirundi-scrape first");
                }
            }
            Err(e)
        }
    }
}
