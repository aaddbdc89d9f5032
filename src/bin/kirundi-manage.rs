//! Runs the dataset manager over the master table and prints a progress report.
#[macro_use]
extern crate log;

use kirundi_dataset::cli;
use kirundi_dataset::config::ManagerConfig;
use kirundi_dataset::error::Error;
use kirundi_dataset::manager::Manager;
use kirundi_dataset::table::TableStore;
use kirundi_dataset::translate::GoogleTranslator;
use structopt::StructOpt;

fn main() -> Result<(), Error> {
    cli::init_logging();

    let opt = cli::Manage::from_args();
    debug!("cli args\n{:#?}", opt);

    let paths = cli::resolve_paths(opt.path)?;
    println!("Targeting metadata file: {}", paths.table.display());

    let config = ManagerConfig::default();
    let translator = GoogleTranslator::new(&config.translator_endpoint)?;
    let store = TableStore::new(&paths.table);

    let summary = match Manager::new(&config, translator).run(&store) {
        Ok(summary) => summary,
        Err(e) => {
            error!("{}", e);
            return Err(e);
        }
    };

    info!(
        "cleaned {} hints, {} french suggestions, {} english translations, {} domains filled",
        summary.cleaned,
        summary.french.translated,
        summary.english.as_ref().map(|e| e.translated).unwrap_or(0),
        summary.domains_filled
    );
    let failures: Vec<_> = summary.failures().collect();
    if !failures.is_empty() {
        warn!("{} failures (re-run to retry):", failures.len());
        for failure in failures {
            warn!("  {}", failure);
        }
    }

    println!("{}", summary.report);
    Ok(())
}
