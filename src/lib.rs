/*! # Kirundi dataset tools

Tooling for the Kirundi speech/text dataset:

- [scrape] collects candidate sentences from Kirundi Wikipedia pages,
- [append] merges them into the master table (`metadata.csv`) without duplicates,
- [manager] fills machine translation hints and default metadata, sorts the table by completeness and reports progress.

Each tool has its own binary (`kirundi-scrape`, `kirundi-append`, `kirundi-manage`).
!*/
pub mod append;
pub mod cli;
pub mod config;
pub mod error;
pub mod filtering;
pub mod manager;
pub mod normalize;
pub mod record;
pub mod scrape;
pub mod table;
pub mod translate;
