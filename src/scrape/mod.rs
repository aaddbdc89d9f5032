/*! Sentence scraping

Builds the scraped-sentences file from a list of wiki pages:
each page is fetched, its paragraphs split into sentences, cleaned and filtered by word count.
The union of all pages is deduplicated and written sorted, one sentence per line.

A page that cannot be fetched is logged and skipped.
!*/
pub mod extract;

use std::collections::BTreeSet;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use log::{error, info, warn};
use reqwest::Url;

use crate::config::ScrapeConfig;
use crate::error::Error;
use crate::filtering::WordCount;

/// Provides the HTML of a page.
pub trait PageSource {
    fn fetch(&self, url: &Url) -> Result<String, Error>;
}

/// Fetches pages over HTTP.
pub struct HttpSource {
    client: reqwest::blocking::Client,
}

impl HttpSource {
    pub fn new(user_agent: &str) -> Result<Self, Error> {
        let client = reqwest::blocking::Client::builder()
            .user_agent(user_agent)
            .build()?;
        Ok(Self { client })
    }
}

impl PageSource for HttpSource {
    fn fetch(&self, url: &Url) -> Result<String, Error> {
        let body = self
            .client
            .get(url.clone())
            .send()?
            .error_for_status()?
            .text()?;
        Ok(body)
    }
}

/// Scrapes every configured page and returns the distinct sentences, sorted.
pub fn scrape<S: PageSource>(source: &S, config: &ScrapeConfig) -> BTreeSet<String> {
    let filter = WordCount::new(config.min_words, config.max_words);
    let mut sentences = BTreeSet::new();

    for link in &config.urls {
        info!("scraping {}", link);
        let url = match Url::parse(link) {
            Ok(url) => url,
            Err(e) => {
                error!("invalid url {}: {}", link, e);
                continue;
            }
        };

        let html = match source.fetch(&url) {
            Ok(html) => html,
            Err(e) => {
                error!("failed to process {}: {}", url, e);
                continue;
            }
        };

        match extract::article_text(&html) {
            Some(text) => {
                let before = sentences.len();
                sentences.extend(extract::sentences(&text, &filter));
                info!("{}: {} new sentences", url, sentences.len() - before);
            }
            None => warn!("{}: no article content", url),
        }
    }
    sentences
}

/// Writes sentences one per line.
pub fn write_sentences(dst: &Path, sentences: &BTreeSet<String>) -> Result<(), Error> {
    let mut out = BufWriter::new(File::create(dst)?);
    for sentence in sentences {
        writeln!(out, "{}", sentence)?;
    }
    out.flush()?;
    Ok(())
}

/// Scrapes and writes the result to `dst`. Returns the number of sentences written.
///
/// Fails with [Error::NoSentences] (and leaves `dst` untouched) if nothing was extracted.
pub fn scrape_to_file<S: PageSource>(
    source: &S,
    config: &ScrapeConfig,
    dst: &Path,
) -> Result<usize, Error> {
    let sentences = scrape(source, config);
    if sentences.is_empty() {
        return Err(Error::NoSentences);
    }
    info!("found {} unique, clean sentences", sentences.len());

    write_sentences(dst, &sentences)?;
    info!("saved all sentences to {:?}", dst);
    Ok(sentences.len())
}
