/*! Run configuration.

Every tool receives its configuration explicitly. Defaults match the layout of the dataset repository:

```text
<root>/
    metadata.csv
    kirundi_prompts_scraped.txt
```
!*/
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::manager::Ranking;

pub const TABLE_FILENAME: &str = "metadata.csv";
pub const SCRAPED_FILENAME: &str = "kirundi_prompts_scraped.txt";
pub const DEFAULT_DOMAIN: &str = "General";

/// Locations of the files a tool reads and writes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Paths {
    pub root: PathBuf,
    pub table: PathBuf,
    pub scraped: PathBuf,
}

impl Paths {
    /// Conventional layout under `root`.
    pub fn from_root(root: &Path) -> Self {
        Self {
            root: root.to_path_buf(),
            table: root.join(TABLE_FILENAME),
            scraped: root.join(SCRAPED_FILENAME),
        }
    }

    /// Resolves the dataset root from an optional command line argument.
    ///
    /// With no argument, the current directory is used, unless it is a `scripts` folder,
    /// in which case its parent is the root.
    pub fn resolve(arg: Option<&Path>, cwd: &Path) -> Self {
        match arg {
            Some(p) => Self::from_root(p),
            None => {
                let root = match (cwd.file_name(), cwd.parent()) {
                    (Some(name), Some(parent)) if name == "scripts" => parent,
                    _ => cwd,
                };
                Self::from_root(root)
            }
        }
    }
}

impl Default for Paths {
    fn default() -> Self {
        Self::from_root(Path::new("."))
    }
}

/// Web scraping parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScrapeConfig {
    pub urls: Vec<String>,
    /// inclusive lower bound on the number of words of a kept sentence
    pub min_words: usize,
    /// inclusive upper bound
    pub max_words: usize,
    pub user_agent: String,
}

impl Default for ScrapeConfig {
    fn default() -> Self {
        Self {
            urls: DEFAULT_URLS.iter().map(|u| u.to_string()).collect(),
            min_words: 4,
            max_words: 25,
            user_agent: "Mozilla/5.0".to_string(),
        }
    }
}

/// Dataset manager parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct ManagerConfig {
    pub source_lang: String,
    pub french_lang: String,
    pub english_lang: String,
    /// Save the table after this many successful translations.
    pub checkpoint_every: usize,
    /// Fixed pause between two provider calls.
    pub delay: Duration,
    pub default_domain: String,
    pub ranking: Ranking,
    /// Backfill `english_translation` from `french_translation`.
    pub english_backfill: bool,
    pub translator_endpoint: String,
}

impl Default for ManagerConfig {
    fn default() -> Self {
        Self {
            source_lang: "rn".to_string(),
            french_lang: "fr".to_string(),
            english_lang: "en".to_string(),
            checkpoint_every: 20,
            delay: Duration::from_millis(200),
            default_domain: DEFAULT_DOMAIN.to_string(),
            ranking: Ranking::ThreeLevel,
            english_backfill: true,
            translator_endpoint: crate::translate::GOOGLE_ENDPOINT.to_string(),
        }
    }
}

/// Kirundi Wikipedia pages used as sentence sources.
pub const DEFAULT_URLS: &[&str] = &[
    // main topics
    "https://rn.wikipedia.org/wiki/Uburundi",
    "https://rn.wikipedia.org/wiki/Ikirundi",
    "https://rn.wikipedia.org/wiki/Amateka_y%27Uburundi",
    "https://rn.wikipedia.org/wiki/Imana",
    "https://rn.wikipedia.org/wiki/Bibiliya",
    "https://rn.wikipedia.org/wiki/Ivyakozwe_n%27Intumwa",
    "https://rn.wikipedia.org/wiki/Yezu_Kristu",
    "https://rn.wikipedia.org/wiki/Afrika",
    // provinces and cities
    "https://rn.wikipedia.org/wiki/Bujumbura",
    "https://rn.wikipedia.org/wiki/Gitega",
    "https://rn.wikipedia.org/wiki/Intara_z%27Uburundi",
    "https://rn.wikipedia.org/wiki/Ngozi",
    "https://rn.wikipedia.org/wiki/Rumonge",
    "https://rn.wikipedia.org/wiki/Bururi",
    "https://rn.wikipedia.org/wiki/IProvense_ya_Mwaro",
    "https://rn.wikipedia.org/wiki/Kirundo",
    "https://rn.wikipedia.org/wiki/Muyinga",
    "https://rn.wikipedia.org/wiki/Ruyigi",
    "https://rn.wikipedia.org/wiki/Cankuzo",
    "https://rn.wikipedia.org/wiki/Karuzi",
    "https://rn.wikipedia.org/wiki/Muramvya",
    "https://rn.wikipedia.org/wiki/Bubanza",
    "https://rn.wikipedia.org/wiki/Cibitoke",
    "https://rn.wikipedia.org/wiki/Kayanza",
    "https://rn.wikipedia.org/wiki/Makamba",
    "https://rn.wikipedia.org/wiki/Rutana",
    // geography and culture
    "https://rn.wikipedia.org/wiki/Ikiyaga_Tanganyika",
    "https://rn.wikipedia.org/wiki/Abakuru_b%27igihugu_c%27_Uburundi",
    "https://rn.wikipedia.org/wiki/Ubutunzi",
    "https://rn.wikipedia.org/wiki/Indero",
    "https://rn.wikipedia.org/wiki/Uburimyi",
    "https://rn.wikipedia.org/wiki/Amateke",
];
