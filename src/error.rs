//! Error enum
use std::fmt;
use std::path::PathBuf;

#[derive(Debug)]
pub enum Error {
    Io(std::io::Error),
    Csv(csv::Error),
    Http(reqwest::Error),
    Serde(serde_json::Error),
    /// An input file (master table, scraped sentences) does not exist.
    MissingFile(PathBuf),
    /// The master table has no header row.
    EmptyTable(PathBuf),
    /// A required column is absent from the header.
    /// `raw` and `normalized` are the header lists as found and as searched.
    MissingColumn {
        column: &'static str,
        raw: Vec<String>,
        normalized: Vec<String>,
    },
    /// The final (or checkpoint) rewrite of the table failed.
    Save {
        path: PathBuf,
        source: Box<Error>,
    },
    /// The scraper did not extract a single usable sentence.
    NoSentences,
    Custom(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "io error: {}", e),
            Error::Csv(e) => write!(f, "csv error: {}", e),
            Error::Http(e) => write!(f, "http error: {}", e),
            Error::Serde(e) => write!(f, "json error: {}", e),
            Error::MissingFile(p) => write!(f, "file not found: {:?}", p),
            Error::EmptyTable(p) => write!(f, "{:?} is empty (no header row)", p),
            Error::MissingColumn {
                column,
                raw,
                normalized,
            } => write!(
                f,
                "could not find column '{}'. headers found: {:?}, normalized: {:?}",
                column, raw, normalized
            ),
            Error::Save { path, source } => write!(
                f,
                "could not save {:?}: {}. Make sure the file is not open in another program (e.g. a spreadsheet editor)",
                path, source
            ),
            Error::NoSentences => write!(f, "no sentences were extracted"),
            Error::Custom(s) => write!(f, "{}", s),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(e) => Some(e),
            Error::Csv(e) => Some(e),
            Error::Http(e) => Some(e),
            Error::Serde(e) => Some(e),
            Error::Save { source, .. } => Some(source.as_ref()),
            _ => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Error {
        Error::Io(e)
    }
}

impl From<csv::Error> for Error {
    fn from(e: csv::Error) -> Error {
        Error::Csv(e)
    }
}

impl From<reqwest::Error> for Error {
    fn from(e: reqwest::Error) -> Error {
        Error::Http(e)
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Error {
        Error::Serde(e)
    }
}

impl From<String> for Error {
    fn from(s: String) -> Error {
        Error::Custom(s)
    }
}
