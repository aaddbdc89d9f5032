/*! Machine translation

The translation provider is abstracted behind [Translator].
A call either returns the translated text or a [TranslateError], which callers log and collect
without aborting the batch.

[GoogleTranslator] talks to the public Google Translate web endpoint.
!*/
mod google;

use std::fmt;

pub use google::{GoogleTranslator, GOOGLE_ENDPOINT};

/// Failure of a single translation request.
#[derive(Debug)]
pub enum TranslateError {
    Http(reqwest::Error),
    /// Provider answered with a non-success status code.
    Status(u16),
    /// Provider answered something we could not read a translation from.
    Parse(String),
    /// Provider returned an empty translation.
    Empty,
}

impl fmt::Display for TranslateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TranslateError::Http(e) => write!(f, "request failed: {}", e),
            TranslateError::Status(code) => write!(f, "provider answered with status {}", code),
            TranslateError::Parse(msg) => write!(f, "unreadable response: {}", msg),
            TranslateError::Empty => write!(f, "empty translation"),
        }
    }
}

impl std::error::Error for TranslateError {}

impl From<reqwest::Error> for TranslateError {
    fn from(e: reqwest::Error) -> Self {
        match e.status() {
            Some(status) => TranslateError::Status(status.as_u16()),
            None => TranslateError::Http(e),
        }
    }
}

impl From<serde_json::Error> for TranslateError {
    fn from(e: serde_json::Error) -> Self {
        TranslateError::Parse(e.to_string())
    }
}

/// Machine translation provider.
///
/// `source` and `target` are language codes (`rn`, `fr`, `en`...).
pub trait Translator {
    fn translate(&self, text: &str, source: &str, target: &str) -> Result<String, TranslateError>;
}

impl<T: Translator + ?Sized> Translator for &T {
    fn translate(&self, text: &str, source: &str, target: &str) -> Result<String, TranslateError> {
        (**self).translate(text, source, target)
    }
}

impl<T: Translator + ?Sized> Translator for Box<T> {
    fn translate(&self, text: &str, source: &str, target: &str) -> Result<String, TranslateError> {
        (**self).translate(text, source, target)
    }
}
