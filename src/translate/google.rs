//! Google Translate web endpoint client.
//!
//! Uses the keyless `translate_a/single` endpoint, the one used by browser extensions.
//! The response is a nested JSON array whose first element holds the translated segments:
//!
//! ```text
//! [[["Bonjour","Amahoro",null,null,10]],null,"rn",...]
//! ```
use std::time::Duration;

use log::debug;
use serde_json::Value;

use super::{TranslateError, Translator};
use crate::error::Error;

pub const GOOGLE_ENDPOINT: &str = "https://translate.googleapis.com/translate_a/single";

pub struct GoogleTranslator {
    endpoint: String,
    client: reqwest::blocking::Client,
}

impl GoogleTranslator {
    pub fn new(endpoint: &str) -> Result<Self, Error> {
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()?;
        Ok(Self {
            endpoint: endpoint.to_string(),
            client,
        })
    }
}

/// Concatenates the translated segments of a response.
fn parse_response(body: &str) -> Result<String, TranslateError> {
    let value: Value = serde_json::from_str(body)?;
    let segments = value
        .get(0)
        .and_then(Value::as_array)
        .ok_or_else(|| TranslateError::Parse("missing segment list".to_string()))?;

    let translation: String = segments
        .iter()
        .filter_map(|segment| segment.get(0).and_then(Value::as_str))
        .collect();

    let translation = translation.trim();
    if translation.is_empty() {
        return Err(TranslateError::Empty);
    }
    Ok(translation.to_string())
}

impl Translator for GoogleTranslator {
    fn translate(&self, text: &str, source: &str, target: &str) -> Result<String, TranslateError> {
        debug!("translating {:?} ({} -> {})", text, source, target);
        let body = self
            .client
            .get(&self.endpoint)
            .query(&[
                ("client", "gtx"),
                ("sl", source),
                ("tl", target),
                ("dt", "t"),
                ("q", text),
            ])
            .send()?
            .error_for_status()?
            .text()?;

        parse_response(&body)
    }
}
