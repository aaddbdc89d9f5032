//! Dataset record.
/// Known columns of the master table.
///
/// Lookup names are lowercase: headers are trimmed and lowercased before matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    FilePath,
    KirundiTranscription,
    FrenchTranslation,
    EnglishTranslation,
    Domain,
    SpeakerId,
    Age,
    Gender,
    MachineSuggestion,
}

impl Field {
    pub const ALL: [Field; 9] = [
        Field::FilePath,
        Field::KirundiTranscription,
        Field::FrenchTranslation,
        Field::EnglishTranslation,
        Field::Domain,
        Field::SpeakerId,
        Field::Age,
        Field::Gender,
        Field::MachineSuggestion,
    ];

    /// lowercase name used for header matching
    pub fn key(&self) -> &'static str {
        match self {
            Field::FilePath => "file_path",
            Field::KirundiTranscription => "kirundi_transcription",
            Field::FrenchTranslation => "french_translation",
            Field::EnglishTranslation => "english_translation",
            Field::Domain => "domain",
            Field::SpeakerId => "speaker_id",
            Field::Age => "age",
            Field::Gender => "gender",
            Field::MachineSuggestion => "machine_suggestion",
        }
    }

    /// spelling used when the column has to be created
    pub fn header(&self) -> &'static str {
        match self {
            Field::FilePath => "File_Path",
            Field::KirundiTranscription => "Kirundi_Transcription",
            Field::FrenchTranslation => "French_Translation",
            Field::EnglishTranslation => "English_Translation",
            Field::Domain => "Domain",
            Field::SpeakerId => "Speaker_id",
            Field::Age => "Age",
            Field::Gender => "Gender",
            Field::MachineSuggestion => "Machine_Suggestion",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Field::ALL.iter().copied().find(|f| f.key() == key)
    }
}

/// One row of the master dataset.
///
/// `extra` holds values of columns the tools do not know about, in column order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Record {
    pub file_path: String,
    pub kirundi_transcription: String,
    pub french_translation: String,
    pub english_translation: String,
    pub domain: String,
    pub speaker_id: String,
    pub age: String,
    pub gender: String,
    pub machine_suggestion: String,
    pub extra: Vec<String>,
}

fn filled(s: &str) -> bool {
    !s.trim().is_empty()
}

impl Record {
    /// New record carrying only a transcription.
    pub fn from_transcription(text: &str) -> Self {
        Self {
            kirundi_transcription: text.to_string(),
            ..Default::default()
        }
    }

    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::FilePath => &self.file_path,
            Field::KirundiTranscription => &self.kirundi_transcription,
            Field::FrenchTranslation => &self.french_translation,
            Field::EnglishTranslation => &self.english_translation,
            Field::Domain => &self.domain,
            Field::SpeakerId => &self.speaker_id,
            Field::Age => &self.age,
            Field::Gender => &self.gender,
            Field::MachineSuggestion => &self.machine_suggestion,
        }
    }

    pub fn get_mut(&mut self, field: Field) -> &mut String {
        match field {
            Field::FilePath => &mut self.file_path,
            Field::KirundiTranscription => &mut self.kirundi_transcription,
            Field::FrenchTranslation => &mut self.french_translation,
            Field::EnglishTranslation => &mut self.english_translation,
            Field::Domain => &mut self.domain,
            Field::SpeakerId => &mut self.speaker_id,
            Field::Age => &mut self.age,
            Field::Gender => &mut self.gender,
            Field::MachineSuggestion => &mut self.machine_suggestion,
        }
    }

    /// `true` if `field` is non-empty after trimming.
    pub fn has(&self, field: Field) -> bool {
        filled(self.get(field))
    }

    pub fn has_french(&self) -> bool {
        self.has(Field::FrenchTranslation)
    }

    pub fn has_english(&self) -> bool {
        self.has(Field::EnglishTranslation)
    }

    pub fn has_domain(&self) -> bool {
        self.has(Field::Domain)
    }

    pub fn has_hint(&self) -> bool {
        self.has(Field::MachineSuggestion)
    }

    pub fn completeness(&self) -> Completeness {
        Completeness {
            french: self.has_french(),
            english: self.has_english(),
            domain: self.has_domain(),
        }
    }
}

/// The three predicates ranking and reporting are derived from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Completeness {
    pub french: bool,
    pub english: bool,
    pub domain: bool,
}

impl Completeness {
    /// number of satisfied predicates
    pub fn score(&self) -> usize {
        [self.french, self.english, self.domain]
            .iter()
            .filter(|p| **p)
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_is_empty() {
        let r = Record {
            kirundi_transcription: "Ego".to_string(),
            french_translation: "   ".to_string(),
            domain: "\t".to_string(),
            english_translation: "Yes".to_string(),
            ..Default::default()
        };
        assert!(!r.has_french());
        assert!(!r.has_domain());
        assert!(r.has_english());
        assert_eq!(r.completeness().score(), 1);
    }

    #[test]
    fn field_keys_roundtrip() {
        for f in Field::ALL {
            assert_eq!(Field::from_key(f.key()), Some(f));
            assert_eq!(f.header().to_lowercase(), f.key());
        }
        assert_eq!(Field::from_key("notes"), None);
    }

    #[test]
    fn from_transcription_only_sets_transcription() {
        let r = Record::from_transcription("Gira amahoro");
        assert_eq!(r.kirundi_transcription, "Gira amahoro");
        assert_eq!(r.completeness().score(), 0);
        assert!(!r.has_hint());
    }
}
