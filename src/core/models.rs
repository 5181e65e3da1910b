//! Core data models for translation and pronunciation

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// Supported languages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Language {
    /// Danish (`DA`)
    #[serde(rename = "DA")]
    Danish,
    /// English (`EN`)
    #[serde(rename = "EN")]
    English,
}

impl Language {
    /// Two-letter code used on the wire by DeepL
    pub fn code(&self) -> &'static str {
        match self {
            Language::Danish => "DA",
            Language::English => "EN",
        }
    }

    /// The other side of the Danish/English pair
    pub fn opposite(&self) -> Self {
        match self {
            Language::Danish => Language::English,
            Language::English => Language::Danish,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Language::Danish => write!(f, "Danish"),
            Language::English => write!(f, "English"),
        }
    }
}

impl FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "da" | "danish" | "dansk" => Ok(Language::Danish),
            "en" | "english" | "engelsk" => Ok(Language::English),
            other => Err(format!("unsupported language: {other}")),
        }
    }
}

/// Translation request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslationRequest {
    /// Raw text; must not be empty
    pub text: String,
    /// Language of `text`
    pub source_language: Language,
    /// Language to translate into
    pub target_language: Language,
}

impl TranslationRequest {
    /// Create a request for `text`
    pub fn new(text: impl Into<String>, source_language: Language, target_language: Language) -> Self {
        Self {
            text: text.into(),
            source_language,
            target_language,
        }
    }

    /// Same text, languages exchanged
    pub fn swapped(self) -> Self {
        Self {
            text: self.text,
            source_language: self.target_language,
            target_language: self.source_language,
        }
    }

    /// Form fields sent to the translation endpoint
    pub fn form_body(&self) -> BTreeMap<String, String> {
        BTreeMap::from([
            ("text".to_string(), self.text.clone()),
            ("source_lang".to_string(), self.source_language.code().to_string()),
            ("target_lang".to_string(), self.target_language.code().to_string()),
        ])
    }
}

/// Translation result
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranslationResult {
    /// Text of the first translation candidate
    pub translated_text: String,
    /// Source language as detected by DeepL, when reported
    pub detected_source_language: Option<String>,
}

/// Response body of the DeepL translate endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeepLResponse {
    /// Candidates, best first
    #[serde(default)]
    pub translations: Vec<Translation>,
}

/// One translation candidate
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Translation {
    /// Translated text
    pub text: String,
    /// Wire code of the detected source language
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detected_source_language: Option<String>,
}

impl Translation {
    /// Candidate with no detected language
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            detected_source_language: None,
        }
    }

    /// Set the detected source language
    pub fn with_detected_language(mut self, language: impl Into<String>) -> Self {
        self.detected_source_language = Some(language.into());
        self
    }
}

/// One entry of a dictionaryapi.dev lookup
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DictionaryEntry {
    /// Headword as returned by the dictionary
    #[serde(default)]
    pub word: Option<String>,
    /// Transcriptions, in the dictionary's order
    #[serde(default)]
    pub phonetics: Option<Vec<Phonetic>>,
}

/// Phonetic transcription, with an optional audio sample
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Phonetic {
    /// IPA text, e.g. `/həˈləʊ/`
    #[serde(default)]
    pub text: Option<String>,
    /// URL of an audio recording
    #[serde(default)]
    pub audio: Option<String>,
}

impl DictionaryEntry {
    /// First non-empty transcription, in list order
    pub fn first_transcription(&self) -> Option<&str> {
        self.phonetics
            .as_deref()
            .unwrap_or_default()
            .iter()
            .filter_map(|p| p.text.as_deref())
            .find(|text| !text.is_empty())
    }
}
