//! CLI command definitions and handlers

use clap::{Args, Subcommand};
use std::io::Read;
use tracing::{debug, info};

use crate::core::client::TranslationService;
use crate::core::config::ApiConfiguration;
use crate::core::models::{Language, TranslationRequest};
use crate::core::pronunciation::PronunciationService;

/// Arguments of the default translate action
#[derive(Args, Debug, Clone, PartialEq, Eq)]
pub struct TranslateArgs {
    /// Text to translate (read from stdin when omitted)
    pub text: Vec<String>,

    /// Source language (da or en)
    #[arg(short, long, default_value = "da")]
    pub from: Language,

    /// Target language (defaults to the other language)
    #[arg(short, long)]
    pub to: Option<Language>,

    /// Exchange source and target languages
    #[arg(long)]
    pub swap: bool,

    /// Skip the IPA lookup for the translated text
    #[arg(long)]
    pub no_pronunciation: bool,
}

impl TranslateArgs {
    /// Request for `text` with the direction chosen on the command line
    pub fn request(&self, text: String) -> TranslationRequest {
        let to = self.to.unwrap_or_else(|| self.from.opposite());
        let request = TranslationRequest::new(text, self.from, to);
        if self.swap {
            request.swapped()
        } else {
            request
        }
    }
}

/// Commands besides the default translate action
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Look up the IPA pronunciation of an English word
    Pronounce {
        /// Word to look up; only the first word is used
        word: Vec<String>,
    },
}

/// Handle the translate action
///
/// Translates once and, on success, looks up the pronunciation of the
/// translated text in the target language.
pub async fn handle_translate(config: ApiConfiguration, args: TranslateArgs) -> anyhow::Result<()> {
    let request = args.request(input_text(args.text.clone())?);

    let translator = TranslationService::with_http_client(&config)?;
    info!("Translating {} -> {}", request.source_language, request.target_language);

    let result = translator.execute(&request).await?;

    let pronunciation = if args.no_pronunciation {
        None
    } else {
        pronounce_best_effort(&config, &result.translated_text, request.target_language).await
    };

    println!("{}", render_output(&result.translated_text, pronunciation.as_deref()));
    Ok(())
}

/// Handle the pronounce command
pub async fn handle_pronounce(config: ApiConfiguration, word: Vec<String>) -> anyhow::Result<()> {
    let word = input_text(word)?;
    let service = PronunciationService::with_http_client(&config)?;

    match service.fetch_pronunciation(&word, Language::English).await {
        Some(ipa) => println!("{}", ipa),
        None => {
            debug!("No pronunciation found for {:?}", word);
            anyhow::bail!("No pronunciation available");
        }
    }

    Ok(())
}

/// Pronunciation of `text`, or `None` when the lookup cannot even be set up
pub async fn pronounce_best_effort(
    config: &ApiConfiguration,
    text: &str,
    language: Language,
) -> Option<String> {
    match PronunciationService::with_http_client(config) {
        Ok(service) => service.fetch_pronunciation(text, language).await,
        Err(e) => {
            debug!("Pronunciation lookup unavailable: {}", e);
            None
        }
    }
}

/// Join positional words, falling back to stdin
fn input_text(words: Vec<String>) -> anyhow::Result<String> {
    if !words.is_empty() {
        return Ok(words.join(" "));
    }

    let mut buffer = String::new();
    std::io::stdin().read_to_string(&mut buffer)?;
    Ok(buffer.trim_end_matches(['\r', '\n']).to_string())
}

/// Translated text, followed by its pronunciation when one was found
pub fn render_output(translated: &str, pronunciation: Option<&str>) -> String {
    match pronunciation {
        Some(ipa) => format!("{}\n{}", translated, ipa),
        None => translated.to_string(),
    }
}
