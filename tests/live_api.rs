//! Tests against the real DeepL and dictionaryapi.dev endpoints.
//!
//! Ignored by default to save API quota. Run with:
//! `DEEPL_API_KEY=your-key cargo test --test live_api -- --ignored`

use bmo_translator::{
    ApiConfiguration, Language, PronunciationService, TranslationError, TranslationService,
};

fn live_service() -> TranslationService {
    TranslationService::from_env().expect("DEEPL_API_KEY must be set for live tests")
}

#[tokio::test]
#[ignore]
async fn test_real_translation_danish_to_english() {
    let result = live_service()
        .translate("Hej verden", Language::Danish, Language::English)
        .await
        .unwrap();

    let lower = result.to_lowercase();
    assert!(lower.contains("hello") || lower.contains("world"), "got {:?}", result);
}

#[tokio::test]
#[ignore]
async fn test_real_translation_english_to_danish() {
    let result = live_service()
        .translate("Hello world", Language::English, Language::Danish)
        .await
        .unwrap();

    let lower = result.to_lowercase();
    assert!(lower.contains("hej") || lower.contains("verden"), "got {:?}", result);
}

#[tokio::test]
#[ignore]
async fn test_real_api_rejects_invalid_key() {
    let config = ApiConfiguration::default().with_api_key("invalid-key-12345");
    let service = TranslationService::with_http_client(&config).unwrap();

    let result = service.translate("Hej", Language::Danish, Language::English).await;

    assert_eq!(result, Err(TranslationError::InvalidApiKey));
}

#[tokio::test]
#[ignore]
async fn test_real_pronunciation_lookup() {
    let service = PronunciationService::with_http_client(&ApiConfiguration::default()).unwrap();

    let ipa = service.fetch_pronunciation("hello", Language::English).await;

    assert!(ipa.is_some_and(|ipa| !ipa.is_empty()));
}
