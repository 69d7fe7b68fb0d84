use crate::domain::model::Style;
use crate::domain::ports::TranslationApi;
use crate::utils::error::Result;
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use thiserror::Error;
use url::Url;

pub const DEFAULT_TRANSLATION_API_URL: &str = "https://api.funtranslations.com";

#[derive(Debug, Deserialize)]
struct TranslationResponse {
    contents: Option<TranslationContents>,
}

#[derive(Debug, Deserialize)]
struct TranslationContents {
    translated: Option<String>,
}

/// Reasons a translation attempt falls back to the original text.
#[derive(Error, Debug)]
enum TranslationFailure {
    #[error("invalid translation URL for style '{0}'")]
    Url(Style),

    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("upstream returned {0}")]
    Status(StatusCode),

    #[error("unparsable response: {0}")]
    Body(#[from] serde_json::Error),

    #[error("response has no translated text")]
    MissingText,
}

/// Rewording upstream client (funtranslations).
#[derive(Debug, Clone)]
pub struct FunTranslationsClient {
    client: Client,
    base_url: Url,
}

impl FunTranslationsClient {
    pub fn new(client: Client, base_url: &str) -> Result<Self> {
        Ok(Self {
            client,
            base_url: super::parse_base_url("translation_api_url", base_url)?,
        })
    }

    fn translate_url(&self, style: Style) -> Option<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .ok()?
            .pop_if_empty()
            .push("translate")
            .push(style.as_str());
        Some(url)
    }

    async fn request(&self, text: &str, style: Style) -> std::result::Result<String, TranslationFailure> {
        let url = self.translate_url(style).ok_or(TranslationFailure::Url(style))?;

        tracing::debug!("Making translation request to: {}", url);
        let response = self.client.post(url).form(&[("text", text)]).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(TranslationFailure::Status(status));
        }

        let body = response.text().await?;
        let parsed: TranslationResponse = serde_json::from_str(&body)?;

        parsed
            .contents
            .and_then(|c| c.translated)
            .ok_or(TranslationFailure::MissingText)
    }
}

#[async_trait]
impl TranslationApi for FunTranslationsClient {
    async fn translate(&self, text: &str, style: Style) -> String {
        match self.request(text, style).await {
            Ok(translated) => translated,
            Err(e) => {
                tracing::warn!("⚠️ {} translation unavailable, keeping original text: {}", style, e);
                text.to_string()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;

    fn client_for(base_url: &str) -> FunTranslationsClient {
        FunTranslationsClient::new(Client::new(), base_url).unwrap()
    }

    #[test]
    fn test_translate_url() {
        let client = client_for("https://api.funtranslations.com");
        assert_eq!(
            client.translate_url(Style::Yoda).unwrap().as_str(),
            "https://api.funtranslations.com/translate/yoda"
        );
        assert_eq!(
            client.translate_url(Style::Shakespeare).unwrap().as_str(),
            "https://api.funtranslations.com/translate/shakespeare"
        );
    }

    #[tokio::test]
    async fn test_translate_returns_translated_text() {
        let server = MockServer::start();
        let translate_mock = server.mock(|when, then| {
            when.method(POST)
                .path("/translate/yoda")
                .x_www_form_urlencoded_tuple("text", "It was created by a scientist.");
            then.status(200).json_body(serde_json::json!({
                "success": {"total": 1},
                "contents": {
                    "translated": "Created by a scientist, it was.",
                    "text": "It was created by a scientist.",
                    "translation": "yoda"
                }
            }));
        });

        let client = client_for(&server.base_url());
        let result = client
            .translate("It was created by a scientist.", Style::Yoda)
            .await;

        translate_mock.assert();
        assert_eq!(result, "Created by a scientist, it was.");
    }

    #[tokio::test]
    async fn test_translate_rate_limited_returns_original() {
        let server = MockServer::start();
        let translate_mock = server.mock(|when, then| {
            when.method(POST).path("/translate/yoda");
            then.status(429).json_body(serde_json::json!({
                "error": {"code": 429, "message": "Too Many Requests"}
            }));
        });

        let client = client_for(&server.base_url());
        let original = "This is the original text";
        let result = client.translate(original, Style::Yoda).await;

        translate_mock.assert();
        assert_eq!(result, original);
    }

    #[tokio::test]
    async fn test_translate_transport_failure_returns_original() {
        let client = client_for("http://127.0.0.1:1");
        let original = "  spacing\nkept exactly  ";

        let result = client.translate(original, Style::Shakespeare).await;

        assert_eq!(result.as_bytes(), original.as_bytes());
    }

    #[tokio::test]
    async fn test_translate_unparsable_body_returns_original() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(POST).path("/translate/shakespeare");
            then.status(200).body("not json at all");
        });

        let client = client_for(&server.base_url());
        let result = client.translate("Thou art", Style::Shakespeare).await;

        assert_eq!(result, "Thou art");
    }

    #[tokio::test]
    async fn test_translate_null_translation_returns_original() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(POST).path("/translate/shakespeare");
            then.status(200).json_body(serde_json::json!({
                "success": {"total": 1},
                "contents": {"translated": null, "text": "Hello", "translation": "shakespeare"}
            }));
        });

        let client = client_for(&server.base_url());
        assert_eq!(client.translate("Hello", Style::Shakespeare).await, "Hello");
    }

    #[tokio::test]
    async fn test_translate_missing_contents_returns_original() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(POST).path("/translate/yoda");
            then.status(200).json_body(serde_json::json!({"success": {"total": 0}}));
        });

        let client = client_for(&server.base_url());
        assert_eq!(client.translate("Hello", Style::Yoda).await, "Hello");
    }
}
