use reqwest::blocking::Client;
use serde_json::Value;

use crate::core::VersemoodError;

const TRANSLATE_ENDPOINT: &str = "https://translate.googleapis.com/translate_a/single";
const SOURCE_LANG: &str = "auto";
const TARGET_LANG: &str = "en";

/// Boundary to the external translation service. The pipeline treats
/// any error as a signal to fall back to the untranslated text.
pub trait TranslationService {
    fn translate(&self, text: &str) -> Result<String, VersemoodError>;
}

/// Translates via the public Google endpoint with language
/// auto-detection. One attempt per request: no retry and no client
/// timeout, so a stalled service keeps the request open until it
/// errors or returns.
pub struct GoogleTranslator {
    client: Client,
}

impl GoogleTranslator {
    pub fn new() -> Result<Self, VersemoodError> {
        let client = Client::builder()
            .build()
            .map_err(|e| VersemoodError::Custom(format!("HTTP client build failed: {e}")))?;

        Ok(Self { client })
    }
}

impl TranslationService for GoogleTranslator {
    fn translate(&self, text: &str) -> Result<String, VersemoodError> {
        let response = self
            .client
            .get(TRANSLATE_ENDPOINT)
            .query(&[
                ("client", "gtx"),
                ("sl", SOURCE_LANG),
                ("tl", TARGET_LANG),
                ("dt", "t"),
                ("q", text),
            ])
            .send()?;

        if !response.status().is_success() {
            return Err(VersemoodError::Translation(format!(
                "HTTP {} from translation service",
                response.status()
            )));
        }

        let body: Value = serde_json::from_str(&response.text()?)?;
        parse_translation(&body)
    }
}

/// The endpoint answers with nested arrays; the first element holds the
/// translated segments as `[translated, original, ...]` tuples.
fn parse_translation(body: &Value) -> Result<String, VersemoodError> {
    let segments = body
        .get(0)
        .and_then(Value::as_array)
        .ok_or_else(|| VersemoodError::Translation("unexpected response shape".to_string()))?;

    let translated: String =
        segments.iter().filter_map(|seg| seg.get(0).and_then(Value::as_str)).collect();

    if translated.is_empty() {
        return Err(VersemoodError::Translation("empty translation in response".to_string()));
    }

    Ok(translated)
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::parse_translation;
    use crate::core::VersemoodError;

    #[test]
    fn concatenates_response_segments() {
        let body = json!([
            [
                ["I love you. ", "Te quiero. ", null],
                ["I miss you.", "Te extraño.", null]
            ],
            null,
            "es"
        ]);

        assert_eq!(parse_translation(&body).unwrap(), "I love you. I miss you.");
    }

    #[test]
    fn rejects_unexpected_shapes() {
        assert!(matches!(
            parse_translation(&json!({"error": "quota"})),
            Err(VersemoodError::Translation(_))
        ));
        assert!(matches!(
            parse_translation(&json!([[]])),
            Err(VersemoodError::Translation(_))
        ));
    }
}
