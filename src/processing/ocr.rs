use base64::{engine::general_purpose::STANDARD, Engine as _};
use serde::{Deserialize, Serialize};

use crate::utils::{PassportError, Result};

/// Anything that can turn an image into recognized text.
pub trait OcrProvider {
    fn recognize(&self, image: &[u8]) -> Result<String>;
}

impl<F> OcrProvider for F
where
    F: Fn(&[u8]) -> Result<String>,
{
    fn recognize(&self, image: &[u8]) -> Result<String> {
        self(image)
    }
}

pub const DEFAULT_LANGUAGE_HINTS: [&str; 2] = ["en", "he"];

/// Remove a `data:<mime>;base64,` prefix as produced by browser file readers.
pub fn strip_data_url_prefix(data: &str) -> &str {
    if data.starts_with("data:") {
        if let Some((_, payload)) = data.split_once(',') {
            return payload;
        }
    }
    data
}

// Google Vision `images:annotate` request body
#[derive(Debug, Serialize)]
pub struct VisionRequest {
    requests: Vec<AnnotateImageRequest>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct AnnotateImageRequest {
    image: VisionImage,
    features: Vec<VisionFeature>,
    image_context: ImageContext,
}

#[derive(Debug, Serialize)]
struct VisionImage {
    content: String,
}

#[derive(Debug, Serialize)]
struct VisionFeature {
    #[serde(rename = "type")]
    feature_type: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ImageContext {
    language_hints: Vec<String>,
}

impl VisionRequest {
    /// Build a DOCUMENT_TEXT_DETECTION request for raw image bytes.
    pub fn document_text(image: &[u8], language_hints: &[&str]) -> Self {
        Self::from_base64(STANDARD.encode(image), language_hints)
    }

    /// Build a request from content that is already base64, with or without a
    /// data URL prefix.
    pub fn from_base64(content: impl AsRef<str>, language_hints: &[&str]) -> Self {
        VisionRequest {
            requests: vec![AnnotateImageRequest {
                image: VisionImage {
                    content: strip_data_url_prefix(content.as_ref()).to_string(),
                },
                features: vec![VisionFeature {
                    feature_type: "DOCUMENT_TEXT_DETECTION".to_string(),
                }],
                image_context: ImageContext {
                    language_hints: language_hints.iter().map(|h| h.to_string()).collect(),
                },
            }],
        }
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

// Google Vision `images:annotate` response, reduced to what the scanner reads
#[derive(Debug, Default, Deserialize)]
pub struct VisionResponse {
    #[serde(default)]
    responses: Vec<AnnotateImageResponse>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AnnotateImageResponse {
    full_text_annotation: Option<TextAnnotation>,
    error: Option<VisionStatus>,
}

#[derive(Debug, Deserialize)]
struct TextAnnotation {
    #[serde(default)]
    text: String,
}

#[derive(Debug, Deserialize)]
struct VisionStatus {
    #[serde(default)]
    code: i32,
    #[serde(default)]
    message: String,
}

impl VisionResponse {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Full recognized text of the first response, empty when absent.
    pub fn full_text(&self) -> &str {
        self.responses
            .first()
            .and_then(|r| r.full_text_annotation.as_ref())
            .map(|a| a.text.as_str())
            .unwrap_or("")
    }

    /// Like [`full_text`](Self::full_text) but surfaces a provider-reported error.
    pub fn into_text(self) -> Result<String> {
        let first = match self.responses.into_iter().next() {
            Some(first) => first,
            None => return Ok(String::new()),
        };
        if let Some(status) = first.error {
            return Err(PassportError::OcrError(format!(
                "Vision error {}: {}",
                status.code, status.message
            )));
        }
        Ok(first.full_text_annotation.map(|a| a.text).unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_data_url_prefix() {
        assert_eq!(strip_data_url_prefix("data:image/jpeg;base64,AAAA"), "AAAA");
        assert_eq!(strip_data_url_prefix("AAAA"), "AAAA");
        assert_eq!(strip_data_url_prefix("data:broken"), "data:broken");
    }

    #[test]
    fn test_request_body_shape() {
        let request = VisionRequest::document_text(b"img", &DEFAULT_LANGUAGE_HINTS);
        let value: serde_json::Value = serde_json::from_str(&request.to_json().unwrap()).unwrap();
        let first = &value["requests"][0];
        assert_eq!(first["image"]["content"], "aW1n");
        assert_eq!(first["features"][0]["type"], "DOCUMENT_TEXT_DETECTION");
        assert_eq!(first["imageContext"]["languageHints"], serde_json::json!(["en", "he"]));
    }

    #[test]
    fn test_request_from_data_url() {
        let request = VisionRequest::from_base64("data:image/png;base64,aW1n", &["en"]);
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["requests"][0]["image"]["content"], "aW1n");
    }

    #[test]
    fn test_response_text() {
        let json = r#"{"responses":[{"fullTextAnnotation":{"text":"LINE A\nLINE B\n","pages":[]}}]}"#;
        let response = VisionResponse::from_json(json).unwrap();
        assert_eq!(response.full_text(), "LINE A\nLINE B\n");
        assert_eq!(response.into_text().unwrap(), "LINE A\nLINE B\n");
    }

    #[test]
    fn test_response_without_text() {
        assert_eq!(VisionResponse::from_json("{}").unwrap().full_text(), "");
        assert_eq!(VisionResponse::from_json(r#"{"responses":[{}]}"#).unwrap().into_text().unwrap(), "");
    }

    #[test]
    fn test_response_error_is_surfaced() {
        let json = r#"{"responses":[{"error":{"code":7,"message":"billing disabled"}}]}"#;
        let response = VisionResponse::from_json(json).unwrap();
        assert_eq!(response.full_text(), "");
        assert!(matches!(response.into_text(), Err(PassportError::OcrError(_))));
    }

    #[test]
    fn test_malformed_json() {
        assert!(matches!(
            VisionResponse::from_json("not json"),
            Err(PassportError::InvalidOcrResponse(_))
        ));
    }

    #[test]
    fn test_closure_provider() {
        let provider = |image: &[u8]| -> Result<String> { Ok(format!("{} bytes", image.len())) };
        assert_eq!(provider.recognize(b"abc").unwrap(), "3 bytes");
    }
}
