//! Request/response boundary for page generation.
//!
//! A thin adapter over the synthesizer: accept a prompt plus optional
//! classification hints, return either a complete document or a uniform
//! failure. No partial results cross this boundary.

use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::content::GeneratedContent;
use crate::error::GenerationError;
use crate::generator::Synthesizer;
use crate::taxonomy::{BusinessType, Industry};

/// A page-generation request.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateRequest {
    /// Free-text product description.
    pub prompt: String,
    /// Optional industry hint; skips industry classification when set.
    #[serde(default)]
    pub industry: Option<Industry>,
    /// Optional business-type hint; skips that classification when set.
    #[serde(default)]
    pub business_type: Option<BusinessType>,
}

impl GenerateRequest {
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            industry: None,
            business_type: None,
        }
    }
}

/// The uniform response envelope: a full document on success, a single
/// error string on failure, never both.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<GeneratedContent>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl GenerateResponse {
    fn ok(data: GeneratedContent) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    fn failure(error: impl std::fmt::Display) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(error.to_string()),
        }
    }
}

/// Handles a typed request with a fresh thread-RNG synthesizer.
pub fn handle(request: &GenerateRequest) -> GenerateResponse {
    handle_with(&mut Synthesizer::new(), request)
}

/// Handles a typed request with a caller-supplied synthesizer.
///
/// Callers needing reproducible output pass a seeded synthesizer.
pub fn handle_with<R: Rng>(
    synthesizer: &mut Synthesizer<R>,
    request: &GenerateRequest,
) -> GenerateResponse {
    match generate(synthesizer, request) {
        Ok(content) => {
            info!(
                industry = %content.industry,
                business_type = %content.business_type,
                "generated page content"
            );
            GenerateResponse::ok(content)
        }
        Err(error) => {
            warn!(%error, "generation failed");
            GenerateResponse::failure(error)
        }
    }
}

/// Handles a raw JSON request body, folding parse failures into the
/// uniform failure envelope.
pub fn handle_json(raw: &str) -> String {
    let response = match serde_json::from_str::<GenerateRequest>(raw) {
        Ok(request) => handle(&request),
        Err(error) => GenerateResponse::failure(GenerationError::MalformedRequest(
            error.to_string(),
        )),
    };
    serde_json::to_string(&response).unwrap_or_else(|_| {
        // Envelope types cannot fail to serialize; answer anyway if one does.
        r#"{"success":false,"error":"response serialization failed"}"#.to_string()
    })
}

fn generate<R: Rng>(
    synthesizer: &mut Synthesizer<R>,
    request: &GenerateRequest,
) -> Result<GeneratedContent, GenerationError> {
    if request.prompt.trim().is_empty() {
        return Err(GenerationError::EmptyPrompt);
    }
    Ok(synthesizer.synthesize(&request.prompt, request.industry, request.business_type))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_envelope_carries_document() {
        let response = handle(&GenerateRequest::new("a saas for dentists"));
        assert!(response.success);
        assert!(response.error.is_none());
        let content = response.data.expect("document present");
        assert_eq!(content.industry, Industry::Saas);
    }

    #[test]
    fn blank_prompt_is_the_single_failure_class() {
        for prompt in ["", "   ", "\n\t"] {
            let response = handle(&GenerateRequest::new(prompt));
            assert!(!response.success);
            assert!(response.data.is_none());
            assert_eq!(
                response.error.as_deref(),
                Some("prompt must not be empty")
            );
        }
    }

    #[test]
    fn hints_pass_through_the_boundary() {
        let request = GenerateRequest {
            prompt: "a thing".to_string(),
            industry: Some(Industry::Travel),
            business_type: Some(BusinessType::Subscription),
        };
        let content = handle(&request).data.expect("document present");
        assert_eq!(content.industry, Industry::Travel);
        assert_eq!(content.business_type, BusinessType::Subscription);
    }

    #[test]
    fn handle_json_success_shape() {
        let body = r#"{"prompt": "an online store for ceramics", "businessType": "b2c"}"#;
        let raw = handle_json(body);
        let value: serde_json::Value = serde_json::from_str(&raw).expect("valid JSON out");
        assert_eq!(value["success"], true);
        assert_eq!(value["data"]["industry"], "ecommerce");
        assert_eq!(value["data"]["businessType"], "b2c");
        assert!(value["data"]["style"]["customColors"]["primary"]
            .as_str()
            .expect("primary color")
            .starts_with('#'));
        assert!(value.get("error").is_none());
    }

    #[test]
    fn handle_json_malformed_body_fails_uniformly() {
        for body in ["not json", "{}", r#"{"prompt": 5}"#] {
            let raw = handle_json(body);
            let value: serde_json::Value = serde_json::from_str(&raw).expect("valid JSON out");
            assert_eq!(value["success"], false);
            assert!(value.get("data").is_none());
            assert!(!value["error"].as_str().expect("error string").is_empty());
        }
    }

    #[test]
    fn unknown_hint_labels_are_rejected_at_parse_time() {
        let body = r#"{"prompt": "a shop", "industry": "blockchain"}"#;
        let raw = handle_json(body);
        let value: serde_json::Value = serde_json::from_str(&raw).expect("valid JSON out");
        assert_eq!(value["success"], false);
    }
}
