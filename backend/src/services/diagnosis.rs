//! Plant disease diagnosis service
//!
//! Sends an uploaded leaf image plus a fixed instructional prompt to the
//! generative-AI vision endpoint and parses a best-effort JSON object
//! out of the free-form reply. Diagnosis is advisory: every failure mode
//! degrades to a deterministic fallback result instead of an error.

use shared::DiagnosisResult;

use crate::external::GeminiClient;

/// Instructional prompt sent with every image. The model is asked for a
/// bare JSON object so extraction can anchor on the outermost braces.
const DIAGNOSIS_PROMPT: &str = r#"Analyze this plant leaf image and provide ONLY:
1. Disease name (or "Healthy Plant" if no disease)
2. How it occurs (exactly 15 words)
3. How to prevent (exactly 30 words)

Format as JSON:
{
    "name": "disease name",
    "reasons": "how it occurs in 15 words",
    "fix": "prevention in 30 words"
}"#;

/// Diagnosis service
#[derive(Clone)]
pub struct DiagnosisService {
    gemini: GeminiClient,
}

impl DiagnosisService {
    pub fn new(gemini: GeminiClient) -> Self {
        Self { gemini }
    }

    /// Diagnose a plant image. Never fails; transport errors become the
    /// fixed "Analysis Error" result so the caller needs no fallback
    /// path of its own.
    pub async fn diagnose(&self, image: &[u8], mime_type: &str) -> DiagnosisResult {
        match self
            .gemini
            .generate_vision(DIAGNOSIS_PROMPT, image, mime_type)
            .await
        {
            Ok(text) => parse_diagnosis(&text),
            Err(e) => {
                tracing::warn!("vision endpoint failed, serving error result: {}", e);
                DiagnosisResult::analysis_error(&e.to_string())
            }
        }
    }
}

/// Parse the first top-level JSON object found between the first `{` and
/// the last `}` of the response text. Models wrap the object in prose or
/// code fences often enough that anchoring on braces beats trusting the
/// whole body to be JSON.
pub fn parse_diagnosis(response_text: &str) -> DiagnosisResult {
    match extract_json_object(response_text)
        .and_then(|json| serde_json::from_str::<DiagnosisResult>(json).ok())
    {
        Some(result) => result,
        None => DiagnosisResult::parse_fallback(response_text),
    }
}

fn extract_json_object(text: &str) -> Option<&str> {
    let start = text.find('{')?;
    let end = text.rfind('}')?;
    if end < start {
        return None;
    }
    Some(&text[start..=end])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_object_amid_prose() {
        let text = r#"Sure! Here is the analysis:
{"name": "Healthy Plant", "reasons": "No disease visible", "fix": "Keep watering on schedule"}
Let me know if you need more."#;

        let result = parse_diagnosis(text);
        assert_eq!(result.name, "Healthy Plant");
        assert_eq!(result.reasons, "No disease visible");
    }

    #[test]
    fn parses_object_inside_code_fence() {
        let text = "```json\n{\"name\": \"Leaf Rust\", \"reasons\": \"Fungal spores\", \"fix\": \"Apply fungicide\"}\n```";
        let result = parse_diagnosis(text);
        assert_eq!(result.name, "Leaf Rust");
    }

    #[test]
    fn no_braces_yields_parse_fallback() {
        let text = "The leaf looks fine to me.";
        let result = parse_diagnosis(text);
        assert_eq!(result.name, "Disease Detection Complete");
        assert_eq!(result.reasons, "The leaf looks fine to me.");
    }

    #[test]
    fn malformed_json_yields_parse_fallback() {
        let text = "{name: Leaf Rust, reasons: broken}";
        let result = parse_diagnosis(text);
        assert_eq!(result.name, "Disease Detection Complete");
    }

    #[test]
    fn reversed_braces_yield_parse_fallback() {
        let result = parse_diagnosis("} nothing here {");
        assert_eq!(result.name, "Disease Detection Complete");
    }

    #[test]
    fn extraction_spans_first_open_to_last_close() {
        let text = r#"noise {"name": "X", "reasons": "a {nested} note", "fix": "b"} trailing"#;
        let extracted = extract_json_object(text).unwrap();
        assert!(extracted.starts_with('{'));
        assert!(extracted.ends_with('}'));
        let result = parse_diagnosis(text);
        assert_eq!(result.name, "X");
        assert_eq!(result.reasons, "a {nested} note");
    }
}
