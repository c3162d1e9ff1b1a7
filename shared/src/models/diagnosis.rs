//! Plant disease diagnosis models

use serde::{Deserialize, Serialize};

/// Maximum characters of raw model output echoed back in a parse fallback.
pub const FALLBACK_REASONS_MAX_CHARS: usize = 60;

/// Maximum characters of an error message echoed back in an error result.
pub const ERROR_REASONS_MAX_CHARS: usize = 50;

/// Best-effort diagnosis parsed from a generative-AI vision response.
///
/// Diagnosis is advisory, so this type always has a usable value: when the
/// model output cannot be parsed, or the endpoint fails outright, callers
/// get a deterministic fallback instead of an error.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DiagnosisResult {
    /// Disease name, or "Healthy Plant" when no disease is found
    pub name: String,
    /// How it occurs (roughly 15 words)
    pub reasons: String,
    /// How to prevent it (roughly 30 words)
    pub fix: String,
}

impl DiagnosisResult {
    /// Fallback when the vision response contained no parseable JSON.
    /// Echoes a truncated prefix of the raw text so the farmer still sees
    /// what the model said.
    pub fn parse_fallback(raw_response: &str) -> Self {
        let reasons = if raw_response.is_empty() {
            "Analysis completed".to_string()
        } else {
            raw_response.chars().take(FALLBACK_REASONS_MAX_CHARS).collect()
        };
        Self {
            name: "Disease Detection Complete".to_string(),
            reasons,
            fix: "Consult agricultural expert for proper treatment and follow good farming practices"
                .to_string(),
        }
    }

    /// Fallback when the vision endpoint itself failed.
    pub fn analysis_error(error: &str) -> Self {
        let truncated: String = error.chars().take(ERROR_REASONS_MAX_CHARS).collect();
        Self {
            name: "Analysis Error".to_string(),
            reasons: format!("Error: {}", truncated),
            fix: "Please try uploading a clearer image or check your internet connection"
                .to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_fallback_truncates_long_output() {
        let raw = "x".repeat(500);
        let result = DiagnosisResult::parse_fallback(&raw);
        assert_eq!(result.name, "Disease Detection Complete");
        assert_eq!(result.reasons.chars().count(), FALLBACK_REASONS_MAX_CHARS);
    }

    #[test]
    fn parse_fallback_handles_empty_output() {
        let result = DiagnosisResult::parse_fallback("");
        assert_eq!(result.reasons, "Analysis completed");
    }

    #[test]
    fn analysis_error_truncates_message() {
        let result = DiagnosisResult::analysis_error(&"e".repeat(200));
        assert_eq!(result.name, "Analysis Error");
        assert!(result.reasons.starts_with("Error: "));
        assert_eq!(
            result.reasons.chars().count(),
            "Error: ".chars().count() + ERROR_REASONS_MAX_CHARS
        );
    }

    #[test]
    fn fallbacks_are_deterministic() {
        assert_eq!(
            DiagnosisResult::parse_fallback("some text"),
            DiagnosisResult::parse_fallback("some text")
        );
        assert_eq!(
            DiagnosisResult::analysis_error("timeout"),
            DiagnosisResult::analysis_error("timeout")
        );
    }
}
