//! Diagnosis result tests
//!
//! Diagnosis is advisory: whatever the vision model returns, the farmer
//! must always get a well-formed result with a name, reasons, and a fix.

use proptest::prelude::*;
use shared::{DiagnosisResult, ERROR_REASONS_MAX_CHARS, FALLBACK_REASONS_MAX_CHARS};

mod parse_fallback {
    use super::*;

    #[test]
    fn short_output_is_echoed_verbatim() {
        let result = DiagnosisResult::parse_fallback("The leaf looks healthy.");
        assert_eq!(result.name, "Disease Detection Complete");
        assert_eq!(result.reasons, "The leaf looks healthy.");
    }

    #[test]
    fn long_output_is_truncated_to_a_prefix() {
        let raw = "a".repeat(300);
        let result = DiagnosisResult::parse_fallback(&raw);
        assert_eq!(result.reasons.chars().count(), FALLBACK_REASONS_MAX_CHARS);
        assert!(raw.starts_with(&result.reasons));
    }

    #[test]
    fn empty_output_gets_placeholder_reasons() {
        let result = DiagnosisResult::parse_fallback("");
        assert_eq!(result.reasons, "Analysis completed");
    }

    #[test]
    fn truncation_respects_multibyte_characters() {
        // char-based truncation must never split a UTF-8 sequence
        let raw = "धान की फसल में झुलसा रोग के लक्षण दिखाई दे रहे हैं और पत्तियों पर भूरे धब्बे हैं";
        let result = DiagnosisResult::parse_fallback(raw);
        assert!(result.reasons.chars().count() <= FALLBACK_REASONS_MAX_CHARS);
    }
}

mod analysis_error {
    use super::*;

    #[test]
    fn error_message_is_prefixed_and_truncated() {
        let result = DiagnosisResult::analysis_error(&"t".repeat(120));
        assert_eq!(result.name, "Analysis Error");
        assert!(result.reasons.starts_with("Error: "));
        assert_eq!(
            result.reasons.chars().count(),
            "Error: ".chars().count() + ERROR_REASONS_MAX_CHARS
        );
    }

    #[test]
    fn short_error_is_kept_whole() {
        let result = DiagnosisResult::analysis_error("connection timed out");
        assert_eq!(result.reasons, "Error: connection timed out");
    }
}

proptest! {
    /// Every fallback result is complete: non-empty name, reasons, and fix.
    #[test]
    fn fallback_results_are_always_complete(raw in ".*") {
        let result = DiagnosisResult::parse_fallback(&raw);
        prop_assert!(!result.name.is_empty());
        prop_assert!(!result.reasons.is_empty());
        prop_assert!(!result.fix.is_empty());
        prop_assert!(result.reasons.chars().count() <= FALLBACK_REASONS_MAX_CHARS.max("Analysis completed".len()));
    }

    /// Error results never leak more than the truncated message.
    #[test]
    fn error_results_bound_the_echoed_message(error in ".*") {
        let result = DiagnosisResult::analysis_error(&error);
        prop_assert!(
            result.reasons.chars().count()
                <= "Error: ".chars().count() + ERROR_REASONS_MAX_CHARS
        );
    }
}
