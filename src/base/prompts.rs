//! Prompt templates for the triage model.

/// Default system directive for triage requests.
pub const TRIAGE_SYSTEM_DIRECTIVE: &str = r#####"
You are a medical triage assistant.

Rules:
- Do NOT diagnose
- Do NOT prescribe medication
- Only provide triage-level guidance
- Be concise and safe

You must return STRICT JSON with the following keys:
summary, urgency, recommended_care, advice

Urgency must be one of:
Low, Medium, High, Emergency

Recommended care must be one of:
Clinic, General Hospital, Tertiary Hospital
"#####;

/// Build the single user-role prompt sent to the model.
pub fn build_triage_prompt(directive: &str, symptoms: &str) -> String {
    format!("{directive}\n\nSymptoms:\n{symptoms}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_appends_symptoms_after_directive() {
        let prompt = build_triage_prompt(TRIAGE_SYSTEM_DIRECTIVE, "fever and cough");

        assert!(prompt.starts_with(TRIAGE_SYSTEM_DIRECTIVE));
        assert!(prompt.ends_with("\n\nSymptoms:\nfever and cough"));
    }

    #[test]
    fn test_prompt_keeps_empty_symptoms() {
        assert_eq!(build_triage_prompt("Directive.", ""), "Directive.\n\nSymptoms:\n");
    }

    #[test]
    fn test_directive_lists_keys_and_allowed_values() {
        for needle in [
            "Do NOT diagnose",
            "Do NOT prescribe medication",
            "summary, urgency, recommended_care, advice",
            "Low, Medium, High, Emergency",
            "Clinic, General Hospital, Tertiary Hospital",
        ] {
            assert!(TRIAGE_SYSTEM_DIRECTIVE.contains(needle), "directive is missing `{needle}`");
        }
    }
}
