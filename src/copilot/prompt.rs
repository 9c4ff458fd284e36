use serde::Deserialize;

/// Sampling settings for the narrative analysis call.
pub const ANALYSIS_TEMPERATURE: f64 = 0.3;
pub const ANALYSIS_MAX_TOKENS: u32 = 1500;

/// Sampling settings for the condition-extraction call. Near-greedy and
/// short: the reply should be one small JSON object.
pub const EXTRACTION_TEMPERATURE: f64 = 0.1;
pub const EXTRACTION_MAX_TOKENS: u32 = 300;

pub const ANALYSIS_SYSTEM_PROMPT: &str = "You are an AI assistant used in a healthcare software prototype. \
Your audience is clinicians and software developers, NOT patients. \
Given a clinical-style note, generate a structured analysis. \
SAFETY RULES: Do NOT make final diagnoses. Do NOT prescribe treatments. \
Use language like 'possible considerations'. \
Include disclaimers that this is NOT medical advice.";

pub const EXTRACTION_SYSTEM_PROMPT: &str =
    "Extract conditions as JSON: {\"conditions\": [...]}";

/// Patient demographics forwarded into the analysis prompt. Everything
/// is optional; absent fields render as `unknown`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PatientContext {
    pub age: Option<u32>,
    pub sex: Option<String>,
}

impl PatientContext {
    fn age_text(&self) -> String {
        match self.age {
            Some(age) => age.to_string(),
            None => "unknown".to_string(),
        }
    }

    fn sex_text(&self) -> &str {
        self.sex.as_deref().unwrap_or("unknown")
    }
}

/// Build the user prompt for the narrative analysis call.
///
/// Embeds the patient context and the note, and pins the six-section
/// Markdown skeleton the client renders.
pub fn build_analysis_prompt(note_text: &str, patient: &PatientContext) -> String {
    format!(
        r#"Patient context: age: {age}, sex: {sex}.
Clinical note: {note_text}

Produce analysis in Markdown:
### Summary
### Key Clinical Details
### Possible Clinical Considerations
### Documentation Improvements
### Questions to Clarify
### Safety / Red Flags

End with disclaimer this is prototype only."#,
        age = patient.age_text(),
        sex = patient.sex_text(),
    )
}

/// Build the user prompt for the condition-extraction call.
pub fn build_extraction_prompt(note_text: &str) -> String {
    format!("Extract from: {note_text}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn analysis_prompt_contains_note_and_patient() {
        let patient = PatientContext {
            age: Some(54),
            sex: Some("F".into()),
        };
        let prompt = build_analysis_prompt("Chest pain on exertion.", &patient);

        assert!(prompt.contains("Chest pain on exertion."));
        assert!(prompt.contains("age: 54"));
        assert!(prompt.contains("sex: F"));
    }

    #[test]
    fn analysis_prompt_pins_markdown_sections() {
        let prompt = build_analysis_prompt("note", &PatientContext::default());
        assert!(prompt.contains("### Summary"));
        assert!(prompt.contains("### Possible Clinical Considerations"));
        assert!(prompt.contains("### Safety / Red Flags"));
        assert!(prompt.contains("prototype only"));
    }

    #[test]
    fn missing_demographics_render_unknown() {
        let prompt = build_analysis_prompt("note", &PatientContext::default());
        assert!(prompt.contains("age: unknown, sex: unknown"));
    }

    #[test]
    fn analysis_system_prompt_enforces_safety_rules() {
        assert!(ANALYSIS_SYSTEM_PROMPT.contains("Do NOT make final diagnoses"));
        assert!(ANALYSIS_SYSTEM_PROMPT.contains("Do NOT prescribe treatments"));
        assert!(ANALYSIS_SYSTEM_PROMPT.contains("'possible considerations'"));
        assert!(ANALYSIS_SYSTEM_PROMPT.contains("NOT medical advice"));
    }

    #[test]
    fn extraction_prompt_wraps_note() {
        assert_eq!(
            build_extraction_prompt("fever and cough"),
            "Extract from: fever and cough"
        );
        assert!(EXTRACTION_SYSTEM_PROMPT.contains(r#"{"conditions": [...]}"#));
    }

    #[test]
    fn patient_context_deserializes_partial_objects() {
        let patient: PatientContext = serde_json::from_str(r#"{"age": 40}"#).unwrap();
        assert_eq!(patient.age, Some(40));
        assert!(patient.sex.is_none());

        let patient: PatientContext = serde_json::from_str("{}").unwrap();
        assert!(patient.age.is_none());
    }
}
