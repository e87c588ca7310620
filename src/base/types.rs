use serde::{Deserialize, Serialize};

pub type Err = anyhow::Error;
pub type Res<T> = Result<T, Err>;
pub type Void = Res<()>;

// Request types.

/// Where the caller says they are.
///
/// Accepted as either free text or a numeric code.  Not used by the triage logic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Location {
    Text(String),
    Code(i64),
}

/// Body of `POST /triage`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TriageRequest {
    /// Free-text description of the symptoms.
    pub symptoms: String,
    /// Age of the patient, if given.
    #[serde(default)]
    pub age: Option<i64>,
    /// Location of the patient, if given.
    #[serde(default)]
    pub location: Option<Location>,
}

// Result types.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Urgency {
    Low,
    Medium,
    High,
    Emergency,
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RecommendedCare {
    Clinic,
    #[serde(rename = "General Hospital")]
    GeneralHospital,
    #[serde(rename = "Tertiary Hospital")]
    TertiaryHospital,
}

/// Structured triage suggestion; also the body of the `POST /triage` response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TriageResult {
    pub summary: String,
    pub urgency: Urgency,
    pub recommended_care: RecommendedCare,
    pub advice: String,
}

impl TriageResult {
    /// The record returned whenever the model reply cannot be turned into a result.
    pub fn fallback() -> Self {
        Self {
            summary: "Unable to summarize symptoms.".to_string(),
            urgency: Urgency::Unknown,
            recommended_care: RecommendedCare::GeneralHospital,
            advice: "Please seek professional medical attention.".to_string(),
        }
    }
}

/// Outcome of a single triage call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TriageOutcome {
    /// The model reply parsed into a full result.
    Parsed(TriageResult),
    /// Something failed along the way; the safe default applies.
    Fallback,
}

impl TriageOutcome {
    pub fn is_fallback(&self) -> bool {
        matches!(self, TriageOutcome::Fallback)
    }

    /// Short label for logs.
    pub fn kind(&self) -> &'static str {
        match self {
            TriageOutcome::Parsed(_) => "parsed",
            TriageOutcome::Fallback => "fallback",
        }
    }

    pub fn into_result(self) -> TriageResult {
        match self {
            TriageOutcome::Parsed(result) => result,
            TriageOutcome::Fallback => TriageResult::fallback(),
        }
    }
}

// Tests.
