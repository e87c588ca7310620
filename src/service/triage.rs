//! Triage adapter: symptoms in, structured suggestion out.
//!
//! Each call makes exactly one model request.  Any failure on the way (transport,
//! timeout, non-JSON reply, missing keys, unknown enum values) collapses into
//! [`TriageOutcome::Fallback`], so callers always have a safe record to return.

use std::{sync::Arc, time::Duration};

use tracing::{debug, instrument, warn};

use crate::{
    base::{
        config::Config,
        prompts::build_triage_prompt,
        types::{Res, TriageOutcome, TriageResult},
    },
    service::llm::LlmClient,
};

/// Triage client for the application.
///
/// This is trivially cloneable and can be passed around without the need for `Arc` or `Mutex`.
#[derive(Clone)]
pub struct TriageClient {
    llm: LlmClient,
    directive: Arc<str>,
    temperature: f32,
    timeout: Option<Duration>,
}

impl TriageClient {
    pub fn new(config: &Config, llm: LlmClient) -> Self {
        Self {
            llm,
            directive: Arc::from(config.triage_system_directive.as_str()),
            temperature: config.triage_temperature,
            timeout: config.llm_timeout(),
        }
    }

    /// Produce a triage suggestion for the given symptoms.  Never fails.
    #[instrument(name = "TriageClient::triage", skip_all, fields(symptoms_len = symptoms.len()))]
    pub async fn triage(&self, symptoms: &str) -> TriageOutcome {
        match self.try_triage(symptoms).await {
            Ok(result) => TriageOutcome::Parsed(result),
            Err(err) => {
                warn!("Falling back to the default triage result: {err:#}");
                TriageOutcome::Fallback
            }
        }
    }

    async fn try_triage(&self, symptoms: &str) -> Res<TriageResult> {
        let prompt = build_triage_prompt(&self.directive, symptoms);

        let reply = match self.timeout {
            Some(limit) => tokio::time::timeout(limit, self.llm.generate(&prompt, self.temperature))
                .await
                .map_err(|_| anyhow::anyhow!("LLM call timed out after {}s", limit.as_secs()))??,
            None => self.llm.generate(&prompt, self.temperature).await?,
        };

        debug!(reply_len = reply.len(), "Received LLM reply");

        parse_triage_reply(&reply)
    }
}

/// Trim the reply and drop any markdown code-fence markers.
pub fn strip_code_fences(text: &str) -> String {
    text.trim().replace("```json", "").replace("```", "")
}

/// Parse a raw model reply into a triage result.
pub fn parse_triage_reply(text: &str) -> Res<TriageResult> {
    let cleaned = strip_code_fences(text);
    Ok(serde_json::from_str(&cleaned)?)
}

// Tests.

#[cfg(test)]
mod tests {
    use async_trait::async_trait;
    use mockall::mock;

    use super::*;
    use crate::{
        base::{
            config::ConfigInner,
            prompts::TRIAGE_SYSTEM_DIRECTIVE,
            types::{RecommendedCare, Urgency},
        },
        service::llm::GenericLlmClient,
    };

    mock! {
        pub Llm {}

        #[async_trait]
        impl GenericLlmClient for Llm {
            async fn generate(&self, prompt: &str, temperature: f32) -> Res<String>;
        }
    }

    const VALID_REPLY: &str = r#"{"summary": "Fever with cough.", "urgency": "Medium", "recommended_care": "Clinic", "advice": "See a clinician within a day."}"#;

    fn create_test_config() -> Config {
        Config {
            inner: Arc::new(ConfigInner {
                gemini_api_key: "test-key".to_string(),
                ..Default::default()
            }),
        }
    }

    fn client_replying(reply: Res<String>) -> TriageClient {
        let mut mock = MockLlm::new();
        let mut reply = Some(reply);
        mock.expect_generate().times(1).returning(move |_, _| reply.take().unwrap());

        TriageClient::new(&create_test_config(), LlmClient::new(Arc::new(mock)))
    }

    fn expected_result() -> TriageResult {
        TriageResult {
            summary: "Fever with cough.".to_string(),
            urgency: Urgency::Medium,
            recommended_care: RecommendedCare::Clinic,
            advice: "See a clinician within a day.".to_string(),
        }
    }

    #[test]
    fn test_strip_code_fences() {
        assert_eq!(strip_code_fences("  ```json\n{\"a\": 1}\n```  "), "\n{\"a\": 1}\n");
        assert_eq!(strip_code_fences("```\n{}\n```"), "\n{}\n");
        assert_eq!(strip_code_fences("{}"), "{}");
    }

    #[test]
    fn test_parse_triage_reply_ignores_extra_keys() {
        let reply = r#"{"summary": "s", "urgency": "Emergency", "recommended_care": "Tertiary Hospital", "advice": "a", "confidence": 0.9}"#;
        let result = parse_triage_reply(reply).unwrap();

        assert_eq!(result.urgency, Urgency::Emergency);
        assert_eq!(result.recommended_care, RecommendedCare::TertiaryHospital);
    }

    #[tokio::test]
    async fn test_triage_sends_directive_symptoms_and_temperature() {
        let mut mock = MockLlm::new();
        mock.expect_generate()
            .withf(|prompt, temperature| {
                prompt.starts_with(TRIAGE_SYSTEM_DIRECTIVE) && prompt.ends_with("\n\nSymptoms:\nfever and cough") && (*temperature - 0.2).abs() < f32::EPSILON
            })
            .times(1)
            .returning(|_, _| Ok(VALID_REPLY.to_string()));

        let client = TriageClient::new(&create_test_config(), LlmClient::new(Arc::new(mock)));
        let outcome = client.triage("fever and cough").await;

        assert_eq!(outcome, TriageOutcome::Parsed(expected_result()));
    }

    #[tokio::test]
    async fn test_triage_parses_fenced_reply() {
        let client = client_replying(Ok(format!("```json\n{VALID_REPLY}\n```")));

        assert_eq!(client.triage("fever").await, TriageOutcome::Parsed(expected_result()));
    }

    #[tokio::test]
    async fn test_triage_falls_back_on_llm_error() {
        let client = client_replying(Err(anyhow::anyhow!("connection reset by peer")));
        let outcome = client.triage("fever").await;

        assert!(outcome.is_fallback());
        assert_eq!(
            serde_json::to_string(&outcome.into_result()).unwrap(),
            r#"{"summary":"Unable to summarize symptoms.","urgency":"Unknown","recommended_care":"General Hospital","advice":"Please seek professional medical attention."}"#
        );
    }

    #[tokio::test]
    async fn test_triage_falls_back_on_missing_key() {
        let client = client_replying(Ok(r#"{"summary": "s", "urgency": "Low", "recommended_care": "Clinic"}"#.to_string()));

        assert_eq!(client.triage("fever").await, TriageOutcome::Fallback);
    }

    #[tokio::test]
    async fn test_triage_falls_back_on_non_json() {
        let client = client_replying(Ok("I think you should see a doctor.".to_string()));

        assert_eq!(client.triage("fever").await, TriageOutcome::Fallback);
    }

    #[tokio::test]
    async fn test_triage_falls_back_on_unknown_care_level() {
        let client = client_replying(Ok(r#"{"summary": "s", "urgency": "Low", "recommended_care": "Pharmacy", "advice": "a"}"#.to_string()));

        assert_eq!(client.triage("fever").await, TriageOutcome::Fallback);
    }

    struct SlowLlm;

    #[async_trait]
    impl GenericLlmClient for SlowLlm {
        async fn generate(&self, _prompt: &str, _temperature: f32) -> Res<String> {
            tokio::time::sleep(Duration::from_secs(5)).await;
            Ok(VALID_REPLY.to_string())
        }
    }

    #[tokio::test]
    async fn test_triage_falls_back_on_timeout() {
        let mut client = TriageClient::new(&create_test_config(), LlmClient::new(Arc::new(SlowLlm)));
        client.timeout = Some(Duration::from_millis(20));

        assert_eq!(client.triage("fever").await, TriageOutcome::Fallback);
    }
}
