//! Advisory provider backed by the Bedrock Converse API.

use aws_sdk_bedrockruntime::Client;
use aws_sdk_bedrockruntime::types::{
    ContentBlock, ConversationRole, InferenceConfiguration, Message, SystemContentBlock,
};
use futures::future::BoxFuture;
use syndx_core::models::advisory::AdvisoryResult;
use syndx_core::models::patient::PatientContext;
use tracing::info;
use uuid::Uuid;

use crate::error::AdvisoryError;
use crate::parse::parse_advisory;
use crate::prompt::{ADVISORY_SYSTEM_PROMPT, build_advisory_prompt};
use crate::provider::AdvisoryProvider;

pub const DEFAULT_MODEL_ID: &str = "us.anthropic.claude-sonnet-4-20250514-v1:0";

/// Low temperature keeps suggestions close to the guideline wording.
const TEMPERATURE: f32 = 0.2;

#[derive(Debug, Clone)]
pub struct BedrockAdvisor {
    client: Client,
    model_id: String,
}

impl BedrockAdvisor {
    pub fn new(config: &aws_config::SdkConfig, model_id: impl Into<String>) -> Self {
        Self {
            client: Client::new(config),
            model_id: model_id.into(),
        }
    }

    /// Load AWS credentials from the environment for the given region.
    pub async fn from_region(region: &str, model_id: impl Into<String>) -> Self {
        let config = aws_config::defaults(aws_config::BehaviorVersion::latest())
            .region(aws_config::Region::new(region.to_string()))
            .load()
            .await;
        Self::new(&config, model_id)
    }

    pub fn model_id(&self) -> &str {
        &self.model_id
    }

    async fn advise(&self, context: &PatientContext) -> Result<AdvisoryResult, AdvisoryError> {
        let transaction_id = Uuid::new_v4();
        info!(transaction_id = %transaction_id, model = %self.model_id, "requesting advisory");

        let response_text = invoke_converse(
            &self.client,
            &self.model_id,
            ADVISORY_SYSTEM_PROMPT,
            &build_advisory_prompt(context),
        )
        .await?;

        let advisory = parse_advisory(&response_text)?;

        info!(
            transaction_id = %transaction_id,
            confidence = %advisory.confidence,
            "advisory complete"
        );
        Ok(advisory)
    }
}

impl AdvisoryProvider for BedrockAdvisor {
    fn name(&self) -> &str {
        "bedrock"
    }

    fn get_advisory<'a>(
        &'a self,
        context: &'a PatientContext,
    ) -> BoxFuture<'a, Result<AdvisoryResult, AdvisoryError>> {
        Box::pin(self.advise(context))
    }
}

/// Single-turn Converse call. Returns the concatenated text blocks.
async fn invoke_converse(
    client: &Client,
    model_id: &str,
    system_prompt: &str,
    user_message: &str,
) -> Result<String, AdvisoryError> {
    let response = client
        .converse()
        .model_id(model_id)
        .system(SystemContentBlock::Text(system_prompt.to_string()))
        .inference_config(
            InferenceConfiguration::builder()
                .temperature(TEMPERATURE)
                .build(),
        )
        .messages(
            Message::builder()
                .role(ConversationRole::User)
                .content(ContentBlock::Text(user_message.to_string()))
                .build()
                .map_err(|e| AdvisoryError::Invocation(e.to_string()))?,
        )
        .send()
        .await
        .map_err(|e| AdvisoryError::Invocation(e.into_service_error().to_string()))?;

    let output_message = response
        .output()
        .and_then(|o| o.as_message().ok())
        .ok_or_else(|| AdvisoryError::ResponseParse("no message in response".to_string()))?;

    let response_text = output_message
        .content()
        .iter()
        .filter_map(|block| {
            if let ContentBlock::Text(text) = block {
                Some(text.as_str())
            } else {
                None
            }
        })
        .collect::<Vec<_>>()
        .join("");

    Ok(response_text)
}
