use std::sync::Arc;
use std::time::Duration;

use syndx_advisory::bedrock::BedrockAdvisor;
use syndx_advisory::{AdvisoryProvider, DisabledAdvisor};
use syndx_surveillance::CaseLog;
use tracing::info;

use crate::config::SyndxConfig;

/// Shared application state, injected into all route handlers via Axum state.
#[derive(Clone)]
pub struct AppState {
    pub case_log: CaseLog,
    pub advisor: Arc<dyn AdvisoryProvider>,
    pub advisory_timeout: Duration,
}

impl AppState {
    pub fn new(
        case_log: CaseLog,
        advisor: Arc<dyn AdvisoryProvider>,
        advisory_timeout: Duration,
    ) -> Self {
        Self {
            case_log,
            advisor,
            advisory_timeout,
        }
    }

    /// Open the case log and build the advisory provider described by
    /// `config`.
    pub async fn from_config(config: &SyndxConfig) -> eyre::Result<Self> {
        let case_log = match &config.case_log_path {
            Some(path) => CaseLog::open(path).await?,
            None => {
                info!("no case log path configured, cases are kept in memory");
                CaseLog::in_memory()
            }
        };

        let advisor: Arc<dyn AdvisoryProvider> = if config.advisory.enabled {
            let advisor =
                BedrockAdvisor::from_region(&config.advisory.region, &config.advisory.model_id)
                    .await;
            info!(
                region = %config.advisory.region,
                model = advisor.model_id(),
                "bedrock advisory enabled"
            );
            Arc::new(advisor)
        } else {
            Arc::new(DisabledAdvisor)
        };

        Ok(Self::new(case_log, advisor, config.advisory.timeout()))
    }
}
