use crate::opts::UpstreamOpts;

use std::sync::Arc;
use std::time::Duration;

use textpolish_core::{ChatApi, Corrector, OpenAiClient, ProFeatures};

#[derive(Clone)]
pub struct AppState {
    pub corrector: Corrector,
    pub pro: ProFeatures,
}

impl AppState {
    pub fn new(upstream: Option<Arc<dyn ChatApi>>) -> Self {
        Self {
            corrector: Corrector::new(upstream.clone()),
            pro: ProFeatures::new(upstream),
        }
    }

    pub fn from_opts(opts: &UpstreamOpts) -> Self {
        let upstream = opts.openai_api_key.as_deref().map(|key| {
            Arc::new(
                OpenAiClient::new(
                    key,
                    &opts.model,
                    Duration::from_secs(opts.upstream_timeout_secs),
                )
                .with_base_url(&opts.upstream_url),
            ) as Arc<dyn ChatApi>
        });
        if upstream.is_none() {
            tracing::warn!("OPENAI_API_KEY not set; requests will report a configuration error");
        }
        Self::new(upstream)
    }
}
