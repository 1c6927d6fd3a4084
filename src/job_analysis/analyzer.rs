use std::time::Duration;
use tracing::{info, warn};

use super::fixture::sample_analysis;
use super::types::{AnalysisInput, JobAnalysis};
use crate::core::config_manager::ConfigManager;
use crate::error::{AssistantError, AssistantResult};

pub struct JobAnalyzer {
    delay: Duration,
}

impl JobAnalyzer {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    pub fn from_config(config: &ConfigManager) -> Self {
        Self::new(config.analysis.delay)
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Analyze a job posting. Blank input is rejected before any waiting.
    pub async fn analyze(&self, input: &AnalysisInput) -> AssistantResult<JobAnalysis> {
        if input.is_blank() {
            warn!("Rejected blank {:?} analysis input", input.kind());
            return Err(AssistantError::EmptyAnalysisInput(input.kind()));
        }

        info!(
            "Analyzing job posting ({:?}, {} chars)",
            input.kind(),
            input.value().len()
        );
        tokio::time::sleep(self.delay).await;

        let analysis = sample_analysis();
        info!(
            "Job analysis completed: {}% match",
            analysis.skills_match.match_percentage
        );
        Ok(analysis)
    }
}

/// Holds the most recent successful analysis.
#[derive(Debug, Default)]
pub struct AnalysisSession {
    result: Option<JobAnalysis>,
}

impl AnalysisSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn result(&self) -> Option<&JobAnalysis> {
        self.result.as_ref()
    }

    /// Run the analyzer and keep its result. On failure the previous result
    /// stays in place.
    pub async fn submit(
        &mut self,
        analyzer: &JobAnalyzer,
        input: &AnalysisInput,
    ) -> AssistantResult<&JobAnalysis> {
        let analysis = analyzer.analyze(input).await?;
        Ok(&*self.result.insert(analysis))
    }
}
