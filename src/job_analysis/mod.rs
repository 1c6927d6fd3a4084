// src/job_analysis/mod.rs
//! Job description analysis. The analyzer is a stub: it validates input,
//! waits a configured delay and returns a fixed keyword report.

pub mod analyzer;
mod fixture;
pub mod types;

pub use analyzer::{AnalysisSession, JobAnalyzer};
pub use types::{
    AnalysisInput, AnalysisInputKind, JobAnalysis, KeywordAnalysis, KeywordMatch, SkillsMatch,
};
