// src/lib.rs
//! Job-search assistant: a persisted career profile, resumes built from
//! snapshots of it, HTML resume layouts and a job posting analyzer.

pub mod cli;
pub mod core;
pub mod error;
pub mod job_analysis;
pub mod profile_store;
pub mod render;
pub mod resume;
pub mod types;
pub mod validation;

pub use error::{AssistantError, AssistantResult};
pub use job_analysis::{AnalysisInput, AnalysisSession, JobAnalysis, JobAnalyzer};
pub use profile_store::{ProfileKind, ProfileSnapshot, ProfileStore};
pub use render::{render, render_document, render_identifier};
pub use resume::{ensure_content, materialize, ResumeRepository};
