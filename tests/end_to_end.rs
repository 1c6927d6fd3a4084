use std::sync::Arc;
use std::time::Duration;

use job_assistant::core::{Database, FsOps};
use job_assistant::job_analysis::{AnalysisInput, AnalysisSession, JobAnalyzer};
use job_assistant::render::{render, render_document, standalone_page};
use job_assistant::resume::{ensure_content, ResumeRepository};
use job_assistant::types::{Skill, SkillCategory, TemplateId, WorkEntry, WorkHistory};
use job_assistant::{AssistantError, ProfileStore};

fn engineer() -> WorkEntry {
    WorkEntry {
        title: "Engineer".to_string(),
        company: "Acme".to_string(),
        start_date: "Jan 2020".to_string(),
        current_job: true,
        ..Default::default()
    }
}

fn profile_on(database: &Database) -> ProfileStore {
    ProfileStore::new(Arc::new(database.kv_store()))
}

#[tokio::test]
async fn test_add_work_entry_then_render_resume() {
    let database = Database::in_memory().await.unwrap();
    let profile = profile_on(&database);
    profile.save(&WorkHistory::new()).await.unwrap();

    profile.add_work_entry(engineer()).await.unwrap();
    let history: WorkHistory = profile.load().await.unwrap();
    assert_eq!(history.len(), 1);

    let repo = ResumeRepository::new(database.pool());
    let mut document = repo.create(TemplateId::Professional).await.unwrap();
    let content = ensure_content(&mut document, &profile).await.unwrap();
    assert_eq!(content.work_experience.len(), 1);
    repo.save(&document).await.unwrap();

    let stored = repo.require(document.id).await.unwrap();
    let html = render_document(&stored);
    assert!(html.contains("Jan 2020 - Present"));
    assert!(html.contains("Engineer"));
}

#[tokio::test]
async fn test_resume_content_is_copied_once() {
    let dir = tempfile::tempdir().unwrap();
    let database = Database::new(&dir.path().join("data").join("jobdesk.db"))
        .await
        .unwrap();
    let profile = profile_on(&database);
    profile
        .add_skill(Skill {
            name: "Rust".to_string(),
            category: SkillCategory::Technical,
            proficiency: None,
        })
        .await
        .unwrap();

    let repo = ResumeRepository::new(database.pool());
    let mut document = repo.create(TemplateId::Modern).await.unwrap();
    ensure_content(&mut document, &profile).await.unwrap();
    repo.save(&document).await.unwrap();

    // Later profile edits do not reach an initialized resume
    profile.add_work_entry(engineer()).await.unwrap();
    profile
        .add_skill(Skill {
            name: "Go".to_string(),
            category: SkillCategory::Technical,
            proficiency: None,
        })
        .await
        .unwrap();

    let mut reloaded = repo.require(document.id).await.unwrap();
    let content = ensure_content(&mut reloaded, &profile).await.unwrap();
    assert!(content.work_experience.is_empty());
    assert_eq!(content.skills.total(), 1);

    // A fresh resume picks up the current profile
    let mut fresh = repo.create(TemplateId::Modern).await.unwrap();
    let content = ensure_content(&mut fresh, &profile).await.unwrap();
    assert_eq!(content.work_experience.len(), 1);
    assert_eq!(content.skills.total(), 2);
}

#[tokio::test]
async fn test_duplicate_skill_leaves_profile_unchanged() {
    let database = Database::in_memory().await.unwrap();
    let profile = profile_on(&database);
    let rust = Skill {
        name: "Rust".to_string(),
        category: SkillCategory::Technical,
        proficiency: None,
    };
    profile.add_skill(rust.clone()).await.unwrap();

    let err = profile
        .add_skill(Skill {
            name: "rust".to_string(),
            ..rust
        })
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "\"rust\" already exists in Technical Skills");
    assert_eq!(profile.snapshot().await.unwrap().skills.total(), 1);
}

#[tokio::test(start_paused = true)]
async fn test_job_analysis_session() {
    let analyzer = JobAnalyzer::new(Duration::from_millis(2000));
    let mut session = AnalysisSession::new();

    let err = session
        .submit(&analyzer, &AnalysisInput::Text(String::new()))
        .await
        .unwrap_err();
    assert!(matches!(err, AssistantError::EmptyAnalysisInput(_)));
    assert!(session.result().is_none());

    let analysis = session
        .submit(
            &analyzer,
            &AnalysisInput::Text("Frontend engineer, React and TypeScript".to_string()),
        )
        .await
        .unwrap();
    assert_eq!(analysis.skills_match.match_percentage, 65);
    assert_eq!(analysis.skills_match.matching_skills.len(), 5);
    assert_eq!(analysis.skills_match.missing_skills.len(), 7);
}

#[tokio::test]
async fn test_export_writes_standalone_page() {
    let dir = tempfile::tempdir().unwrap();
    let database = Database::in_memory().await.unwrap();
    let profile = profile_on(&database);
    profile.add_work_entry(engineer()).await.unwrap();

    let repo = ResumeRepository::new(database.pool());
    let mut document = repo.create(TemplateId::Professional).await.unwrap();
    let content = ensure_content(&mut document, &profile).await.unwrap();
    let body = render(TemplateId::Professional, content);

    let path = dir
        .path()
        .join(FsOps::export_file_name("", TemplateId::Professional.as_str()));
    FsOps::write_file_safe(&path, &standalone_page("Resume", &body))
        .await
        .unwrap();

    let written = FsOps::read_file_safe(&path).await.unwrap();
    assert!(written.starts_with("<!DOCTYPE html>"));
    assert!(written.contains("Jan 2020 - Present"));
    assert!(path.ends_with("resume_professional.html"));
}
