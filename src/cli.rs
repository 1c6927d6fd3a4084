// src/cli.rs
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{error, info};
use uuid::Uuid;

use crate::core::{ConfigManager, Database, FsOps};
use crate::error::AssistantResult;
use crate::job_analysis::{AnalysisInput, AnalysisSession, JobAnalysis, JobAnalyzer};
use crate::profile_store::ProfileStore;
use crate::render::{
    education_date_range, render_document, standalone_page, work_date_range,
};
use crate::resume::{ensure_content, PersonalField, ResumeRepository};
use crate::types::{
    EducationEntry, EntryId, PersonalInfo, Proficiency, ResumeContent, ResumeDocument, Skill,
    SkillCategory, TemplateId, WorkEntry,
};

#[derive(Parser)]
#[command(name = "jobdesk")]
#[command(about = "Keep a career profile, build resumes from it and check job postings")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// SQLite database file (overrides configuration)
    #[arg(long, global = true)]
    pub database: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Show the stored profile
    Profile {
        #[command(subcommand)]
        action: ProfileAction,
    },
    /// Edit personal information
    Personal {
        #[command(subcommand)]
        action: PersonalAction,
    },
    /// Manage work history
    Work {
        #[command(subcommand)]
        action: WorkAction,
    },
    /// Manage education history
    Education {
        #[command(subcommand)]
        action: EducationAction,
    },
    /// Manage skills
    Skill {
        #[command(subcommand)]
        action: SkillAction,
    },
    /// Build and render resumes
    Resume {
        #[command(subcommand)]
        action: ResumeAction,
    },
    /// Analyze a job posting against the profile
    Analyze {
        /// Job description text
        #[arg(long, conflicts_with = "url", required_unless_present = "url")]
        text: Option<String>,
        /// Job posting URL
        #[arg(long)]
        url: Option<String>,
    },
}

#[derive(Subcommand)]
pub enum ProfileAction {
    Show,
}

#[derive(Subcommand)]
pub enum PersonalAction {
    /// Set one or more personal fields; unspecified fields are kept
    Set(PersonalArgs),
}

#[derive(Args)]
pub struct PersonalArgs {
    #[arg(long)]
    pub first_name: Option<String>,
    #[arg(long)]
    pub last_name: Option<String>,
    #[arg(long)]
    pub job_title: Option<String>,
    #[arg(long)]
    pub email: Option<String>,
    #[arg(long)]
    pub phone: Option<String>,
    #[arg(long)]
    pub address: Option<String>,
    #[arg(long)]
    pub city: Option<String>,
    #[arg(long)]
    pub state: Option<String>,
    #[arg(long)]
    pub zip_code: Option<String>,
    #[arg(long)]
    pub linkedin: Option<String>,
    #[arg(long)]
    pub website: Option<String>,
    #[arg(long)]
    pub summary: Option<String>,
}

impl From<PersonalArgs> for PersonalInfo {
    fn from(args: PersonalArgs) -> Self {
        PersonalInfo {
            first_name: args.first_name,
            last_name: args.last_name,
            job_title: args.job_title,
            email: args.email,
            phone: args.phone,
            address: args.address,
            city: args.city,
            state: args.state,
            zip_code: args.zip_code,
            linkedin: args.linkedin,
            website: args.website,
            summary: args.summary,
        }
    }
}

// Required fields are optional here so missing ones reach validation and
// get the same messages as any other blank value.
#[derive(Args)]
pub struct WorkArgs {
    #[arg(long)]
    pub title: Option<String>,
    #[arg(long)]
    pub company: Option<String>,
    #[arg(long)]
    pub location: Option<String>,
    #[arg(long)]
    pub start_date: Option<String>,
    #[arg(long)]
    pub end_date: Option<String>,
    /// Still working here
    #[arg(long)]
    pub current: bool,
    #[arg(long)]
    pub description: Option<String>,
}

impl From<WorkArgs> for WorkEntry {
    fn from(args: WorkArgs) -> Self {
        WorkEntry {
            title: args.title.unwrap_or_default(),
            company: args.company.unwrap_or_default(),
            location: args.location,
            start_date: args.start_date.unwrap_or_default(),
            end_date: args.end_date,
            current_job: args.current,
            description: args.description,
        }
    }
}

#[derive(Args)]
pub struct EducationArgs {
    #[arg(long)]
    pub school: Option<String>,
    #[arg(long)]
    pub degree: Option<String>,
    #[arg(long)]
    pub field_of_study: Option<String>,
    #[arg(long)]
    pub location: Option<String>,
    #[arg(long)]
    pub start_date: Option<String>,
    #[arg(long)]
    pub end_date: Option<String>,
    /// Currently studying here
    #[arg(long)]
    pub current: bool,
    #[arg(long)]
    pub gpa: Option<String>,
    #[arg(long)]
    pub description: Option<String>,
}

impl From<EducationArgs> for EducationEntry {
    fn from(args: EducationArgs) -> Self {
        EducationEntry {
            school: args.school.unwrap_or_default(),
            degree: args.degree.unwrap_or_default(),
            field_of_study: args.field_of_study,
            location: args.location,
            start_date: args.start_date.unwrap_or_default(),
            end_date: args.end_date,
            current: args.current,
            gpa: args.gpa,
            description: args.description,
        }
    }
}

#[derive(Subcommand)]
pub enum WorkAction {
    Add(WorkArgs),
    Update {
        id: EntryId,
        #[command(flatten)]
        entry: WorkArgs,
    },
    Remove {
        id: EntryId,
    },
    List,
}

#[derive(Subcommand)]
pub enum EducationAction {
    Add(EducationArgs),
    Update {
        id: EntryId,
        #[command(flatten)]
        entry: EducationArgs,
    },
    Remove {
        id: EntryId,
    },
    List,
}

#[derive(Subcommand)]
pub enum SkillAction {
    Add {
        name: String,
        /// technical, soft, language, tools or other
        #[arg(long, default_value = "technical")]
        category: SkillCategory,
        #[arg(long)]
        proficiency: Option<Proficiency>,
    },
    Remove {
        category: SkillCategory,
        name: String,
    },
    List,
}

#[derive(Subcommand)]
pub enum ResumeAction {
    /// Create an empty resume; content is copied from the profile on first edit or render
    New {
        #[arg(long, default_value = "professional")]
        template: String,
    },
    List,
    /// Print the resume document as JSON
    Show { id: Uuid },
    /// Render to HTML on stdout, or to a file in the output directory with --export
    Render {
        id: Uuid,
        #[arg(long)]
        export: bool,
    },
    /// Switch the layout
    Template { id: Uuid, template: String },
    /// Set one personal field on the resume only
    Field {
        id: Uuid,
        field: PersonalField,
        value: String,
    },
    Summary { id: Uuid, text: String },
    SectionAdd {
        id: Uuid,
        #[arg(long)]
        title: Option<String>,
    },
    SectionRename {
        id: Uuid,
        section: String,
        title: String,
    },
    SectionItem {
        id: Uuid,
        section: String,
        content: String,
    },
    SectionRemove { id: Uuid, section: String },
    RemoveWork { id: Uuid, entry: EntryId },
    RemoveEducation { id: Uuid, entry: EntryId },
    RemoveSkill {
        id: Uuid,
        category: SkillCategory,
        name: String,
    },
    Delete { id: Uuid },
}

pub async fn handle_command(
    command: Command,
    database: &Database,
    config: &ConfigManager,
) -> AssistantResult<()> {
    let profile = ProfileStore::new(Arc::new(database.kv_store()));

    match command {
        Command::Profile {
            action: ProfileAction::Show,
        } => {
            let snapshot = profile.snapshot().await?;
            println!("{}", serde_json::to_string_pretty(&snapshot.personal)?);
            print_work(snapshot.work_history.iter().map(|k| (k.id, &k.entry)));
            print_education(snapshot.education.iter().map(|k| (k.id, &k.entry)));
            print_skills(&snapshot.skills);
        }

        Command::Personal {
            action: PersonalAction::Set(args),
        } => {
            let updated = profile.update_personal_info(args.into()).await?;
            println!("✅ Personal information saved");
            println!("{}", serde_json::to_string_pretty(&updated)?);
        }

        Command::Work { action } => match action {
            WorkAction::Add(args) => {
                let id = profile.add_work_entry(args.into()).await?;
                println!("✅ Work entry added: {}", id);
            }
            WorkAction::Update { id, entry } => {
                profile.update_work_entry(id, entry.into()).await?;
                println!("✅ Work entry updated: {}", id);
            }
            WorkAction::Remove { id } => {
                let removed = profile.remove_work_entry(id).await?;
                println!("✅ Removed {} at {}", removed.title, removed.company);
            }
            WorkAction::List => {
                let history = profile.snapshot().await?.work_history;
                print_work(history.iter().map(|k| (k.id, &k.entry)));
            }
        },

        Command::Education { action } => match action {
            EducationAction::Add(args) => {
                let id = profile.add_education_entry(args.into()).await?;
                println!("✅ Education entry added: {}", id);
            }
            EducationAction::Update { id, entry } => {
                profile.update_education_entry(id, entry.into()).await?;
                println!("✅ Education entry updated: {}", id);
            }
            EducationAction::Remove { id } => {
                let removed = profile.remove_education_entry(id).await?;
                println!("✅ Removed {} at {}", removed.degree, removed.school);
            }
            EducationAction::List => {
                let history = profile.snapshot().await?.education;
                print_education(history.iter().map(|k| (k.id, &k.entry)));
            }
        },

        Command::Skill { action } => match action {
            SkillAction::Add {
                name,
                category,
                proficiency,
            } => {
                profile
                    .add_skill(Skill {
                        name: name.clone(),
                        category,
                        proficiency,
                    })
                    .await?;
                println!("✅ Added \"{}\" to {}", name, category.label());
            }
            SkillAction::Remove { category, name } => {
                profile.remove_skill(category, &name).await?;
                println!("✅ Removed \"{}\" from {}", name, category.label());
            }
            SkillAction::List => {
                print_skills(&profile.snapshot().await?.skills);
            }
        },

        Command::Resume { action } => {
            handle_resume(action, database, &profile, config).await?;
        }

        Command::Analyze { text, url } => {
            let input = match (text, url) {
                (Some(text), _) => AnalysisInput::Text(text),
                (None, Some(url)) => AnalysisInput::Url(url),
                (None, None) => AnalysisInput::Text(String::new()),
            };
            let analyzer = JobAnalyzer::from_config(config);
            let mut session = AnalysisSession::new();
            println!("Analyzing...");
            let analysis = session.submit(&analyzer, &input).await?;
            print_analysis(analysis);
        }
    }

    Ok(())
}

async fn handle_resume(
    action: ResumeAction,
    database: &Database,
    profile: &ProfileStore,
    config: &ConfigManager,
) -> AssistantResult<()> {
    let repo = ResumeRepository::new(database.pool());

    match action {
        ResumeAction::New { template } => {
            let template = TemplateId::from_identifier(&template);
            let document = repo.create(template).await?;
            println!("✅ Resume created: {} ({})", document.id, template);
        }

        ResumeAction::List => {
            let documents = repo.list().await?;
            if documents.is_empty() {
                println!("No resumes yet.");
            } else {
                println!(
                    "{:<38} {:<14} {:<12} {:<20}",
                    "ID", "Template", "Content", "Updated"
                );
                println!("{}", "-".repeat(84));
                for document in documents {
                    let state = if document.is_initialized() {
                        "ready"
                    } else {
                        "empty"
                    };
                    println!(
                        "{:<38} {:<14} {:<12} {:<20}",
                        document.id.to_string(),
                        document.template.as_str(),
                        state,
                        document.updated_at.format("%Y-%m-%d %H:%M")
                    );
                }
            }
        }

        ResumeAction::Show { id } => {
            let document = repo.require(id).await?;
            println!("{}", serde_json::to_string_pretty(&document)?);
        }

        ResumeAction::Render { id, export } => {
            let mut document = repo.require(id).await?;
            if !document.is_initialized() {
                ensure_content(&mut document, profile).await?;
                repo.save(&document).await?;
            }
            let html = render_document(&document);
            if export {
                let path = export_path(config, &document);
                let title = document
                    .content
                    .as_ref()
                    .map(|c| c.personal.full_name())
                    .unwrap_or_default();
                FsOps::write_file_safe(&path, &standalone_page(&title, &html)).await?;
                info!("Exported resume {} to {}", document.id, path.display());
                println!("✅ Exported to {}", path.display());
            } else {
                print!("{}", html);
            }
        }

        ResumeAction::Template { id, template } => {
            let mut document = repo.require(id).await?;
            document.template = TemplateId::from_identifier(&template);
            document.touch();
            repo.save(&document).await?;
            println!(
                "✅ Template set to {}: {}",
                document.template,
                document.template.description()
            );
            if !document.template.is_implemented() {
                println!("   This layout only renders a preview placeholder for now.");
            }
        }

        ResumeAction::Field { id, field, value } => {
            edit_resume(&repo, profile, id, |content| {
                content.set_personal_field(field, value);
                Ok(())
            })
            .await?;
            println!("✅ Resume updated");
        }

        ResumeAction::Summary { id, text } => {
            edit_resume(&repo, profile, id, |content| {
                content.set_summary(text);
                Ok(())
            })
            .await?;
            println!("✅ Summary updated");
        }

        ResumeAction::SectionAdd { id, title } => {
            let section_id = edit_resume(&repo, profile, id, |content| {
                let section_id = content.add_custom_section();
                if let Some(title) = title {
                    content.rename_custom_section(&section_id, title)?;
                }
                Ok(section_id)
            })
            .await?;
            println!("✅ Section added: {}", section_id);
        }

        ResumeAction::SectionRename { id, section, title } => {
            edit_resume(&repo, profile, id, |content| {
                content.rename_custom_section(&section, title)
            })
            .await?;
            println!("✅ Section renamed");
        }

        ResumeAction::SectionItem {
            id,
            section,
            content: item,
        } => {
            edit_resume(&repo, profile, id, |content| {
                content.add_section_item(&section, item)
            })
            .await?;
            println!("✅ Item added");
        }

        ResumeAction::SectionRemove { id, section } => {
            let removed = edit_resume(&repo, profile, id, |content| {
                content.remove_custom_section(&section)
            })
            .await?;
            println!("✅ Removed section \"{}\"", removed.title);
        }

        ResumeAction::RemoveWork { id, entry } => {
            edit_resume(&repo, profile, id, |content| content.remove_work_entry(entry)).await?;
            println!("✅ Work entry removed from resume");
        }

        ResumeAction::RemoveEducation { id, entry } => {
            edit_resume(&repo, profile, id, |content| {
                content.remove_education_entry(entry)
            })
            .await?;
            println!("✅ Education entry removed from resume");
        }

        ResumeAction::RemoveSkill { id, category, name } => {
            edit_resume(&repo, profile, id, |content| {
                content.remove_skill(category, &name)
            })
            .await?;
            println!("✅ Skill removed from resume");
        }

        ResumeAction::Delete { id } => {
            if repo.delete(id).await? {
                println!("✅ Resume deleted: {}", id);
            } else {
                error!("Resume {} not found for deletion", id);
                println!("❌ No resume found with id {}", id);
            }
        }
    }

    Ok(())
}

/// Load a resume, initialize its content if needed, apply `edit` and save.
/// Nothing is saved when `edit` fails.
async fn edit_resume<T>(
    repo: &ResumeRepository<'_>,
    profile: &ProfileStore,
    id: Uuid,
    edit: impl FnOnce(&mut ResumeContent) -> AssistantResult<T>,
) -> AssistantResult<T> {
    let mut document = repo.require(id).await?;
    let result = edit(ensure_content(&mut document, profile).await?)?;
    document.touch();
    repo.save(&document).await?;
    Ok(result)
}

fn export_path(config: &ConfigManager, document: &ResumeDocument) -> PathBuf {
    let full_name = document
        .content
        .as_ref()
        .map(|c| c.personal.full_name())
        .unwrap_or_default();
    config
        .environment
        .output_path
        .join(FsOps::export_file_name(&full_name, document.template.as_str()))
}

fn print_work<'a>(entries: impl Iterator<Item = (EntryId, &'a WorkEntry)>) {
    println!("Work history:");
    let mut any = false;
    for (id, job) in entries {
        any = true;
        println!("  {}  {} at {} ({})", id, job.title, job.company, work_date_range(job));
    }
    if !any {
        println!("  (none)");
    }
}

fn print_education<'a>(entries: impl Iterator<Item = (EntryId, &'a EducationEntry)>) {
    println!("Education:");
    let mut any = false;
    for (id, edu) in entries {
        any = true;
        println!(
            "  {}  {} at {} ({})",
            id,
            edu.degree,
            edu.school,
            education_date_range(edu)
        );
    }
    if !any {
        println!("  (none)");
    }
}

fn print_skills(skills: &crate::types::SkillSet) {
    println!("Skills:");
    if skills.is_empty() {
        println!("  (none)");
        return;
    }
    for (category, entries) in skills.non_empty() {
        let names: Vec<String> = entries
            .iter()
            .map(|s| match s.proficiency {
                Some(level) => format!("{} ({})", s.name, level),
                None => s.name.clone(),
            })
            .collect();
        println!("  {}: {}", category.label(), names.join(", "));
    }
}

fn print_analysis(analysis: &JobAnalysis) {
    println!("Skills match: {}%", analysis.skills_match.match_percentage);
    for (heading, keywords) in analysis.keywords.groups() {
        println!("{}:", heading);
        for keyword in keywords {
            let mark = if keyword.matches { "✓" } else { "✗" };
            println!("  {} {} ({})", mark, keyword.keyword, keyword.count);
        }
    }
    println!(
        "Matching skills: {}",
        analysis.skills_match.matching_skills.join(", ")
    );
    println!(
        "Missing skills: {}",
        analysis.skills_match.missing_skills.join(", ")
    );
}
