use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnalysisInputKind {
    Text,
    Url,
}

impl AnalysisInputKind {
    /// Message shown when the input for this mode is blank
    pub fn empty_message(&self) -> &'static str {
        match self {
            AnalysisInputKind::Text => "Please enter a job description",
            AnalysisInputKind::Url => "Please enter a job posting URL",
        }
    }
}

/// What the user submitted: pasted posting text or a posting URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "lowercase")]
pub enum AnalysisInput {
    Text(String),
    Url(String),
}

impl AnalysisInput {
    pub fn kind(&self) -> AnalysisInputKind {
        match self {
            AnalysisInput::Text(_) => AnalysisInputKind::Text,
            AnalysisInput::Url(_) => AnalysisInputKind::Url,
        }
    }

    pub fn value(&self) -> &str {
        match self {
            AnalysisInput::Text(value) | AnalysisInput::Url(value) => value,
        }
    }

    pub fn is_blank(&self) -> bool {
        self.value().trim().is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeywordMatch {
    pub keyword: String,
    pub count: u32,
    /// Whether the keyword is already present on the user's profile
    pub matches: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeywordAnalysis {
    pub technical: Vec<KeywordMatch>,
    pub soft: Vec<KeywordMatch>,
    pub tools: Vec<KeywordMatch>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillsMatch {
    #[serde(rename = "match")]
    pub match_percentage: u8,
    pub matching_skills: Vec<String>,
    pub missing_skills: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobAnalysis {
    pub keywords: KeywordAnalysis,
    pub skills_match: SkillsMatch,
}

impl KeywordAnalysis {
    /// All groups with their display headings, in display order
    pub fn groups(&self) -> [(&'static str, &[KeywordMatch]); 3] {
        [
            ("Technical Skills", &self.technical),
            ("Soft Skills", &self.soft),
            ("Tools & Technologies", &self.tools),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_kind_and_blankness() {
        let input = AnalysisInput::Url("   ".to_string());
        assert_eq!(input.kind(), AnalysisInputKind::Url);
        assert!(input.is_blank());
        assert!(!AnalysisInput::Text("Senior engineer".to_string()).is_blank());
    }

    #[test]
    fn test_skills_match_serializes_match_key() {
        let value = serde_json::to_value(SkillsMatch {
            match_percentage: 65,
            ..Default::default()
        })
        .unwrap();
        assert_eq!(value["match"], 65);
        assert!(value.get("matchingSkills").is_some());
    }
}
