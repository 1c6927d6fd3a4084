//! Fixed report returned by the analyzer for every valid submission

use super::types::{JobAnalysis, KeywordAnalysis, KeywordMatch, SkillsMatch};

fn keywords(items: &[(&str, u32, bool)]) -> Vec<KeywordMatch> {
    items
        .iter()
        .map(|&(keyword, count, matches)| KeywordMatch {
            keyword: keyword.to_string(),
            count,
            matches,
        })
        .collect()
}

fn names(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

pub(super) fn sample_analysis() -> JobAnalysis {
    JobAnalysis {
        keywords: KeywordAnalysis {
            technical: keywords(&[
                ("React.js", 5, true),
                ("TypeScript", 3, true),
                ("Node.js", 2, false),
                ("GraphQL", 2, false),
                ("AWS", 1, false),
            ]),
            soft: keywords(&[
                ("Communication", 3, true),
                ("Team player", 2, true),
                ("Problem solving", 2, false),
                ("Leadership", 1, false),
            ]),
            tools: keywords(&[("Git", 2, true), ("Docker", 1, false), ("Jira", 1, false)]),
        },
        skills_match: SkillsMatch {
            match_percentage: 65,
            matching_skills: names(&["React.js", "TypeScript", "Communication", "Team player", "Git"]),
            missing_skills: names(&[
                "Node.js",
                "GraphQL",
                "AWS",
                "Problem solving",
                "Leadership",
                "Docker",
                "Jira",
            ]),
        },
    }
}
