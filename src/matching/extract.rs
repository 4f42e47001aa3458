use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use crate::taxonomy::skills::{
    category_label, title_case, DOMAIN_KEYWORDS, SKILL_CATEGORIES, SOFT_SKILLS, TOOL_KEYWORDS,
};

/// Threshold below which a skill token needs word-boundary anchoring: `"r"`
/// or `"go"` must not fire inside unrelated words.
const SHORT_SKILL_LEN: usize = 3;

/// Technical skill found in free text, tagged with its taxonomy category.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategorizedSkill {
    pub skill: String,
    pub confidence: f64,
    pub category: String,
}

/// Soft skill, tool, or domain tag found in free text.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DetectedSkill {
    pub skill: String,
    pub confidence: f64,
}

/// Categorized output of a taxonomy sweep over resume text.
#[derive(Debug, Clone, Default, Serialize)]
pub struct SkillExtraction {
    pub technical: Vec<CategorizedSkill>,
    pub soft: Vec<DetectedSkill>,
    pub tools: Vec<DetectedSkill>,
    pub domains: Vec<DetectedSkill>,
}

struct TaxonomyEntry {
    skill: &'static str,
    category: &'static str,
    boundary: Option<Regex>,
}

static TAXONOMY_SWEEP: LazyLock<Vec<TaxonomyEntry>> = LazyLock::new(|| {
    SKILL_CATEGORIES
        .iter()
        .flat_map(|(category, skills)| {
            skills.iter().map(move |skill| TaxonomyEntry {
                skill,
                category,
                boundary: (skill.len() <= SHORT_SKILL_LEN).then(|| {
                    Regex::new(&format!(r"\b{}\b", regex::escape(skill)))
                        .expect("escaped literal compiles")
                }),
            })
        })
        .collect()
});

/// Sweeps the taxonomy over arbitrary text and returns every skill found.
///
/// Skills of three characters or fewer match with word-boundary anchoring
/// (confidence 0.90); longer skills match on case-insensitive containment
/// (0.85). Soft skills score 0.75, tools 0.80, inferred domain tags 0.70.
/// A literal skill string is reported at most once; the first taxonomy hit
/// wins.
pub fn extract_skills(text: &str) -> SkillExtraction {
    let text_lower = text.to_lowercase();

    let mut technical = Vec::new();
    let mut found: HashSet<&str> = HashSet::new();

    for entry in TAXONOMY_SWEEP.iter() {
        let (hit, confidence) = match &entry.boundary {
            Some(pattern) => (pattern.is_match(&text_lower), 0.9),
            None => (text_lower.contains(entry.skill), 0.85),
        };

        if hit && found.insert(entry.skill) {
            technical.push(CategorizedSkill {
                skill: entry.skill.to_string(),
                confidence,
                category: category_label(entry.category),
            });
        }
    }

    let soft = SOFT_SKILLS
        .iter()
        .filter(|skill| text_lower.contains(*skill))
        .map(|skill| DetectedSkill {
            skill: title_case(skill),
            confidence: 0.75,
        })
        .collect();

    let tools = TOOL_KEYWORDS
        .iter()
        .filter(|tool| text_lower.contains(*tool))
        .map(|tool| DetectedSkill {
            skill: title_case(tool),
            confidence: 0.8,
        })
        .collect();

    let domains = DOMAIN_KEYWORDS
        .iter()
        .filter(|(_, keywords)| keywords.iter().any(|kw| text_lower.contains(kw)))
        .map(|(domain, _)| DetectedSkill {
            skill: domain_label(domain),
            confidence: 0.7,
        })
        .collect();

    SkillExtraction {
        technical,
        soft,
        tools,
        domains,
    }
}

fn domain_label(domain: &str) -> String {
    match domain {
        "iot" | "ai" | "saas" => domain.to_uppercase(),
        other => title_case(other),
    }
}
