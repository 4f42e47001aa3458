use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::taxonomy::skills::SKILL_ALIASES;

use super::round2;

/// Job requirement lists consumed by [`match_skills`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RequiredSkills {
    #[serde(default)]
    pub mandatory: Vec<String>,
    #[serde(default)]
    pub preferred: Vec<String>,
}

/// Matched/missing split for one requirement tier.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TierMatch {
    pub matched: Vec<String>,
    pub missing: Vec<String>,
    pub percentage: f64,
}

/// Full outcome of matching a candidate skill set against a job's lists.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillMatchReport {
    pub match_percentage: f64,
    pub mandatory: TierMatch,
    pub preferred: TierMatch,
    pub total_required: usize,
    pub total_matched: usize,
    pub candidate_extra_skills: Vec<String>,
}

/// Expands a normalized skill set with both directions of the alias map, so
/// `"js"` and `"javascript"` become mutually discoverable. Expanding an
/// already-expanded set changes nothing.
fn expand_aliases(skills: &BTreeSet<String>) -> BTreeSet<String> {
    let mut expanded = skills.clone();

    for skill in skills {
        for (short, long) in SKILL_ALIASES {
            if skill == short {
                expanded.insert((*long).to_string());
            } else if skill == long {
                expanded.insert((*short).to_string());
            }
        }
    }

    expanded
}

/// Tests whether one required skill is covered by the candidate set:
/// exact match, containment either direction, then token overlap of at
/// least half the smaller token set for multi-word skills.
fn skill_matches(required_skill: &str, candidate_skills: &BTreeSet<String>) -> bool {
    if candidate_skills.contains(required_skill) {
        return true;
    }

    let required_tokens: BTreeSet<&str> = required_skill.split_whitespace().collect();

    for skill in candidate_skills {
        if skill.contains(required_skill) || required_skill.contains(skill.as_str()) {
            return true;
        }

        let skill_tokens: BTreeSet<&str> = skill.split_whitespace().collect();
        let overlap = required_tokens.intersection(&skill_tokens).count();
        let smaller = required_tokens.len().min(skill_tokens.len());
        if smaller > 0 && overlap * 2 >= smaller {
            return true;
        }
    }

    false
}

/// Matches candidate skills against a job's mandatory and preferred lists.
///
/// Percentages use a `max(1, len)` denominator, so an empty mandatory list
/// contributes 0%, not 100%. Callers that want the "no requirements at all"
/// case to score 100 must handle it themselves before delegating here.
pub fn match_skills(candidate_skills: &[String], required: &RequiredSkills) -> SkillMatchReport {
    let candidate_set: BTreeSet<String> = candidate_skills
        .iter()
        .map(|s| s.trim().to_lowercase())
        .collect();
    let expanded = expand_aliases(&candidate_set);

    let mandatory: Vec<String> = required
        .mandatory
        .iter()
        .map(|s| s.trim().to_lowercase())
        .collect();
    let preferred: Vec<String> = required
        .preferred
        .iter()
        .map(|s| s.trim().to_lowercase())
        .collect();

    let (mandatory_matched, mandatory_missing): (Vec<String>, Vec<String>) = mandatory
        .iter()
        .cloned()
        .partition(|skill| skill_matches(skill, &expanded));
    let (preferred_matched, preferred_missing): (Vec<String>, Vec<String>) = preferred
        .iter()
        .cloned()
        .partition(|skill| skill_matches(skill, &expanded));

    let mandatory_percentage = mandatory_matched.len() as f64 / mandatory.len().max(1) as f64 * 100.0;
    let preferred_percentage = preferred_matched.len() as f64 / preferred.len().max(1) as f64 * 100.0;
    let overall = mandatory_percentage * 0.7 + preferred_percentage * 0.3;

    let required_set: BTreeSet<&str> = mandatory
        .iter()
        .chain(preferred.iter())
        .map(String::as_str)
        .collect();
    let candidate_extra_skills: Vec<String> = expanded
        .iter()
        .filter(|skill| !required_set.contains(skill.as_str()))
        .take(10)
        .cloned()
        .collect();

    let total_matched = mandatory_matched.len() + preferred_matched.len();

    SkillMatchReport {
        match_percentage: round2(overall),
        mandatory: TierMatch {
            matched: mandatory_matched,
            missing: mandatory_missing,
            percentage: round2(mandatory_percentage),
        },
        preferred: TierMatch {
            matched: preferred_matched,
            missing: preferred_missing,
            percentage: round2(preferred_percentage),
        },
        total_required: mandatory.len() + preferred.len(),
        total_matched,
        candidate_extra_skills,
    }
}
