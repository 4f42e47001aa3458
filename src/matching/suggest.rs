use std::collections::BTreeSet;

use crate::taxonomy::skills::{ROLE_BUNDLES, SKILL_ADJACENCY};

const MAX_SUGGESTIONS: usize = 10;

/// Proposes skills to learn next, based on adjacency to skills already held
/// and on bundles for the (optional) target role. Adjacency-derived
/// suggestions come first; duplicates and already-held skills are dropped;
/// at most ten suggestions are returned.
pub fn suggest_skills(current_skills: &[String], target_role: &str) -> Vec<String> {
    let current: BTreeSet<String> = current_skills.iter().map(|s| s.to_lowercase()).collect();

    let mut suggestions: Vec<String> = Vec::new();
    let mut seen: BTreeSet<String> = BTreeSet::new();

    let mut push = |skill: &str, suggestions: &mut Vec<String>, seen: &mut BTreeSet<String>| {
        let key = skill.to_lowercase();
        if !current.contains(&key) && seen.insert(key) {
            suggestions.push(skill.to_string());
        }
    };

    for (held, related) in SKILL_ADJACENCY {
        if current.contains(*held) {
            for skill in *related {
                push(skill, &mut suggestions, &mut seen);
            }
        }
    }

    let role = target_role.to_lowercase();
    for (label, bundle) in ROLE_BUNDLES {
        if role.contains(label) {
            for skill in *bundle {
                push(skill, &mut suggestions, &mut seen);
            }
        }
    }

    suggestions.truncate(MAX_SUGGESTIONS);
    suggestions
}
