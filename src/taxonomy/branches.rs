/// Alias spellings for each canonical branch code. The code itself is
/// included so membership checks cover both spellings and codes.
pub const BRANCH_ALIASES: &[(&str, &[&str])] = &[
    (
        "cse",
        &[
            "computer science",
            "cs",
            "cse",
            "computer science and engineering",
        ],
    ),
    ("it", &["information technology", "it"]),
    ("ece", &["electronics and communication", "ece", "electronics"]),
    ("ee", &["electrical engineering", "ee", "electrical"]),
    ("me", &["mechanical engineering", "me", "mechanical"]),
    ("ce", &["civil engineering", "ce", "civil"]),
    ("all", &["all branches", "all", "any"]),
];

/// Partially compatible branches, used only for scoring, never for the
/// disqualifier gate.
pub const RELATED_BRANCHES: &[(&str, &[&str])] = &[
    ("cse", &["it", "ece"]),
    ("it", &["cse", "ece"]),
    ("ece", &["ee", "cse", "it"]),
    ("ee", &["ece"]),
    ("me", &["ce"]),
    ("ce", &["me"]),
];

/// Maps a free-text branch spelling to its canonical code. Unknown spellings
/// canonicalize to themselves, so relatedness lookups simply miss.
pub fn canonical_code(branch: &str) -> &str {
    let needle = branch.trim();
    for (code, aliases) in BRANCH_ALIASES {
        if *code == needle || aliases.contains(&needle) {
            return code;
        }
    }
    needle
}

/// Exact/alias branch equivalence. This is the rule the disqualifier gate
/// uses; relatedness deliberately plays no part here.
pub fn is_branch_match(candidate_branch: &str, required_branches: &[String]) -> bool {
    let candidate = candidate_branch.trim();

    for required in required_branches {
        let required = required.trim();

        if candidate == required {
            return true;
        }

        for (code, aliases) in BRANCH_ALIASES {
            let required_in_class = required == *code || aliases.contains(&required);
            let candidate_in_class = candidate == *code || aliases.contains(&candidate);
            if required_in_class && candidate_in_class {
                return true;
            }
        }
    }

    false
}

/// Whether two canonical codes are marked as related.
pub fn are_related(candidate_code: &str, required_code: &str) -> bool {
    RELATED_BRANCHES
        .iter()
        .find(|(code, _)| *code == candidate_code)
        .map(|(_, related)| related.contains(&required_code))
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonicalizes_known_spellings() {
        assert_eq!(canonical_code("information technology"), "it");
        assert_eq!(canonical_code("computer science"), "cse");
        assert_eq!(canonical_code("electronics"), "ece");
        assert_eq!(canonical_code("biotech"), "biotech");
    }

    #[test]
    fn alias_resolution_matches_equivalent_spellings() {
        let required = vec!["it".to_string()];
        assert!(is_branch_match("information technology", &required));
        assert!(!is_branch_match("mechanical engineering", &required));
    }

    #[test]
    fn relatedness_is_directional_data() {
        assert!(are_related("ece", "ee"));
        assert!(are_related("ee", "ece"));
        assert!(!are_related("me", "cse"));
        assert!(!are_related("biotech", "cse"));
    }
}
