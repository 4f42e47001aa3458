//! Skill extraction, matching, and suggestion algorithms.

mod extract;
mod matcher;
mod suggest;

pub use extract::{extract_skills, CategorizedSkill, DetectedSkill, SkillExtraction};
pub use matcher::{match_skills, RequiredSkills, SkillMatchReport, TierMatch};
pub use suggest::suggest_skills;

/// Two-decimal rounding applied to every externally visible percentage.
pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::round2;

    #[test]
    fn rounds_to_two_decimals() {
        assert_eq!(round2(83.333_333), 83.33);
        assert_eq!(round2(66.666_666), 66.67);
        assert_eq!(round2(100.0), 100.0);
    }
}
