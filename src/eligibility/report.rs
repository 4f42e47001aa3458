use std::collections::BTreeSet;

use serde::Serialize;

use crate::matching::round2;

use super::disqualifiers::{Disqualifier, DisqualifierKind};
use super::domain::{CandidateProfile, JobRequirements};
use super::scoring::{SubScores, SCORING_WEIGHTS};

/// Eligibility tier derived from the composite score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EligibilityLevel {
    HighlyEligible,
    Eligible,
    PartiallyEligible,
    NotEligible,
}

impl EligibilityLevel {
    pub const fn label(self) -> &'static str {
        match self {
            Self::HighlyEligible => "highly_eligible",
            Self::Eligible => "eligible",
            Self::PartiallyEligible => "partially_eligible",
            Self::NotEligible => "not_eligible",
        }
    }

    /// Non-overlapping thresholds, evaluated in descending order.
    pub fn for_score(score: f64) -> Self {
        if score >= 80.0 {
            Self::HighlyEligible
        } else if score >= 60.0 {
            Self::Eligible
        } else if score >= 40.0 {
            Self::PartiallyEligible
        } else {
            Self::NotEligible
        }
    }

    const fn headline(self) -> &'static str {
        match self {
            Self::HighlyEligible => "Excellent match! Strong candidate for this position.",
            Self::Eligible => "Good match. Candidate meets most requirements.",
            Self::PartiallyEligible => "Partial match. Some areas need improvement.",
            Self::NotEligible => "Low match. Significant gaps in requirements.",
        }
    }
}

/// One weighted sub-score of the breakdown.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WeightedScore {
    pub score: f64,
    pub weight: f64,
    pub weighted_score: f64,
}

impl WeightedScore {
    fn new(score: f64, weight: f64) -> Self {
        Self {
            score: round2(score),
            weight,
            weighted_score: round2(score * weight),
        }
    }
}

/// The four weighted sub-scores of an eligible candidate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreBreakdown {
    pub skill_match: WeightedScore,
    pub cgpa: WeightedScore,
    pub branch_match: WeightedScore,
    pub experience: WeightedScore,
}

impl ScoreBreakdown {
    pub(super) fn from_sub_scores(scores: &SubScores) -> Self {
        Self {
            skill_match: WeightedScore::new(scores.skill_match, SCORING_WEIGHTS.skill_match),
            cgpa: WeightedScore::new(scores.cgpa, SCORING_WEIGHTS.cgpa),
            branch_match: WeightedScore::new(scores.branch_match, SCORING_WEIGHTS.branch_match),
            experience: WeightedScore::new(scores.experience, SCORING_WEIGHTS.experience),
        }
    }
}

/// Raw candidate-vs-requirement values echoed back for display.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RequirementComparison {
    pub student_cgpa: f64,
    pub required_cgpa: f64,
    pub student_branch: String,
    pub required_branches: Vec<String>,
    pub student_experience: u32,
    pub required_experience: u32,
}

impl RequirementComparison {
    pub(super) fn new(candidate: &CandidateProfile, job: &JobRequirements) -> Self {
        Self {
            student_cgpa: candidate.cgpa,
            required_cgpa: job.min_cgpa,
            student_branch: candidate.branch.clone(),
            required_branches: job.required_branches.clone(),
            student_experience: candidate.experience_months,
            required_experience: job.min_experience_months,
        }
    }
}

/// Immutable result of one eligibility evaluation.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EligibilityReport {
    pub is_eligible: bool,
    pub eligibility_level: EligibilityLevel,
    pub total_score: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scores: Option<ScoreBreakdown>,
    pub disqualifiers: Vec<Disqualifier>,
    pub suggestions: Vec<String>,
    pub analysis: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub breakdown: Option<RequirementComparison>,
}

/// Per-tier headline plus strengths (sub-scores >= 80) and areas to improve
/// (< 60), named for humans.
pub(super) fn analysis_text(scores: &SubScores, level: EligibilityLevel) -> String {
    let named = [
        ("Skill Match", scores.skill_match),
        ("CGPA", scores.cgpa),
        ("Branch Match", scores.branch_match),
        ("Experience", scores.experience),
    ];

    let mut parts = vec![level.headline().to_string()];

    let strengths: Vec<&str> = named
        .iter()
        .filter(|(_, score)| *score >= 80.0)
        .map(|(name, _)| *name)
        .collect();
    if !strengths.is_empty() {
        parts.push(format!("Strengths: {}.", strengths.join(", ")));
    }

    let weaknesses: Vec<&str> = named
        .iter()
        .filter(|(_, score)| *score < 60.0)
        .map(|(name, _)| *name)
        .collect();
    if !weaknesses.is_empty() {
        parts.push(format!("Areas to improve: {}.", weaknesses.join(", ")));
    }

    parts.join(" ")
}

/// Improvement suggestions for a scored (non-disqualified) candidate.
pub(super) fn improvement_suggestions(
    scores: &SubScores,
    candidate: &CandidateProfile,
    job: &JobRequirements,
) -> Vec<String> {
    let mut suggestions = Vec::new();

    if scores.skill_match < 80.0 {
        let held: BTreeSet<&str> = candidate.skills.iter().map(String::as_str).collect();

        let missing_mandatory: Vec<&str> = job
            .mandatory_skills
            .iter()
            .map(String::as_str)
            .filter(|skill| !held.contains(skill))
            .take(5)
            .collect();
        if !missing_mandatory.is_empty() {
            suggestions.push(format!(
                "Learn these required skills: {}",
                missing_mandatory.join(", ")
            ));
        }

        let missing_preferred: Vec<&str> = job
            .preferred_skills
            .iter()
            .map(String::as_str)
            .filter(|skill| !held.contains(skill))
            .take(3)
            .collect();
        if !missing_preferred.is_empty() {
            suggestions.push(format!("Consider learning: {}", missing_preferred.join(", ")));
        }
    }

    if scores.experience < 70.0 && job.min_experience_months > 0 {
        let gap = job
            .min_experience_months
            .saturating_sub(candidate.experience_months);
        if gap > 0 {
            suggestions.push(format!(
                "Gain {gap} more months of relevant experience through internships or projects"
            ));
        }
    }

    if scores.skill_match < 60.0 {
        suggestions.push("Build projects showcasing required technical skills".to_string());
    }

    if scores.experience < 60.0 {
        suggestions
            .push("Participate in hackathons or contribute to open-source projects".to_string());
    }

    suggestions
}

/// Suggestions derived purely from disqualifier kinds.
pub(super) fn disqualifier_suggestions(disqualifiers: &[Disqualifier]) -> Vec<String> {
    let mut suggestions = Vec::new();

    for disqualifier in disqualifiers {
        match disqualifier.kind {
            DisqualifierKind::Cgpa => suggestions
                .push("Focus on improving academic performance in remaining semesters".to_string()),
            DisqualifierKind::Backlogs => {
                suggestions.push("Clear pending backlogs before applying".to_string())
            }
            DisqualifierKind::Branch => suggestions.push(
                "This position may not be suitable for your branch. Look for roles open to all branches."
                    .to_string(),
            ),
            DisqualifierKind::TenthPercentage | DisqualifierKind::TwelfthPercentage => {}
        }
    }

    suggestions
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scores(skill: f64, cgpa: f64, branch: f64, experience: f64) -> SubScores {
        SubScores {
            skill_match: skill,
            cgpa,
            branch_match: branch,
            experience,
        }
    }

    #[test]
    fn tier_thresholds_are_descending_and_non_overlapping() {
        assert_eq!(EligibilityLevel::for_score(92.0), EligibilityLevel::HighlyEligible);
        assert_eq!(EligibilityLevel::for_score(80.0), EligibilityLevel::HighlyEligible);
        assert_eq!(EligibilityLevel::for_score(79.99), EligibilityLevel::Eligible);
        assert_eq!(EligibilityLevel::for_score(60.0), EligibilityLevel::Eligible);
        assert_eq!(EligibilityLevel::for_score(40.0), EligibilityLevel::PartiallyEligible);
        assert_eq!(EligibilityLevel::for_score(39.99), EligibilityLevel::NotEligible);
    }

    #[test]
    fn analysis_names_strengths_and_weaknesses() {
        let text = analysis_text(
            &scores(85.0, 55.0, 100.0, 70.0),
            EligibilityLevel::Eligible,
        );
        assert!(text.starts_with("Good match."));
        assert!(text.contains("Strengths: Skill Match, Branch Match."));
        assert!(text.contains("Areas to improve: CGPA."));
    }

    #[test]
    fn analysis_omits_empty_clauses() {
        let text = analysis_text(
            &scores(70.0, 70.0, 70.0, 70.0),
            EligibilityLevel::Eligible,
        );
        assert!(!text.contains("Strengths"));
        assert!(!text.contains("Areas to improve"));
    }

    #[test]
    fn breakdown_rounds_weighted_contributions() {
        let breakdown = ScoreBreakdown::from_sub_scores(&scores(83.333_333, 50.0, 100.0, 70.0));
        assert_eq!(breakdown.skill_match.score, 83.33);
        assert_eq!(breakdown.skill_match.weighted_score, 33.33);
        assert_eq!(breakdown.cgpa.weight, 0.3);
    }

    #[test]
    fn disqualifier_suggestions_cover_known_kinds() {
        use crate::eligibility::disqualifiers::RequirementValue;

        let disqualifiers = vec![
            Disqualifier {
                kind: DisqualifierKind::Cgpa,
                message: String::new(),
                current: RequirementValue::Decimal(5.0),
                required: RequirementValue::Decimal(7.0),
            },
            Disqualifier {
                kind: DisqualifierKind::Backlogs,
                message: String::new(),
                current: RequirementValue::Count(3),
                required: RequirementValue::Count(0),
            },
        ];

        let suggestions = disqualifier_suggestions(&disqualifiers);
        assert_eq!(suggestions.len(), 2);
        assert!(suggestions[0].contains("academic performance"));
        assert!(suggestions[1].contains("backlogs"));
    }
}
