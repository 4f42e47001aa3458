use serde::Serialize;

use crate::taxonomy::branches::is_branch_match;

use super::domain::{CandidateProfile, JobRequirements};

/// Machine-readable tag for a hard disqualification criterion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DisqualifierKind {
    Cgpa,
    Backlogs,
    TenthPercentage,
    TwelfthPercentage,
    Branch,
}

/// Raw value attached to a disqualifier so callers can render their own
/// messaging.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum RequirementValue {
    Decimal(f64),
    Count(u32),
    Text(String),
    List(Vec<String>),
}

/// A hard, binary criterion whose failure forecloses eligibility regardless
/// of composite score.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Disqualifier {
    #[serde(rename = "type")]
    pub kind: DisqualifierKind,
    pub message: String,
    pub current: RequirementValue,
    pub required: RequirementValue,
}

/// Evaluates every hard gate independently and collects all violations.
///
/// The branch gate resolves exact/alias equivalence only; related branches
/// still disqualify here even though the scoring curve would grant them
/// partial credit.
pub fn check_disqualifiers(
    candidate: &CandidateProfile,
    job: &JobRequirements,
) -> Vec<Disqualifier> {
    let mut disqualifiers = Vec::new();

    if candidate.cgpa < job.min_cgpa {
        disqualifiers.push(Disqualifier {
            kind: DisqualifierKind::Cgpa,
            message: format!(
                "CGPA {} is below minimum requirement of {}",
                fmt_decimal(candidate.cgpa),
                fmt_decimal(job.min_cgpa)
            ),
            current: RequirementValue::Decimal(candidate.cgpa),
            required: RequirementValue::Decimal(job.min_cgpa),
        });
    }

    if candidate.backlogs > job.max_backlogs {
        disqualifiers.push(Disqualifier {
            kind: DisqualifierKind::Backlogs,
            message: format!(
                "{} backlogs exceed maximum allowed ({})",
                candidate.backlogs, job.max_backlogs
            ),
            current: RequirementValue::Count(candidate.backlogs),
            required: RequirementValue::Count(job.max_backlogs),
        });
    }

    if job.min_tenth > 0.0 && candidate.tenth_percentage < job.min_tenth {
        disqualifiers.push(Disqualifier {
            kind: DisqualifierKind::TenthPercentage,
            message: format!(
                "10th percentage {}% is below minimum {}%",
                fmt_decimal(candidate.tenth_percentage),
                fmt_decimal(job.min_tenth)
            ),
            current: RequirementValue::Decimal(candidate.tenth_percentage),
            required: RequirementValue::Decimal(job.min_tenth),
        });
    }

    if job.min_twelfth > 0.0 && candidate.twelfth_percentage < job.min_twelfth {
        disqualifiers.push(Disqualifier {
            kind: DisqualifierKind::TwelfthPercentage,
            message: format!(
                "12th percentage {}% is below minimum {}%",
                fmt_decimal(candidate.twelfth_percentage),
                fmt_decimal(job.min_twelfth)
            ),
            current: RequirementValue::Decimal(candidate.twelfth_percentage),
            required: RequirementValue::Decimal(job.min_twelfth),
        });
    }

    if !job.accepts_all_branches() && !is_branch_match(&candidate.branch, &job.required_branches) {
        disqualifiers.push(Disqualifier {
            kind: DisqualifierKind::Branch,
            message: format!(
                "Branch \"{}\" not in required branches: {}",
                candidate.branch,
                job.required_branches.join(", ")
            ),
            current: RequirementValue::Text(candidate.branch.clone()),
            required: RequirementValue::List(job.required_branches.clone()),
        });
    }

    disqualifiers
}

/// Formats a decimal so whole numbers keep one decimal place, matching the
/// messaging the consuming layer already expects ("5.0", not "5").
fn fmt_decimal(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{value:.1}")
    } else {
        format!("{value}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::eligibility::domain::{CandidateProfile, JobRequirements};
    use serde_json::json;

    fn candidate(record: serde_json::Value) -> CandidateProfile {
        CandidateProfile::from_record(&record).expect("candidate coerces")
    }

    fn job(record: serde_json::Value) -> JobRequirements {
        JobRequirements::from_record(&record).expect("job coerces")
    }

    #[test]
    fn cgpa_message_embeds_both_values() {
        let found = check_disqualifiers(
            &candidate(json!({ "cgpa": 5.0 })),
            &job(json!({ "minCGPA": 7.0 })),
        );
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].kind, DisqualifierKind::Cgpa);
        assert!(found[0].message.contains("5.0"));
        assert!(found[0].message.contains("7.0"));
    }

    #[test]
    fn all_violations_are_collected() {
        let found = check_disqualifiers(
            &candidate(json!({
                "cgpa": 5.0,
                "backlogs": 3,
                "tenthPercentage": 50.0,
                "branch": "me",
            })),
            &job(json!({
                "minCGPA": 7.0,
                "maxBacklogs": 0,
                "minTenth": 60.0,
                "requiredBranches": ["cse", "it"],
            })),
        );

        let kinds: Vec<DisqualifierKind> = found.iter().map(|d| d.kind).collect();
        assert_eq!(
            kinds,
            vec![
                DisqualifierKind::Cgpa,
                DisqualifierKind::Backlogs,
                DisqualifierKind::TenthPercentage,
                DisqualifierKind::Branch,
            ]
        );
    }

    #[test]
    fn percentage_gates_only_apply_when_set() {
        let found = check_disqualifiers(
            &candidate(json!({ "tenthPercentage": 0, "twelfthPercentage": 0 })),
            &job(json!({})),
        );
        assert!(found.is_empty());
    }

    #[test]
    fn all_branches_sentinel_disables_the_branch_gate() {
        let found = check_disqualifiers(
            &candidate(json!({ "branch": "underwater basket weaving" })),
            &job(json!({ "requiredBranches": ["all"] })),
        );
        assert!(found.is_empty());
    }

    #[test]
    fn branch_alias_passes_the_gate() {
        let found = check_disqualifiers(
            &candidate(json!({ "branch": "Information Technology" })),
            &job(json!({ "requiredBranches": ["it"] })),
        );
        assert!(found.is_empty());
    }

    #[test]
    fn related_branch_still_fails_the_gate() {
        // The gate knows only exact/alias equivalence; relatedness is for
        // scoring. "ece" vs ["ee"] disqualifies even though the curve would
        // award 50 points.
        let found = check_disqualifiers(
            &candidate(json!({ "branch": "ece" })),
            &job(json!({ "requiredBranches": ["ee"] })),
        );
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].kind, DisqualifierKind::Branch);
    }
}
