//! Eligibility evaluation of candidates against job postings.
//!
//! Evaluation runs in two phases. Hard disqualifiers (CGPA floor, backlog
//! ceiling, board percentages, branch gate) are checked first and, if any
//! fail, the candidate is returned immediately with a zero score. Surviving
//! candidates receive four sub-scores combined under fixed weights, a tier,
//! improvement suggestions, and a human-readable analysis.

mod disqualifiers;
mod domain;
mod report;
mod scoring;

use serde::Serialize;
use serde_json::Value;
use tracing::debug;

use crate::error::RecordError;
use crate::matching::{match_skills, round2, RequiredSkills};

pub use disqualifiers::{check_disqualifiers, Disqualifier, DisqualifierKind, RequirementValue};
pub use domain::{CandidateProfile, JobRequirements};
pub use report::{
    EligibilityLevel, EligibilityReport, RequirementComparison, ScoreBreakdown, WeightedScore,
};
pub use scoring::{branch_score, cgpa_score, experience_score, SubScores, SCORING_WEIGHTS};

use report::{analysis_text, disqualifier_suggestions, improvement_suggestions};

/// Evaluates one candidate record against one job record.
///
/// `precomputed_skill_match` short-circuits the skill matcher when an earlier
/// stage already computed a percentage (it is clamped to [0, 100]). Without
/// it, a job with no skill requirements at all scores 100 for the skill
/// component; otherwise the matcher's overall percentage is used.
pub fn calculate_eligibility(
    candidate_record: &Value,
    job_record: &Value,
    precomputed_skill_match: Option<f64>,
) -> Result<EligibilityReport, RecordError> {
    let candidate = CandidateProfile::from_record(candidate_record)?;
    let job = JobRequirements::from_record(job_record)?;

    Ok(evaluate(&candidate, &job, precomputed_skill_match))
}

fn evaluate(
    candidate: &CandidateProfile,
    job: &JobRequirements,
    precomputed_skill_match: Option<f64>,
) -> EligibilityReport {
    let disqualifiers = check_disqualifiers(candidate, job);
    if !disqualifiers.is_empty() {
        debug!(
            candidate = %candidate.name,
            count = disqualifiers.len(),
            "candidate disqualified"
        );
        let suggestions = disqualifier_suggestions(&disqualifiers);
        return EligibilityReport {
            is_eligible: false,
            eligibility_level: EligibilityLevel::NotEligible,
            total_score: 0.0,
            scores: None,
            disqualifiers,
            suggestions,
            analysis: "Student does not meet minimum requirements for this position.".to_string(),
            breakdown: None,
        };
    }

    let skill_match = match precomputed_skill_match {
        Some(value) => value.clamp(0.0, 100.0),
        None => skill_match_score(candidate, job),
    };

    let scores = SubScores {
        skill_match,
        cgpa: cgpa_score(candidate.cgpa, job.min_cgpa),
        branch_match: branch_score(&candidate.branch, job),
        experience: experience_score(candidate.experience_months, job.min_experience_months),
    };

    let total_score = round2(scores.weighted_total());
    let level = EligibilityLevel::for_score(total_score);

    debug!(
        candidate = %candidate.name,
        total_score,
        level = level.label(),
        "candidate scored"
    );

    EligibilityReport {
        is_eligible: level != EligibilityLevel::NotEligible,
        eligibility_level: level,
        total_score,
        scores: Some(ScoreBreakdown::from_sub_scores(&scores)),
        disqualifiers: Vec::new(),
        suggestions: improvement_suggestions(&scores, candidate, job),
        analysis: analysis_text(&scores, level),
        breakdown: Some(RequirementComparison::new(candidate, job)),
    }
}

/// A job with no skill requirements at all is a perfect skill match; any
/// requirement list routes through the matcher, whose empty-tier percentages
/// are 0, not 100.
fn skill_match_score(candidate: &CandidateProfile, job: &JobRequirements) -> f64 {
    if job.mandatory_skills.is_empty() && job.preferred_skills.is_empty() {
        return 100.0;
    }

    let required = RequiredSkills {
        mandatory: job.mandatory_skills.clone(),
        preferred: job.preferred_skills.clone(),
    };
    match_skills(&candidate.skills, &required).match_percentage
}

/// Identity of one candidate in a batch result.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CandidateSummary {
    pub name: String,
    pub email: String,
    pub branch: String,
}

/// One candidate's batch entry: identity plus the flattened report.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BatchOutcome {
    #[serde(flatten)]
    pub candidate: CandidateSummary,
    #[serde(flatten)]
    pub report: EligibilityReport,
}

/// Evaluates every candidate against one job and ranks the results by total
/// score, highest first. The sort is stable, so candidates with equal scores
/// keep their input order; disqualified candidates sink to the bottom with
/// their zero scores.
pub fn batch_calculate(
    candidate_records: &[Value],
    job_record: &Value,
) -> Result<Vec<BatchOutcome>, RecordError> {
    let job = JobRequirements::from_record(job_record)?;

    let mut outcomes = Vec::with_capacity(candidate_records.len());
    for record in candidate_records {
        let candidate = CandidateProfile::from_record(record)?;
        // The summary echoes the branch as submitted; only evaluation uses
        // the lowercased form.
        let branch = domain::raw_branch(record)?;
        let report = evaluate(&candidate, &job, None);
        outcomes.push(BatchOutcome {
            candidate: CandidateSummary {
                name: candidate.name,
                email: candidate.email,
                branch,
            },
            report,
        });
    }

    outcomes.sort_by(|a, b| b.report.total_score.total_cmp(&a.report.total_score));

    debug!(candidates = outcomes.len(), "batch evaluated");
    Ok(outcomes)
}
