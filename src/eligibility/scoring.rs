use crate::taxonomy::branches::{are_related, canonical_code, is_branch_match};

use super::domain::JobRequirements;

/// CGPA scale maximum.
pub const MAX_CGPA: f64 = 10.0;

/// Fixed weights for the composite score. Must sum to exactly 1.0.
#[derive(Debug, Clone, Copy)]
pub struct Weights {
    pub skill_match: f64,
    pub cgpa: f64,
    pub branch_match: f64,
    pub experience: f64,
}

impl Weights {
    pub fn sum(&self) -> f64 {
        self.skill_match + self.cgpa + self.branch_match + self.experience
    }
}

pub const SCORING_WEIGHTS: Weights = Weights {
    skill_match: 0.4,
    cgpa: 0.3,
    branch_match: 0.2,
    experience: 0.1,
};

/// Raw sub-scores, each bounded to [0, 100].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SubScores {
    pub skill_match: f64,
    pub cgpa: f64,
    pub branch_match: f64,
    pub experience: f64,
}

impl SubScores {
    pub fn weighted_total(&self) -> f64 {
        self.skill_match * SCORING_WEIGHTS.skill_match
            + self.cgpa * SCORING_WEIGHTS.cgpa
            + self.branch_match * SCORING_WEIGHTS.branch_match
            + self.experience * SCORING_WEIGHTS.experience
    }
}

/// CGPA curve: 100 at the scale maximum, 50 at the job minimum, linear in
/// between; below the minimum the score is capped at 50 and scaled by
/// absolute standing. Reaching this interpolation implies `min < 10`, so
/// the denominator is never zero; a minimum at the scale maximum falls into
/// the first arm.
pub fn cgpa_score(cgpa: f64, min_cgpa: f64) -> f64 {
    if cgpa >= MAX_CGPA {
        return 100.0;
    }

    if cgpa < min_cgpa {
        return (cgpa / MAX_CGPA) * 50.0;
    }

    50.0 + (cgpa - min_cgpa) / (MAX_CGPA - min_cgpa) * 50.0
}

/// Branch curve: 100 for the `"all"` sentinel or an exact/alias match, 50
/// for a related canonical code, otherwise 0.
pub fn branch_score(candidate_branch: &str, job: &JobRequirements) -> f64 {
    if job.accepts_all_branches() {
        return 100.0;
    }

    if is_branch_match(candidate_branch, &job.required_branches) {
        return 100.0;
    }

    let candidate_code = canonical_code(candidate_branch);
    let related = job
        .required_branches
        .iter()
        .map(|required| canonical_code(required))
        .any(|required_code| are_related(candidate_code, required_code));

    if related {
        50.0
    } else {
        0.0
    }
}

/// Experience curve. With no requirement, 70 is the floor and any experience
/// earns a +2/month bonus; with a requirement met, the floor is 80 with the
/// same surplus bonus; unmet requirements earn linear partial credit capped
/// at 60.
pub fn experience_score(months: u32, min_months: u32) -> f64 {
    let months = f64::from(months);
    let min_months = f64::from(min_months);

    if min_months == 0.0 {
        if months > 0.0 {
            return (70.0 + months * 2.0).min(100.0);
        }
        return 70.0;
    }

    if months >= min_months {
        return (80.0 + (months - min_months) * 2.0).min(100.0);
    }

    (months / min_months) * 60.0
}
