use placement_ai::{batch_calculate, calculate_eligibility, DisqualifierKind, EligibilityLevel};
use serde_json::{json, Value};

fn strong_candidate() -> Value {
    json!({
        "name": "Asha Rao",
        "email": "asha@example.edu",
        "branch": "cse",
        "cgpa": 9.0,
        "skills": ["Python", "SQL"],
        "experienceMonths": 0,
        "backlogs": 0,
    })
}

fn backend_job() -> Value {
    json!({
        "title": "Backend Intern",
        "company": "Initech",
        "requiredBranches": ["cse"],
        "minCGPA": 7.0,
        "mandatorySkills": ["python"],
        "preferredSkills": ["sql", "docker"],
    })
}

#[test]
fn strong_candidate_is_highly_eligible() {
    let report =
        calculate_eligibility(&strong_candidate(), &backend_job(), None).expect("evaluates");

    // skill 85 (mandatory full, preferred half), cgpa 83.33, branch 100,
    // experience floor 70, weighted 0.4/0.3/0.2/0.1.
    assert_eq!(report.total_score, 86.0);
    assert!(report.is_eligible);
    assert_eq!(report.eligibility_level, EligibilityLevel::HighlyEligible);
    assert!(report.disqualifiers.is_empty());

    let scores = report.scores.expect("scored candidates carry a breakdown");
    assert_eq!(scores.skill_match.score, 85.0);
    assert_eq!(scores.branch_match.score, 100.0);
    assert_eq!(scores.experience.score, 70.0);

    let breakdown = report.breakdown.expect("scored candidates echo requirements");
    assert_eq!(breakdown.student_cgpa, 9.0);
    assert_eq!(breakdown.required_cgpa, 7.0);
    assert_eq!(breakdown.required_branches, vec!["cse"]);
}

#[test]
fn low_cgpa_disqualifies_with_zero_score() {
    let mut candidate = strong_candidate();
    candidate["cgpa"] = json!(5.0);

    let report = calculate_eligibility(&candidate, &backend_job(), None).expect("evaluates");

    assert!(!report.is_eligible);
    assert_eq!(report.eligibility_level, EligibilityLevel::NotEligible);
    assert_eq!(report.total_score, 0.0);
    assert!(report.scores.is_none());
    assert!(report.breakdown.is_none());
    assert_eq!(report.disqualifiers.len(), 1);
    assert_eq!(report.disqualifiers[0].kind, DisqualifierKind::Cgpa);
    assert_eq!(
        report.disqualifiers[0].message,
        "CGPA 5.0 is below minimum requirement of 7.0"
    );
    assert_eq!(
        report.analysis,
        "Student does not meet minimum requirements for this position."
    );
    assert_eq!(
        report.suggestions,
        vec!["Focus on improving academic performance in remaining semesters"]
    );
}

#[test]
fn branch_alias_passes_the_gate_and_scores_full_marks() {
    let mut candidate = strong_candidate();
    candidate["branch"] = json!("Information Technology");
    let mut job = backend_job();
    job["requiredBranches"] = json!(["it"]);

    let report = calculate_eligibility(&candidate, &job, None).expect("evaluates");

    assert!(report.disqualifiers.is_empty());
    let scores = report.scores.expect("breakdown present");
    assert_eq!(scores.branch_match.score, 100.0);
}

#[test]
fn related_branch_disqualifies_despite_scoring_credit() {
    let mut candidate = strong_candidate();
    candidate["branch"] = json!("ece");
    let mut job = backend_job();
    job["requiredBranches"] = json!(["ee"]);

    let report = calculate_eligibility(&candidate, &job, None).expect("evaluates");

    assert!(!report.is_eligible);
    assert_eq!(report.total_score, 0.0);
    assert_eq!(report.disqualifiers.len(), 1);
    assert_eq!(report.disqualifiers[0].kind, DisqualifierKind::Branch);
    assert!(report
        .suggestions
        .iter()
        .any(|s| s.contains("open to all branches")));
}

#[test]
fn open_branch_list_never_gates_or_penalizes() {
    let mut candidate = strong_candidate();
    candidate["branch"] = json!("biotechnology");
    let mut job = backend_job();
    job["requiredBranches"] = json!(["all"]);

    let report = calculate_eligibility(&candidate, &job, None).expect("evaluates");

    assert!(report.disqualifiers.is_empty());
    let scores = report.scores.expect("breakdown present");
    assert_eq!(scores.branch_match.score, 100.0);
}

#[test]
fn precomputed_skill_match_is_clamped_to_hundred() {
    let report = calculate_eligibility(&strong_candidate(), &backend_job(), Some(180.0))
        .expect("evaluates");
    let scores = report.scores.expect("breakdown present");
    assert_eq!(scores.skill_match.score, 100.0);
}

#[test]
fn weak_candidate_collects_improvement_suggestions() {
    let candidate = json!({
        "name": "Ravi",
        "branch": "cse",
        "cgpa": 7.0,
        "skills": [],
        "experienceMonths": 2,
    });
    let job = json!({
        "requiredBranches": ["cse"],
        "minCGPA": 6.0,
        "minExperienceMonths": 12,
        "mandatorySkills": ["python", "django"],
        "preferredSkills": ["docker"],
    });

    let report = calculate_eligibility(&candidate, &job, None).expect("evaluates");

    assert!(report
        .suggestions
        .contains(&"Learn these required skills: python, django".to_string()));
    assert!(report
        .suggestions
        .contains(&"Consider learning: docker".to_string()));
    assert!(report.suggestions.contains(
        &"Gain 10 more months of relevant experience through internships or projects".to_string()
    ));
    assert!(report
        .suggestions
        .contains(&"Build projects showcasing required technical skills".to_string()));
    assert!(report.suggestions.contains(
        &"Participate in hackathons or contribute to open-source projects".to_string()
    ));
}

#[test]
fn batch_ranks_candidates_and_sinks_disqualified_ones() {
    let candidates = vec![
        json!({ "name": "Mid", "email": "mid@x.edu", "branch": "cse", "cgpa": 7.5, "skills": ["python"] }),
        json!({ "name": "Top", "email": "top@x.edu", "branch": "cse", "cgpa": 9.5, "skills": ["python", "sql", "docker"] }),
        json!({ "name": "Gated", "email": "gated@x.edu", "branch": "cse", "cgpa": 4.0, "skills": ["python"] }),
    ];

    let ranked = batch_calculate(&candidates, &backend_job()).expect("evaluates");

    assert_eq!(ranked.len(), 3);
    assert_eq!(ranked[0].candidate.name, "Top");
    assert_eq!(ranked[1].candidate.name, "Mid");
    assert_eq!(ranked[2].candidate.name, "Gated");
    assert_eq!(ranked[2].report.total_score, 0.0);
    assert!(ranked[0].report.total_score >= ranked[1].report.total_score);
}

#[test]
fn reports_serialize_with_camel_case_keys() {
    let report =
        calculate_eligibility(&strong_candidate(), &backend_job(), None).expect("evaluates");
    let value = serde_json::to_value(&report).expect("serializes");

    assert_eq!(value["isEligible"], json!(true));
    assert_eq!(value["eligibilityLevel"], json!("highly_eligible"));
    assert_eq!(value["totalScore"], json!(86.0));
    assert!(value["scores"]["skillMatch"]["weightedScore"].is_number());
    assert_eq!(value["breakdown"]["studentBranch"], json!("cse"));

    let mut candidate = strong_candidate();
    candidate["cgpa"] = json!(5.0);
    let gated = calculate_eligibility(&candidate, &backend_job(), None).expect("evaluates");
    let value = serde_json::to_value(&gated).expect("serializes");

    assert!(value.get("scores").is_none());
    assert!(value.get("breakdown").is_none());
    assert_eq!(value["disqualifiers"][0]["type"], json!("cgpa"));
}
