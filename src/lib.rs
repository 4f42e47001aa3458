//! Eligibility scoring engine for a campus placement platform.
//!
//! The crate screens student candidates against job postings: skill lists are
//! normalized and matched against mandatory/preferred requirements, hard
//! disqualifiers are collected, and the surviving candidates receive a
//! weighted composite score, an eligibility tier, and improvement
//! suggestions. Everything here is a pure computation over plain records;
//! the HTTP surface and resume text extraction live in other services and
//! talk to this crate through loose JSON maps.

pub mod analysis;
pub mod config;
pub mod eligibility;
pub mod error;
pub mod matching;
pub mod taxonomy;
pub mod telemetry;

pub use eligibility::{
    batch_calculate, calculate_eligibility, BatchOutcome, CandidateProfile, CandidateSummary,
    Disqualifier, DisqualifierKind, EligibilityLevel, EligibilityReport, JobRequirements,
};
pub use error::RecordError;
pub use matching::{
    extract_skills, match_skills, suggest_skills, RequiredSkills, SkillExtraction,
    SkillMatchReport,
};
