//! Resume text analysis behind a collaborator seam.
//!
//! The platform's AI-backed analyzer lives in another service; this crate
//! ships the trait and a deterministic local fallback so callers always get
//! an answer, just a cruder one when the remote analyzer is unavailable.

use serde::Serialize;

/// Output of a resume analysis pass.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResumeAnalysis {
    pub summary: String,
    pub keywords: Vec<String>,
    pub notes: String,
}

/// Seam for resume analyzers. Implementations may call out to an external
/// model; `is_available` lets callers decide whether to bother.
pub trait ResumeAnalyzer {
    fn is_available(&self) -> bool;

    fn analyze(&self, resume_text: &str) -> ResumeAnalysis;
}

const SUMMARY_LIMIT: usize = 400;

/// Skills the local fallback scans for, lowercased.
const COMMON_SKILLS: &[&str] = &[
    "python",
    "javascript",
    "react",
    "node",
    "django",
    "flask",
    "sql",
    "mongodb",
    "aws",
    "docker",
    "kubernetes",
];

/// Keyword-scan fallback used when no remote analyzer is configured.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalAnalyzer;

impl ResumeAnalyzer for LocalAnalyzer {
    fn is_available(&self) -> bool {
        false
    }

    fn analyze(&self, resume_text: &str) -> ResumeAnalysis {
        let trimmed = resume_text.trim();
        if trimmed.is_empty() {
            return ResumeAnalysis {
                summary: String::new(),
                keywords: Vec::new(),
                notes: "No text provided".to_string(),
            };
        }

        let lowered = trimmed.to_lowercase();
        let keywords: Vec<String> = COMMON_SKILLS
            .iter()
            .filter(|skill| lowered.contains(*skill))
            .map(|skill| (*skill).to_string())
            .collect();

        ResumeAnalysis {
            summary: clamp_summary(trimmed),
            keywords,
            notes: "Local fallback analysis used".to_string(),
        }
    }
}

fn clamp_summary(text: &str) -> String {
    if text.len() <= SUMMARY_LIMIT {
        return text.to_string();
    }

    // Back off to a char boundary so the clamp never splits a code point.
    let mut cut = SUMMARY_LIMIT;
    while !text.is_char_boundary(cut) {
        cut -= 1;
    }
    format!("{}...", &text[..cut])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn local_analyzer_reports_unavailable() {
        assert!(!LocalAnalyzer.is_available());
    }

    #[test]
    fn empty_text_yields_an_empty_analysis() {
        let analysis = LocalAnalyzer.analyze("   ");
        assert!(analysis.summary.is_empty());
        assert!(analysis.keywords.is_empty());
        assert_eq!(analysis.notes, "No text provided");
    }

    #[test]
    fn keywords_are_scanned_case_insensitively() {
        let analysis = LocalAnalyzer.analyze("Built services with Python, Docker and AWS.");
        assert_eq!(analysis.keywords, vec!["python", "aws", "docker"]);
        assert_eq!(analysis.notes, "Local fallback analysis used");
    }

    #[test]
    fn long_summaries_are_clamped_with_ellipsis() {
        let text = "x".repeat(600);
        let analysis = LocalAnalyzer.analyze(&text);
        assert_eq!(analysis.summary.len(), 403);
        assert!(analysis.summary.ends_with("..."));
    }
}
