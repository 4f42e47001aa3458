use serde::Serialize;
use serde_json::Value;

use crate::error::RecordError;

/// Typed candidate profile after coercion of the inbound record.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CandidateProfile {
    pub name: String,
    pub email: String,
    pub branch: String,
    pub cgpa: f64,
    pub skills: Vec<String>,
    pub experience_months: u32,
    pub backlogs: u32,
    pub tenth_percentage: f64,
    pub twelfth_percentage: f64,
}

/// Typed job requirements after coercion of the inbound record.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JobRequirements {
    pub title: String,
    pub company: String,
    pub required_branches: Vec<String>,
    pub min_cgpa: f64,
    pub min_tenth: f64,
    pub min_twelfth: f64,
    pub max_backlogs: u32,
    pub min_experience_months: u32,
    pub mandatory_skills: Vec<String>,
    pub preferred_skills: Vec<String>,
}

/// Effectively unbounded backlog allowance when a job does not set one.
const DEFAULT_MAX_BACKLOGS: u32 = 100;

impl CandidateProfile {
    /// Coerces a loose JSON record. Both camelCase and snake_case spellings
    /// are accepted per field, camelCase preferred; missing fields default
    /// rather than fail; branch and skills are lower-cased.
    pub fn from_record(record: &Value) -> Result<Self, RecordError> {
        ensure_object(record)?;

        Ok(Self {
            name: string_field(record, "name", "name")?,
            email: string_field(record, "email", "email")?,
            branch: string_field(record, "branch", "branch")?.to_lowercase(),
            cgpa: float_field(record, "cgpa", "cgpa")?,
            skills: lowercased_list(record, "skills", "skills")?,
            experience_months: count_field(record, "experienceMonths", "experience_months", 0)?,
            backlogs: count_field(record, "backlogs", "backlogs", 0)?,
            tenth_percentage: float_field(record, "tenthPercentage", "tenth_percentage")?,
            twelfth_percentage: float_field(record, "twelfthPercentage", "twelfth_percentage")?,
        })
    }
}

impl JobRequirements {
    /// Coerces a loose JSON job record, with the same dual-spelling and
    /// default rules. An absent branch list means the job is open to all
    /// branches.
    pub fn from_record(record: &Value) -> Result<Self, RecordError> {
        ensure_object(record)?;

        let required_branches = match field(record, "requiredBranches", "required_branches") {
            Some(value) => string_list("requiredBranches", value)?
                .into_iter()
                .map(|b| b.to_lowercase())
                .collect(),
            None => vec!["all".to_string()],
        };

        Ok(Self {
            title: string_field(record, "title", "title")?,
            company: string_field(record, "company", "company")?,
            required_branches,
            min_cgpa: float_field(record, "minCGPA", "min_cgpa")?,
            min_tenth: float_field(record, "minTenth", "min_tenth")?,
            min_twelfth: float_field(record, "minTwelfth", "min_twelfth")?,
            max_backlogs: count_field(record, "maxBacklogs", "max_backlogs", DEFAULT_MAX_BACKLOGS)?,
            min_experience_months: count_field(
                record,
                "minExperienceMonths",
                "min_experience_months",
                0,
            )?,
            mandatory_skills: lowercased_list(record, "mandatorySkills", "mandatory_skills")?,
            preferred_skills: lowercased_list(record, "preferredSkills", "preferred_skills")?,
        })
    }

    /// Whether the job accepts candidates from any branch.
    pub fn accepts_all_branches(&self) -> bool {
        self.required_branches.iter().any(|b| b == "all")
    }
}

/// Branch spelling exactly as submitted, for echoing back in summaries;
/// the coerced profile keeps only the lowercased form.
pub(super) fn raw_branch(record: &Value) -> Result<String, RecordError> {
    string_field(record, "branch", "branch")
}

fn ensure_object(record: &Value) -> Result<(), RecordError> {
    if record.is_object() {
        Ok(())
    } else {
        Err(RecordError::NotAnObject)
    }
}

fn field<'a>(record: &'a Value, camel: &str, snake: &str) -> Option<&'a Value> {
    record
        .get(camel)
        .or_else(|| record.get(snake))
        .filter(|v| !v.is_null())
}

fn string_field(record: &Value, camel: &'static str, snake: &str) -> Result<String, RecordError> {
    match field(record, camel, snake) {
        None => Ok(String::new()),
        Some(Value::String(s)) => Ok(s.clone()),
        Some(other) => Err(invalid(camel, "a string", other)),
    }
}

/// Numeric coercion matching the upstream contract: JSON numbers pass
/// through, numeric strings parse, anything else is a contract violation.
fn float_field(record: &Value, camel: &'static str, snake: &str) -> Result<f64, RecordError> {
    match field(record, camel, snake) {
        None => Ok(0.0),
        Some(value) => coerce_float(camel, value),
    }
}

fn coerce_float(name: &'static str, value: &Value) -> Result<f64, RecordError> {
    match value {
        Value::Number(n) => n
            .as_f64()
            .ok_or_else(|| invalid(name, "a finite number", value)),
        Value::String(s) => s
            .trim()
            .parse::<f64>()
            .map_err(|_| invalid(name, "a numeric value", value)),
        other => Err(invalid(name, "a number", other)),
    }
}

fn count_field(
    record: &Value,
    camel: &'static str,
    snake: &str,
    default: u32,
) -> Result<u32, RecordError> {
    match field(record, camel, snake) {
        None => Ok(default),
        // Negative inputs clamp to zero; the data model treats counts as >= 0.
        Some(value) => Ok(coerce_float(camel, value)?.max(0.0) as u32),
    }
}

fn lowercased_list(
    record: &Value,
    camel: &'static str,
    snake: &str,
) -> Result<Vec<String>, RecordError> {
    match field(record, camel, snake) {
        None => Ok(Vec::new()),
        Some(value) => Ok(string_list(camel, value)?
            .into_iter()
            .map(|s| s.to_lowercase())
            .collect()),
    }
}

fn string_list(name: &'static str, value: &Value) -> Result<Vec<String>, RecordError> {
    let items = value
        .as_array()
        .ok_or_else(|| invalid(name, "a list of strings", value))?;

    items
        .iter()
        .map(|item| match item {
            Value::String(s) => Ok(s.clone()),
            other => Err(invalid(name, "a list of strings", other)),
        })
        .collect()
}

fn invalid(field: &'static str, expected: &'static str, found: &Value) -> RecordError {
    RecordError::InvalidField {
        field,
        expected,
        found: found.to_string(),
    }
}
