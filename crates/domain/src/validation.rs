//! Field-level validation helpers shared by the scheduling workflow.

use once_cell::sync::Lazy;
use regex::Regex;

/// Maximum length of a job title.
pub const MAX_JOB_TITLE_LEN: usize = 200;
/// Maximum length of participant names and email addresses.
pub const MAX_PARTICIPANT_FIELD_LEN: usize = 100;

// Deliberately permissive: one '@', no whitespace, a dot in the domain.
// Full RFC 5322 parsing is not a goal here.
static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("email regex compiles"));

/// Syntactic email check used for candidate and interviewer addresses.
#[must_use]
pub fn is_valid_email(value: &str) -> bool {
    value.len() <= MAX_PARTICIPANT_FIELD_LEN && EMAIL_RE.is_match(value)
}

/// Required-string check: non-empty after trimming and within `max_len`.
#[must_use]
pub fn is_valid_required(value: &str, max_len: usize) -> bool {
    !value.trim().is_empty() && value.len() <= max_len
}
