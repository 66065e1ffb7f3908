//! Field-constraint validation for user creation requests.
//!
//! Constraints are checked explicitly per request type; there is no runtime
//! reflection. Violations are reported in struct-field declaration order with
//! at most one entry per field, and an empty list is the sole success
//! condition.

use crate::domain::user::UserCreateRequest;

/// Constraint declared for a request field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Constraint {
    /// The field must be present and non-empty (non-zero for numbers).
    Required,
    /// Minimum length in characters.
    MinLength(usize),
    /// Maximum length in characters.
    MaxLength(usize),
    /// Minimum accepted numeric value.
    MinAge(i64),
}

impl Constraint {
    /// Short machine-readable tag identifying the constraint kind.
    #[must_use]
    pub fn tag(self) -> &'static str {
        match self {
            Constraint::Required => "required",
            Constraint::MinLength(_) => "min",
            Constraint::MaxLength(_) => "max",
            Constraint::MinAge(_) => "min_age",
        }
    }

    /// Constraint parameter rendered for messages; empty for `required`.
    #[must_use]
    pub fn param(self) -> String {
        match self {
            Constraint::Required => String::new(),
            Constraint::MinLength(n) | Constraint::MaxLength(n) => n.to_string(),
            Constraint::MinAge(n) => n.to_string(),
        }
    }
}

/// A single field-level constraint failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    /// JSON field name as it appears on the wire.
    pub field: &'static str,
    /// The constraint that failed.
    pub constraint: Constraint,
    /// Offending value rendered as text; empty when the field was absent.
    pub value: String,
}

impl Violation {
    fn new(field: &'static str, constraint: Constraint, value: impl Into<String>) -> Self {
        Self {
            field,
            constraint,
            value: value.into(),
        }
    }

    /// Human-readable message composed from the constraint tag.
    #[must_use]
    pub fn description(&self) -> String {
        match self.constraint {
            Constraint::Required => format!("{} is required", self.field),
            Constraint::MinLength(n) => {
                format!("{} must be at least {n} characters long", self.field)
            }
            Constraint::MaxLength(n) => {
                format!("{} must be at most {n} characters long", self.field)
            }
            Constraint::MinAge(n) => format!("{} must be at least {n}", self.field),
        }
    }
}

/// Check a creation request against its declared constraint set.
///
/// Returns the collected violations; an empty vector means the request is
/// valid.
#[must_use]
pub fn validate_user(request: &UserCreateRequest) -> Vec<Violation> {
    let mut violations = Vec::new();

    check_text(
        &mut violations,
        "firstName",
        request.first_name.as_deref(),
        Some(2),
        None,
    );
    check_text(&mut violations, "lastName", request.last_name.as_deref(), None, None);
    check_text(&mut violations, "email", request.email.as_deref(), None, None);
    check_text(
        &mut violations,
        "password",
        request.password.as_deref(),
        Some(8),
        Some(16),
    );
    check_age(&mut violations, "age", request.age, 18);

    violations
}

fn check_text(
    out: &mut Vec<Violation>,
    field: &'static str,
    value: Option<&str>,
    min: Option<usize>,
    max: Option<usize>,
) {
    let Some(text) = value.filter(|v| !v.is_empty()) else {
        out.push(Violation::new(field, Constraint::Required, ""));
        return;
    };
    let len = text.chars().count();
    if let Some(min) = min {
        if len < min {
            out.push(Violation::new(field, Constraint::MinLength(min), text));
            return;
        }
    }
    if let Some(max) = max {
        if len > max {
            out.push(Violation::new(field, Constraint::MaxLength(max), text));
        }
    }
}

fn check_age(out: &mut Vec<Violation>, field: &'static str, value: Option<i64>, min: i64) {
    match value {
        // Absent and zero both count as missing, matching `required`
        // semantics for numeric fields.
        None | Some(0) => out.push(Violation::new(field, Constraint::Required, "")),
        Some(age) if age < min => {
            out.push(Violation::new(field, Constraint::MinAge(min), age.to_string()));
        }
        Some(_) => {}
    }
}
