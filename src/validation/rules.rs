use once_cell::sync::Lazy;
use regex::Regex;

static EMAIL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\S+@\S+\.\S+$").expect("valid email regex"));

// Digits plus the punctuation people type into phone fields.
static PHONE_LENIENT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\+?[\d\s()\-]+$").expect("valid phone regex"));

/// Named value formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pattern {
    Email,
    /// Exactly 10 digits once everything else is stripped.
    PhoneStrict10,
    /// Optional leading `+`, spaces, dashes and parentheses, 10 to 15 digits.
    PhoneLenient,
    /// 15-character GSTIN, any case.
    Gst15,
}

impl Pattern {
    /// `value` is expected to be trimmed and non-empty.
    pub fn matches(&self, value: &str) -> bool {
        match self {
            Pattern::Email => EMAIL.is_match(value),
            Pattern::PhoneStrict10 => digit_count(value) == 10,
            Pattern::PhoneLenient => {
                PHONE_LENIENT.is_match(value) && (10..=15).contains(&digit_count(value))
            }
            Pattern::Gst15 => value.chars().count() == 15,
        }
    }
}

fn digit_count(value: &str) -> usize {
    value.chars().filter(char::is_ascii_digit).count()
}

#[derive(Debug, Clone, PartialEq)]
pub enum RuleKind {
    /// Non-empty after trimming.
    Required,
    Pattern(Pattern),
    /// Finite number, strictly above `min`, at most `max`.
    NumericRange { min: Option<f64>, max: Option<f64> },
}

/// One constraint on one field.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationRule {
    pub field: String,
    pub kind: RuleKind,
    pub message: String,
}

impl ValidationRule {
    pub fn required(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            kind: RuleKind::Required,
            message: message.into(),
        }
    }

    pub fn pattern(field: impl Into<String>, pattern: Pattern, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            kind: RuleKind::Pattern(pattern),
            message: message.into(),
        }
    }

    /// Numeric with an exclusive lower bound, e.g. amounts (`> 0`).
    pub fn above(field: impl Into<String>, min: f64, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            kind: RuleKind::NumericRange {
                min: Some(min),
                max: None,
            },
            message: message.into(),
        }
    }

    pub fn numeric(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            kind: RuleKind::NumericRange {
                min: None,
                max: None,
            },
            message: message.into(),
        }
    }

    pub fn is_required(&self) -> bool {
        matches!(self.kind, RuleKind::Required)
    }

    /// Check a trimmed, non-empty value against a non-required rule.
    pub(crate) fn accepts(&self, value: &str) -> bool {
        match &self.kind {
            RuleKind::Required => !value.is_empty(),
            RuleKind::Pattern(pattern) => pattern.matches(value),
            RuleKind::NumericRange { min, max } => match value.parse::<f64>() {
                Ok(n) if n.is_finite() => {
                    min.map_or(true, |min| n > min) && max.map_or(true, |max| n <= max)
                }
                _ => false,
            },
        }
    }
}
