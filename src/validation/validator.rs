use std::collections::{BTreeMap, HashMap};

use serde_json::{Map, Number, Value};

use crate::entity::EntityKind;

use super::rules::{Pattern, RuleKind, ValidationRule};
use super::schema;

/// Field name to current text, as typed into a form.
pub type FormDraft = BTreeMap<String, String>;

/// Outcome of validating one draft. Holds only the fields that failed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    errors: BTreeMap<String, String>,
}

impl ValidationReport {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn errors(&self) -> &BTreeMap<String, String> {
        &self.errors
    }

    /// Message for `field`, if it failed.
    pub fn error(&self, field: &str) -> Option<&str> {
        self.errors.get(field).map(String::as_str)
    }
}

impl std::fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let messages: Vec<&str> = self.errors.values().map(String::as_str).collect();
        f.write_str(&messages.join("; "))
    }
}

/// Pure rule evaluation for entity forms.
///
/// For each field the required rule is checked first; pattern and numeric
/// rules only run on non-empty values, so an empty field reports the
/// required message and nothing else.
#[derive(Debug, Clone)]
pub struct EntityFormValidator {
    schemas: HashMap<EntityKind, Vec<ValidationRule>>,
}

impl EntityFormValidator {
    /// Validator with the built-in rule table for every entity kind.
    pub fn standard() -> Self {
        let schemas = EntityKind::ALL
            .into_iter()
            .map(|kind| (kind, schema::rules_for(kind)))
            .collect();
        Self { schemas }
    }

    /// Replace the rule set for `kind`.
    pub fn with_rules(mut self, kind: EntityKind, rules: Vec<ValidationRule>) -> Self {
        self.schemas.insert(kind, rules);
        self
    }

    pub fn rules(&self, kind: EntityKind) -> &[ValidationRule] {
        self.schemas.get(&kind).map(Vec::as_slice).unwrap_or_default()
    }

    pub fn validate(&self, kind: EntityKind, draft: &FormDraft) -> ValidationReport {
        let rules = self.rules(kind);
        let mut errors = BTreeMap::new();

        for rule in rules.iter().filter(|rule| rule.is_required()) {
            if field_value(draft, &rule.field).is_empty() {
                errors
                    .entry(rule.field.clone())
                    .or_insert_with(|| rule.message.clone());
            }
        }

        for rule in rules.iter().filter(|rule| !rule.is_required()) {
            if errors.contains_key(&rule.field) {
                continue;
            }
            let value = field_value(draft, &rule.field);
            if value.is_empty() {
                continue;
            }
            if !rule.accepts(value) {
                errors.insert(rule.field.clone(), rule.message.clone());
            }
        }

        ValidationReport { errors }
    }

    /// Request body for a draft that passed validation.
    ///
    /// Values are trimmed, blank fields dropped, numeric fields sent as
    /// numbers and GST numbers upper-cased.
    pub fn build_payload(&self, kind: EntityKind, draft: &FormDraft) -> Map<String, Value> {
        let rules = self.rules(kind);
        let mut payload = Map::new();

        for (field, raw) in draft {
            let value = raw.trim();
            if value.is_empty() {
                continue;
            }

            let field_rules = rules.iter().filter(|rule| &rule.field == field);
            let mut converted = Value::String(value.to_string());
            for rule in field_rules {
                match rule.kind {
                    RuleKind::NumericRange { .. } => {
                        if let Some(number) = to_json_number(value) {
                            converted = Value::Number(number);
                        }
                    }
                    RuleKind::Pattern(Pattern::Gst15) => {
                        converted = Value::String(value.to_uppercase());
                    }
                    _ => {}
                }
            }
            payload.insert(field.clone(), converted);
        }

        payload
    }
}

impl Default for EntityFormValidator {
    fn default() -> Self {
        Self::standard()
    }
}

fn field_value<'a>(draft: &'a FormDraft, field: &str) -> &'a str {
    draft.get(field).map(|v| v.trim()).unwrap_or("")
}

fn to_json_number(value: &str) -> Option<Number> {
    let parsed = value.parse::<f64>().ok().filter(|n| n.is_finite())?;
    if parsed.fract() == 0.0 && parsed.abs() < i64::MAX as f64 {
        Some(Number::from(parsed as i64))
    } else {
        Number::from_f64(parsed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn draft(pairs: &[(&str, &str)]) -> FormDraft {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn party_missing_name() {
        let validator = EntityFormValidator::standard();
        let report = validator.validate(
            EntityKind::Party,
            &draft(&[("partyName", ""), ("gstNumber", "24ABCDE1234F1Z5")]),
        );

        assert!(!report.is_valid());
        assert_eq!(report.errors().len(), 1);
        assert_eq!(report.error("partyName"), Some("Party name is required"));
    }

    #[test]
    fn staff_negative_salary() {
        let validator = EntityFormValidator::standard();
        let report = validator.validate(
            EntityKind::Staff,
            &draft(&[
                ("name", "Ravi"),
                ("phone", "9876543210"),
                ("designation", "Operator"),
                ("salary_amount", "-5"),
            ]),
        );

        let expected: BTreeMap<String, String> = [(
            "salary_amount".to_string(),
            "Please enter a valid salary amount".to_string(),
        )]
        .into_iter()
        .collect();
        assert_eq!(report.errors(), &expected);
    }

    #[test]
    fn empty_required_field_reports_only_required_message() {
        let validator = EntityFormValidator::standard();
        for blank in ["", "   "] {
            let report = validator.validate(
                EntityKind::Staff,
                &draft(&[
                    ("name", "Ravi"),
                    ("phone", blank),
                    ("designation", "Operator"),
                    ("salary_amount", blank),
                ]),
            );
            assert_eq!(report.error("phone"), Some("Phone number is required"));
            assert_eq!(report.error("salary_amount"), Some("Salary amount is required"));
        }
    }

    #[test]
    fn required_wins_even_when_declared_after_pattern() {
        let validator = EntityFormValidator::standard().with_rules(
            EntityKind::Party,
            vec![
                ValidationRule::pattern("email", Pattern::Email, "bad email"),
                ValidationRule::required("email", "Email is required"),
            ],
        );
        let report = validator.validate(EntityKind::Party, &draft(&[]));
        assert_eq!(report.error("email"), Some("Email is required"));
    }

    #[test]
    fn non_numeric_differs_from_required() {
        let validator = EntityFormValidator::standard();
        let report = validator.validate(
            EntityKind::Payment,
            &draft(&[("partyName", "A"), ("amount", "ten"), ("paymentMode", "cash")]),
        );
        assert_eq!(report.error("amount"), Some("Please enter a valid amount"));
    }

    #[test]
    fn optional_patterns_skip_blank_values() {
        let validator = EntityFormValidator::standard();
        let report = validator.validate(
            EntityKind::Party,
            &draft(&[("partyName", "Shree"), ("email", " "), ("phone", "")]),
        );
        assert!(report.is_valid());
    }

    #[test]
    fn phone_policy_differs_between_party_and_staff() {
        let validator = EntityFormValidator::standard();
        let formatted = "+91 98765 43210";

        let party = validator.validate(
            EntityKind::Party,
            &draft(&[("partyName", "Shree"), ("phone", formatted)]),
        );
        assert!(party.is_valid());

        let staff = validator.validate(
            EntityKind::Staff,
            &draft(&[
                ("name", "Ravi"),
                ("phone", formatted),
                ("designation", "Operator"),
                ("salary_amount", "100"),
            ]),
        );
        assert_eq!(
            staff.error("phone"),
            Some("Please enter a valid 10-digit phone number")
        );
    }

    #[test]
    fn validation_is_repeatable() {
        let validator = EntityFormValidator::standard();
        let input = draft(&[("partyName", ""), ("email", "nope"), ("gstNumber", "short")]);
        let first = validator.validate(EntityKind::Party, &input);
        let second = validator.validate(EntityKind::Party, &input);
        assert_eq!(first, second);
        assert_eq!(first.errors().len(), 3);
    }

    #[test]
    fn unknown_fields_are_ignored() {
        let validator = EntityFormValidator::standard();
        let report = validator.validate(
            EntityKind::Party,
            &draft(&[("partyName", "Shree"), ("nickname", "")]),
        );
        assert!(report.is_valid());
    }

    #[test]
    fn payload_normalizes_values() {
        let validator = EntityFormValidator::standard();
        let payload = validator.build_payload(
            EntityKind::Party,
            &draft(&[
                ("partyName", "  Shree Textiles "),
                ("gstNumber", "24abcde1234f1z5"),
                ("email", ""),
            ]),
        );
        assert_eq!(
            Value::Object(payload),
            json!({ "partyName": "Shree Textiles", "gstNumber": "24ABCDE1234F1Z5" })
        );

        let staff = validator.build_payload(
            EntityKind::Staff,
            &draft(&[("name", "Ravi"), ("salary_amount", "15000"), ("phone", "9876543210")]),
        );
        assert_eq!(staff["salary_amount"], json!(15000));
        assert_eq!(staff["phone"], json!("9876543210"));

        let product = validator.build_payload(EntityKind::Product, &draft(&[("price", "62.5")]));
        assert_eq!(product["price"], json!(62.5));
    }
}
