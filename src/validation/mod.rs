//! Client-side form validation shared by every entity screen.

mod rules;
mod schema;
mod validator;

pub use rules::{Pattern, RuleKind, ValidationRule};
pub use validator::{EntityFormValidator, FormDraft, ValidationReport};
