//! Built-in rule tables, one per form.
//!
//! Phone policy differs per screen: the party form accepts formatted
//! numbers with a country code (`phoneLenient`), the staff form wants a
//! bare 10-digit mobile number (`phoneStrict10`).

use crate::entity::EntityKind;

use super::rules::{Pattern, ValidationRule};

pub fn rules_for(kind: EntityKind) -> Vec<ValidationRule> {
    match kind {
        EntityKind::Party => party(),
        EntityKind::Staff => staff(),
        EntityKind::Product => product(),
        EntityKind::Order => order(),
        EntityKind::Payment => payment(),
        EntityKind::Attendance => attendance(),
    }
}

fn party() -> Vec<ValidationRule> {
    vec![
        ValidationRule::required("partyName", "Party name is required"),
        ValidationRule::pattern(
            "gstNumber",
            Pattern::Gst15,
            "GST number must be 15 characters",
        ),
        ValidationRule::pattern(
            "phone",
            Pattern::PhoneLenient,
            "Please enter a valid phone number",
        ),
        ValidationRule::pattern("email", Pattern::Email, "Please enter a valid email address"),
    ]
}

fn staff() -> Vec<ValidationRule> {
    vec![
        ValidationRule::required("name", "Name is required"),
        ValidationRule::required("phone", "Phone number is required"),
        ValidationRule::pattern(
            "phone",
            Pattern::PhoneStrict10,
            "Please enter a valid 10-digit phone number",
        ),
        ValidationRule::required("designation", "Designation is required"),
        ValidationRule::pattern("email", Pattern::Email, "Please enter a valid email address"),
        ValidationRule::required("salary_amount", "Salary amount is required"),
        ValidationRule::above("salary_amount", 0.0, "Please enter a valid salary amount"),
    ]
}

fn product() -> Vec<ValidationRule> {
    vec![
        ValidationRule::required("productName", "Product name is required"),
        ValidationRule::required("price", "Price is required"),
        ValidationRule::above("price", 0.0, "Please enter a valid price"),
        ValidationRule::numeric("stock", "Stock must be a number"),
    ]
}

fn order() -> Vec<ValidationRule> {
    vec![
        ValidationRule::required("partyName", "Party name is required"),
        ValidationRule::required("productName", "Product name is required"),
        ValidationRule::required("quantity", "Quantity is required"),
        ValidationRule::above("quantity", 0.0, "Please enter a valid quantity"),
        ValidationRule::required("rate", "Rate is required"),
        ValidationRule::above("rate", 0.0, "Please enter a valid rate"),
    ]
}

fn payment() -> Vec<ValidationRule> {
    vec![
        ValidationRule::required("partyName", "Party name is required"),
        ValidationRule::required("amount", "Amount is required"),
        ValidationRule::above("amount", 0.0, "Please enter a valid amount"),
        ValidationRule::required("paymentMode", "Payment mode is required"),
    ]
}

fn attendance() -> Vec<ValidationRule> {
    vec![
        ValidationRule::required("staffId", "Staff member is required"),
        ValidationRule::required("date", "Date is required"),
        ValidationRule::required("status", "Attendance status is required"),
    ]
}
