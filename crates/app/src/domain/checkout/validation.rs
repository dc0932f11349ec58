//! Checkout form validation.

use std::collections::BTreeMap;

use crate::domain::checkout::models::{CheckoutForm, Field};

/// Per-field validation messages. Empty means the form is valid.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    errors: BTreeMap<Field, &'static str>,
}

impl ValidationErrors {
    /// True when no field failed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Number of failing fields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// The message for `field`, if it failed.
    #[must_use]
    pub fn message(&self, field: Field) -> Option<&'static str> {
        self.errors.get(&field).copied()
    }

    /// Iterate over failing fields and their messages.
    pub fn iter(&self) -> impl Iterator<Item = (Field, &'static str)> + '_ {
        self.errors.iter().map(|(field, message)| (*field, *message))
    }

    fn insert(&mut self, field: Field, message: &'static str) {
        self.errors.insert(field, message);
    }
}

/// Validate a checkout form.
///
/// Every required field is checked independently; the email additionally
/// must be `local@domain.tld`-shaped. The cart is not this function's
/// concern — an empty cart blocks the workflow before validation runs.
#[must_use]
pub fn validate(form: &CheckoutForm) -> ValidationErrors {
    let mut errors = ValidationErrors::default();

    if form.first_name.trim().is_empty() {
        errors.insert(Field::FirstName, "First name is required");
    }

    if form.last_name.trim().is_empty() {
        errors.insert(Field::LastName, "Last name is required");
    }

    if form.email.trim().is_empty() {
        errors.insert(Field::Email, "Email is required");
    } else if !email_is_well_formed(&form.email) {
        errors.insert(Field::Email, "Invalid email address");
    }

    if form.address.trim().is_empty() {
        errors.insert(Field::Address, "Address is required");
    }

    if form.city.trim().is_empty() {
        errors.insert(Field::City, "City is required");
    }

    if form.zip.trim().is_empty() {
        errors.insert(Field::Zip, "ZIP code is required");
    }

    errors
}

/// `local@domain.tld` shape: no whitespace, a single `@`, and a dot inside
/// the domain with characters on both sides. Nothing RFC-5322-grade.
fn email_is_well_formed(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }

    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };

    if local.is_empty() || domain.contains('@') {
        return false;
    }

    match domain.rsplit_once('.') {
        Some((host, tld)) => !host.is_empty() && !tld.is_empty(),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_form() -> CheckoutForm {
        CheckoutForm {
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            address: "12 Analytical Row".to_string(),
            city: "London".to_string(),
            zip: "N1 9GU".to_string(),
            ..CheckoutForm::default()
        }
    }

    #[test]
    fn empty_form_fails_every_required_field() {
        let errors = validate(&CheckoutForm::default());

        assert_eq!(errors.len(), 6);
        assert_eq!(errors.message(Field::Email), Some("Email is required"));
    }

    #[test]
    fn whitespace_only_fields_count_as_missing() {
        let form = CheckoutForm {
            first_name: "   ".to_string(),
            ..valid_form()
        };

        let errors = validate(&form);

        assert_eq!(
            errors.message(Field::FirstName),
            Some("First name is required")
        );
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn malformed_email_yields_exactly_an_email_error() {
        let form = CheckoutForm {
            email: "nope".to_string(),
            ..valid_form()
        };

        let errors = validate(&form);

        assert_eq!(errors.len(), 1);
        assert_eq!(errors.message(Field::Email), Some("Invalid email address"));
    }

    #[test]
    fn fully_valid_form_has_no_errors() {
        let errors = validate(&valid_form());

        assert!(errors.is_empty());
    }

    #[test]
    fn email_shapes() {
        for valid in ["a@b.c", "first.last@mail.example.com", "x@sub.domain.io"] {
            assert!(email_is_well_formed(valid), "{valid} should be accepted");
        }

        for invalid in [
            "nope",
            "a@b",
            "a@b.",
            "a@.c",
            "a@@b.c",
            "@b.c",
            "a b@c.d",
            " a@b.c",
        ] {
            assert!(!email_is_well_formed(invalid), "{invalid} should be rejected");
        }
    }

    #[test]
    fn email_pattern_runs_on_the_untrimmed_value() {
        // A padded but otherwise valid email is non-blank, so the shape
        // check sees the padding and rejects it.
        let form = CheckoutForm {
            email: " ada@example.com ".to_string(),
            ..valid_form()
        };

        let errors = validate(&form);

        assert_eq!(errors.message(Field::Email), Some("Invalid email address"));
    }
}
