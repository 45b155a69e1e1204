//! # Declarative validation for registration drafts
//!
//! [`validate`] checks a [`RecordDraft`] against every rule the registration
//! and edit forms share and returns a [`ValidationErrors`] map keyed by field
//! path. Paths use the persisted camelCase names, with bracketed indices for
//! the array sections (`phoneNumbers[0]`, `addresses[2].zip`,
//! `relatives[1].age`), so the form can place each message next to its input.
//!
//! Each field reports at most one message: the first rule it fails. The age
//! gate is evaluated against the `today` the caller passes in, so submitting
//! the same draft on a later day can legitimately change the outcome.

use std::collections::BTreeMap;
use std::sync::OnceLock;

use regex::Regex;
use time::macros::format_description;
use time::Date;

use crate::draft::RecordDraft;
use crate::models::{Gender, ProfileType, Relationship};

/// Field-path keyed error messages. Empty means the draft is valid.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ValidationErrors(BTreeMap<String, String>);

impl ValidationErrors {
    pub fn insert(&mut self, path: impl Into<String>, message: impl Into<String>) {
        self.0.entry(path.into()).or_insert_with(|| message.into());
    }

    pub fn get(&self, path: &str) -> Option<&str> {
        self.0.get(path).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

/// Punctuation accepted by the password policy.
const PASSWORD_SPECIALS: &str = "!@#$%^&*(),.?\":{}|<>";

fn email_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("email regex"))
}

/// Ten-digit mobile numbers starting 7/8/9, with an optional +91 / 091 / 0
/// prefix. Always a string; leading zeros must survive storage.
fn phone_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^(?:(?:\+|0{0,2})91(?:\s*-\s*)?|0?)?[789]\d{9}$").expect("phone regex")
    })
}

/// Parse a `YYYY-MM-DD` date as produced by a date input.
pub fn parse_dob(value: &str) -> Option<Date> {
    let format = format_description!("[year]-[month]-[day]");
    Date::parse(value.trim(), &format).ok()
}

/// Whole years between `dob` and `today`.
pub fn age_on(dob: Date, today: Date) -> i32 {
    let mut years = today.year() - dob.year();
    if (today.month() as u8, today.day()) < (dob.month() as u8, dob.day()) {
        years -= 1;
    }
    years
}

fn password_ok(password: &str) -> bool {
    password.len() >= 6
        && password.chars().any(|c| c.is_ascii_uppercase())
        && password.chars().any(|c| c.is_ascii_digit())
        && password.chars().any(|c| PASSWORD_SPECIALS.contains(c))
        && password
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || PASSWORD_SPECIALS.contains(c))
}

/// Run every rule against `draft`, evaluating the age gate at `today`.
pub fn validate(draft: &RecordDraft, today: Date) -> ValidationErrors {
    let mut errors = ValidationErrors::default();

    if draft.first_name.trim().is_empty() {
        errors.insert("firstName", "First name is required");
    }
    if draft.last_name.trim().is_empty() {
        errors.insert("lastName", "Last name is required");
    }

    let email = draft.email.trim();
    if email.is_empty() {
        errors.insert("email", "Email is required");
    } else if !email_regex().is_match(email) {
        errors.insert("email", "Email must be a valid email");
    }

    if !password_ok(&draft.password) {
        errors.insert(
            "password",
            "Password must be at least 6 characters and include an uppercase letter, number, and special character",
        );
    }
    if draft.confirm_password != draft.password {
        errors.insert("confirmPassword", "Passwords must match");
    }

    if draft.gender.parse::<Gender>().is_err() {
        errors.insert("gender", "Gender is required");
    }
    if draft.profile_type.parse::<ProfileType>().is_err() {
        errors.insert("profileType", "Profile type is required");
    }

    match parse_dob(&draft.dob) {
        None => errors.insert("dob", "Date of birth is required"),
        Some(dob) if age_on(dob, today) < 18 => {
            errors.insert("dob", "You must be at least 18 years old");
        }
        Some(_) => {}
    }

    for (i, phone) in draft.phone_numbers.iter().enumerate() {
        let path = format!("phoneNumbers[{i}]");
        let phone = phone.trim();
        if phone.is_empty() {
            errors.insert(path, "Phone number is required");
        } else if !phone_regex().is_match(phone) {
            errors.insert(path, "Invalid phone number!");
        }
    }

    for (i, address) in draft.addresses.iter().enumerate() {
        if address.street.trim().is_empty() {
            errors.insert(format!("addresses[{i}].street"), "Street is required");
        }
        if address.city.trim().is_empty() {
            errors.insert(format!("addresses[{i}].city"), "City is required");
        }
        if address.state.trim().is_empty() {
            errors.insert(format!("addresses[{i}].state"), "State is required");
        }
        let zip = address.zip.trim();
        if zip.is_empty() {
            errors.insert(format!("addresses[{i}].zip"), "ZIP Code is required");
        } else if zip.chars().count() > 6 {
            errors.insert(format!("addresses[{i}].zip"), "ZIP Code must be 6 digits");
        }
    }

    for (i, relative) in draft.relatives.iter().enumerate() {
        if relative.name.trim().is_empty() {
            errors.insert(format!("relatives[{i}].name"), "Name is required");
        }
        if relative.relationship.parse::<Relationship>().is_err() {
            errors.insert(format!("relatives[{i}].relationship"), "Relationship is required");
        }
        // Non-numeric input reuses the required message.
        if relative.age.trim().parse::<u32>().is_err() {
            errors.insert(format!("relatives[{i}].age"), "Age is required");
        }
    }

    errors
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draft::sample_draft;
    use time::macros::date;

    const TODAY: Date = date!(2026 - 08 - 27);

    #[test]
    fn valid_draft_has_no_errors() {
        let errors = validate(&sample_draft(), TODAY);
        assert!(errors.is_empty(), "unexpected errors: {errors:?}");
    }

    #[test]
    fn each_single_violation_reports_exactly_one_path() {
        let cases: Vec<(Box<dyn Fn(&mut RecordDraft)>, &str)> = vec![
            (Box::new(|d| d.first_name.clear()), "firstName"),
            (Box::new(|d| d.last_name.clear()), "lastName"),
            (Box::new(|d| d.email = "not-an-email".into()), "email"),
            (Box::new(|d| d.gender.clear()), "gender"),
            (Box::new(|d| d.profile_type.clear()), "profileType"),
            (Box::new(|d| d.phone_numbers[0] = "12345".into()), "phoneNumbers[0]"),
            (Box::new(|d| d.addresses[0].zip = "5600100".into()), "addresses[0].zip"),
            (Box::new(|d| d.relatives[0].name.clear()), "relatives[0].name"),
            (Box::new(|d| d.relatives[0].age = "abc".into()), "relatives[0].age"),
        ];

        for (mutate, path) in cases {
            let mut draft = sample_draft();
            mutate(&mut draft);
            let errors = validate(&draft, TODAY);
            assert_eq!(errors.len(), 1, "expected one error at {path}: {errors:?}");
            assert!(errors.get(path).is_some(), "missing error at {path}");
        }
    }

    #[test]
    fn password_policy() {
        let ok = ["Abc12!", "Passw0rd!", "X9?aaaa"];
        for p in ok {
            assert!(password_ok(p), "{p} should pass");
        }
        // Too short, no uppercase, no digit, no special, disallowed char.
        let bad = ["Ab1!", "abc12!", "Abcdef!", "Abc123", "Abc 12!"];
        for p in bad {
            assert!(!password_ok(p), "{p} should fail");
        }
    }

    #[test]
    fn confirm_password_must_match() {
        let mut draft = sample_draft();
        draft.confirm_password = "Different1!".into();
        let errors = validate(&draft, TODAY);
        assert_eq!(errors.get("confirmPassword"), Some("Passwords must match"));
    }

    #[test]
    fn phone_patterns() {
        for p in ["9876543210", "+919876543210", "09876543210", "919876543210", "7000000000"] {
            assert!(phone_regex().is_match(p), "{p} should match");
        }
        for p in ["1234567890", "98765", "98765432101", "abcdefghij"] {
            assert!(!phone_regex().is_match(p), "{p} should not match");
        }
    }

    #[test]
    fn dob_required_and_age_gated() {
        let mut draft = sample_draft();
        draft.dob.clear();
        assert_eq!(
            validate(&draft, TODAY).get("dob"),
            Some("Date of birth is required")
        );

        // Seventeen on submission day, eighteen tomorrow.
        draft.dob = "2008-08-28".into();
        assert_eq!(
            validate(&draft, TODAY).get("dob"),
            Some("You must be at least 18 years old")
        );

        // Eighteenth birthday today passes.
        draft.dob = "2008-08-27".into();
        assert!(validate(&draft, TODAY).get("dob").is_none());
    }

    #[test]
    fn relative_age_reuses_required_message_for_type_errors() {
        let mut draft = sample_draft();
        draft.relatives[0].age = "forty".into();
        assert_eq!(
            validate(&draft, TODAY).get("relatives[0].age"),
            Some("Age is required")
        );
    }

    #[test]
    fn age_on_counts_whole_years() {
        assert_eq!(age_on(date!(2000 - 08 - 27), TODAY), 26);
        assert_eq!(age_on(date!(2000 - 08 - 28), TODAY), 25);
        assert_eq!(age_on(date!(2008 - 08 - 27), TODAY), 18);
    }
}
