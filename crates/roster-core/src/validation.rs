//! Validation of the add/edit user form.

use crate::{Submission, User, UserDraft, UserField, UserForm};
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

/// Message shown when the first name is blank.
pub const FIRST_NAME_REQUIRED: &str = "First name required";
/// Message shown when the last name is blank.
pub const LAST_NAME_REQUIRED: &str = "Last name required";
/// Message shown when the email is blank or malformed.
pub const VALID_EMAIL_REQUIRED: &str = "Valid email required";
/// Message shown when the department is blank.
pub const DEPARTMENT_REQUIRED: &str = "Department required";

/// Field-level validation messages, keyed by field. Empty means valid.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<UserField, &'static str>);

impl FieldErrors {
    /// Returns true if no field failed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the number of failing fields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns the message for a field, if it failed.
    #[must_use]
    pub fn get(&self, field: UserField) -> Option<&'static str> {
        self.0.get(&field).copied()
    }

    /// Iterates over failing fields in column order.
    pub fn iter(&self) -> impl Iterator<Item = (UserField, &'static str)> + '_ {
        self.0.iter().map(|(field, message)| (*field, *message))
    }

    fn insert(&mut self, field: UserField, message: &'static str) {
        self.0.insert(field, message);
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let message = self
            .iter()
            .map(|(field, message)| format!("{}: {}", field, message))
            .collect::<Vec<_>>()
            .join("; ");
        f.write_str(&message)
    }
}

/// Checks every field of the form independently.
///
/// All rules run even when an earlier one fails, so the result lists every
/// problem at once.
#[must_use]
pub fn validate(form: &UserForm) -> FieldErrors {
    let mut errors = FieldErrors::default();

    if rules::not_blank(&form.first_name).is_err() {
        errors.insert(UserField::FirstName, FIRST_NAME_REQUIRED);
    }
    if rules::not_blank(&form.last_name).is_err() {
        errors.insert(UserField::LastName, LAST_NAME_REQUIRED);
    }
    if rules::not_blank(&form.email).is_err() || rules::loose_email(&form.email).is_err() {
        errors.insert(UserField::Email, VALID_EMAIL_REQUIRED);
    }
    if rules::not_blank(&form.department).is_err() {
        errors.insert(UserField::Department, DEPARTMENT_REQUIRED);
    }

    errors
}

impl UserForm {
    /// Validates the form and, if it passes, returns what to send.
    ///
    /// Text fields are trimmed on success; the id is passed through as is
    /// and decides between create and update.
    pub fn submit(&self) -> Result<Submission, FieldErrors> {
        let errors = validate(self);
        if !errors.is_empty() {
            return Err(errors);
        }

        let form = self.trimmed();
        let draft = UserDraft {
            first_name: form.first_name,
            last_name: form.last_name,
            email: form.email,
            department: form.department,
        };

        Ok(match form.id {
            Some(id) => Submission::Update(User::from_draft(id, draft)),
            None => Submission::Create(draft),
        })
    }
}

/// Common validation functions.
pub mod rules {
    use regex::Regex;
    use std::sync::OnceLock;
    use validator::ValidationError;

    static LOOSE_EMAIL_RE: OnceLock<Regex> = OnceLock::new();

    fn loose_email_regex() -> &'static Regex {
        LOOSE_EMAIL_RE.get_or_init(|| {
            // Unanchored: something@something.something anywhere in the text.
            Regex::new(r"\S+@\S+\.\S+")
                .unwrap_or_else(|error| panic!("email regex failed to compile: {error}"))
        })
    }

    /// Validates that a string is not blank (not empty after trimming).
    pub fn not_blank(value: &str) -> Result<(), ValidationError> {
        if value.trim().is_empty() {
            return Err(ValidationError::new("not_blank"));
        }
        Ok(())
    }

    /// Validates that a string looks like an email address.
    ///
    /// Matches a non-space run, `@`, a non-space run, `.`, and a
    /// final non-space run.
    pub fn loose_email(value: &str) -> Result<(), ValidationError> {
        if !loose_email_regex().is_match(value) {
            return Err(ValidationError::new("email"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::rules::*;
    use super::*;
    use crate::UserId;

    fn valid_form() -> UserForm {
        UserForm {
            id: None,
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            department: "Engineering".to_string(),
        }
    }

    #[test]
    fn test_not_blank() {
        assert!(not_blank("hello").is_ok());
        assert!(not_blank("   ").is_err());
        assert!(not_blank("").is_err());
    }

    #[test]
    fn test_loose_email() {
        assert!(loose_email("a@b.c").is_ok());
        assert!(loose_email("first.last@sub.example.org").is_ok());
        assert!(loose_email("  a@b.c  ").is_ok());
        assert!(loose_email("a@b").is_err());
        assert!(loose_email("@b.c").is_err());
        assert!(loose_email("a b@c").is_err());
        assert!(loose_email("plainaddress").is_err());
    }

    #[test]
    fn test_loose_email_accepts_what_rfc_would_reject() {
        assert!(loose_email("a@@b..c").is_ok());
        assert!(loose_email("x y@b.c").is_ok());
    }

    #[test]
    fn test_valid_form_has_no_errors() {
        assert!(validate(&valid_form()).is_empty());
    }

    #[test]
    fn test_each_field_is_checked_independently() {
        let form = UserForm {
            first_name: String::new(),
            email: "not-an-email".to_string(),
            ..valid_form()
        };
        let errors = validate(&form);
        assert_eq!(errors.len(), 2);
        assert_eq!(errors.get(UserField::FirstName), Some(FIRST_NAME_REQUIRED));
        assert_eq!(errors.get(UserField::Email), Some(VALID_EMAIL_REQUIRED));
        assert_eq!(errors.get(UserField::LastName), None);
    }

    #[test]
    fn test_blank_form_reports_all_fields() {
        let errors = validate(&UserForm::default());
        assert_eq!(errors.len(), 4);
        let fields: Vec<UserField> = errors.iter().map(|(field, _)| field).collect();
        assert_eq!(fields, UserField::ALL.to_vec());
        assert_eq!(errors.get(UserField::LastName), Some(LAST_NAME_REQUIRED));
        assert_eq!(errors.get(UserField::Department), Some(DEPARTMENT_REQUIRED));
    }

    #[test]
    fn test_whitespace_only_department_is_rejected() {
        let form = UserForm {
            department: "   ".to_string(),
            ..valid_form()
        };
        let errors = validate(&form);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.get(UserField::Department), Some(DEPARTMENT_REQUIRED));
    }

    #[test]
    fn test_submit_trims_new_user() {
        let form = UserForm {
            first_name: "  Ada ".to_string(),
            email: " ada@example.com ".to_string(),
            ..valid_form()
        };
        match form.submit().unwrap() {
            Submission::Create(draft) => {
                assert_eq!(draft.first_name, "Ada");
                assert_eq!(draft.email, "ada@example.com");
            }
            Submission::Update(_) => panic!("expected a create submission"),
        }
    }

    #[test]
    fn test_submit_with_id_is_update() {
        let form = UserForm {
            id: Some(UserId::from(4)),
            last_name: " Byron ".to_string(),
            ..valid_form()
        };
        match form.submit().unwrap() {
            Submission::Update(user) => {
                assert_eq!(user.id, UserId::from(4));
                assert_eq!(user.last_name, "Byron");
            }
            Submission::Create(_) => panic!("expected an update submission"),
        }
    }

    #[test]
    fn test_submit_returns_errors() {
        let errors = UserForm::default().submit().unwrap_err();
        assert_eq!(errors.len(), 4);
    }

    #[test]
    fn test_field_errors_display_and_serialize() {
        let form = UserForm {
            first_name: String::new(),
            ..valid_form()
        };
        let errors = validate(&form);
        assert_eq!(errors.to_string(), "firstName: First name required");
        let json = serde_json::to_value(&errors).unwrap();
        assert_eq!(json["firstName"], "First name required");
    }
}
