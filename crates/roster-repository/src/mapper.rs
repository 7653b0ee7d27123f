//! Translation between the API's user shape and the domain [`User`].
//!
//! The two directions are not inverses. Names are split at the first space
//! and joined with exactly one space, so a name with no space or several
//! spaces does not survive a round trip unchanged.

use crate::dto::{Company, ExternalUser};
use roster_core::{User, UserDraft, UserId};

/// Department used when the API sends no company name.
pub const DEFAULT_DEPARTMENT: &str = "General";

/// Converts an API user into a domain user. Never fails.
///
/// The id is passed through as the API sent it. Only a record with no id
/// at all gets a local fallback id so that it can still be edited or
/// deleted in the list.
#[must_use]
pub fn to_domain(external: ExternalUser) -> User {
    let id = external.id.unwrap_or_else(UserId::fallback);
    let (first_name, last_name) = split_name(external.name.as_deref().unwrap_or_default());

    let department = external
        .company
        .and_then(|company| company.name)
        .filter(|name| !name.is_empty())
        .unwrap_or_else(|| DEFAULT_DEPARTMENT.to_string());

    User {
        id,
        first_name,
        last_name,
        email: external.email.unwrap_or_default(),
        department,
    }
}

/// Builds the request body for create and update calls.
///
/// The id is never part of the body; updates carry it in the URL.
#[must_use]
pub fn to_external_payload(draft: &UserDraft) -> ExternalUser {
    ExternalUser {
        id: None,
        name: Some(format!("{} {}", draft.first_name, draft.last_name)),
        email: Some(draft.email.clone()),
        company: Some(Company {
            name: Some(draft.department.clone()),
        }),
    }
}

/// Same as [`to_external_payload`] for an existing user.
#[must_use]
pub fn user_to_external_payload(user: &User) -> ExternalUser {
    ExternalUser {
        id: None,
        name: Some(user.full_name()),
        email: Some(user.email.clone()),
        company: Some(Company {
            name: Some(user.department.clone()),
        }),
    }
}

/// Splits at the first space: `"A B C"` becomes `("A", "B C")`.
fn split_name(name: &str) -> (String, String) {
    match name.split_once(' ') {
        Some((first, rest)) => (first.to_string(), rest.to_string()),
        None => (name.to_string(), String::new()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn external(name: Option<&str>) -> ExternalUser {
        ExternalUser {
            id: Some(UserId::from(1)),
            name: name.map(str::to_string),
            email: Some("ada@example.com".to_string()),
            company: Some(Company {
                name: Some("Engineering".to_string()),
            }),
        }
    }

    #[test]
    fn test_two_part_name() {
        let user = to_domain(external(Some("Ada Lovelace")));
        assert_eq!(user.first_name, "Ada");
        assert_eq!(user.last_name, "Lovelace");
    }

    #[test]
    fn test_multi_part_name_keeps_rest_in_last_name() {
        let user = to_domain(external(Some("A B C")));
        assert_eq!(user.first_name, "A");
        assert_eq!(user.last_name, "B C");
    }

    #[test]
    fn test_empty_and_missing_name() {
        for name in [Some(""), None] {
            let user = to_domain(external(name));
            assert_eq!(user.first_name, "");
            assert_eq!(user.last_name, "");
        }
    }

    #[test]
    fn test_single_word_name() {
        let user = to_domain(external(Some("Jane")));
        assert_eq!(user.first_name, "Jane");
        assert_eq!(user.last_name, "");
    }

    #[test]
    fn test_consecutive_spaces_are_preserved_in_last_name() {
        let user = to_domain(external(Some("Mrs.  Dennis Schulist")));
        assert_eq!(user.first_name, "Mrs.");
        assert_eq!(user.last_name, " Dennis Schulist");
    }

    #[test]
    fn test_missing_company_defaults_department() {
        let mut ext = external(Some("Ada Lovelace"));
        ext.company = None;
        assert_eq!(to_domain(ext).department, DEFAULT_DEPARTMENT);
    }

    #[test]
    fn test_empty_company_name_defaults_department() {
        let mut ext = external(Some("Ada Lovelace"));
        ext.company = Some(Company {
            name: Some(String::new()),
        });
        assert_eq!(to_domain(ext).department, "General");

        let mut nameless = external(Some("Ada Lovelace"));
        nameless.company = Some(Company { name: None });
        assert_eq!(to_domain(nameless).department, "General");
    }

    #[test]
    fn test_missing_email_is_empty() {
        let mut ext = external(Some("Ada Lovelace"));
        ext.email = None;
        assert_eq!(to_domain(ext).email, "");
    }

    #[test]
    fn test_server_id_is_passed_through() {
        let mut ext = external(Some("Ada Lovelace"));
        ext.id = Some(UserId::from(0));
        assert_eq!(to_domain(ext).id, UserId::from(0));

        let mut text = external(Some("Ada Lovelace"));
        text.id = Some(UserId::from(""));
        assert_eq!(to_domain(text).id, UserId::from(""));
    }

    #[test]
    fn test_fields_are_never_absent() {
        let user = to_domain(ExternalUser::default());
        assert_eq!(user.first_name, "");
        assert_eq!(user.last_name, "");
        assert_eq!(user.email, "");
        assert_eq!(user.department, "General");
        assert!(matches!(user.id, UserId::Number(_)));
    }

    #[test]
    fn test_payload_joins_with_one_space() {
        let draft = UserDraft {
            first_name: String::new(),
            last_name: "Jane".to_string(),
            email: "jane@example.com".to_string(),
            department: "Sales".to_string(),
        };
        let payload = to_external_payload(&draft);
        assert_eq!(payload.id, None);
        assert_eq!(payload.name.as_deref(), Some(" Jane"));
        assert_eq!(payload.email.as_deref(), Some("jane@example.com"));
        assert_eq!(payload.company.and_then(|c| c.name).as_deref(), Some("Sales"));
    }

    #[test]
    fn test_round_trip_is_not_lossless() {
        let draft = UserDraft {
            first_name: String::new(),
            last_name: "Jane".to_string(),
            email: "jane@example.com".to_string(),
            department: "Sales".to_string(),
        };
        let user = to_domain(to_external_payload(&draft));
        assert_eq!(user.first_name, "");
        assert_eq!(user.last_name, "Jane");

        let draft = UserDraft {
            first_name: "Mary Ann".to_string(),
            last_name: "Evans".to_string(),
            ..draft
        };
        let user = to_domain(to_external_payload(&draft));
        assert_eq!(user.first_name, "Mary");
        assert_eq!(user.last_name, "Ann Evans");
    }

    #[test]
    fn test_user_payload_matches_draft_payload() {
        let user = to_domain(external(Some("Ada Lovelace")));
        let draft = UserDraft::from(user.clone());
        assert_eq!(user_to_external_payload(&user), to_external_payload(&draft));
    }
}
