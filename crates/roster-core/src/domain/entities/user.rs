//! User entity and the form used to create or edit one.

use crate::{Entity, UserId};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A user record as the dashboard sees it.
///
/// All four text fields are always present; an unknown value is the empty
/// string. Records are replaced whole, never patched field by field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Identifier assigned by the remote API (or a local fallback).
    pub id: UserId,
    /// Given name.
    pub first_name: String,
    /// Family name; may contain spaces.
    pub last_name: String,
    /// Email address.
    pub email: String,
    /// Department (the API's company name).
    pub department: String,
}

impl User {
    /// Builds a user from a draft and an identifier.
    #[must_use]
    pub fn from_draft(id: UserId, draft: UserDraft) -> Self {
        Self {
            id,
            first_name: draft.first_name,
            last_name: draft.last_name,
            email: draft.email,
            department: draft.department,
        }
    }

    /// Returns the user's full name.
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Returns the value of a sortable/searchable field.
    #[must_use]
    pub fn field(&self, field: UserField) -> &str {
        match field {
            UserField::FirstName => &self.first_name,
            UserField::LastName => &self.last_name,
            UserField::Email => &self.email,
            UserField::Department => &self.department,
        }
    }
}

impl Entity<UserId> for User {
    fn id(&self) -> &UserId {
        &self.id
    }
}

/// A user that has not been created yet.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserDraft {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub department: String,
}

impl From<User> for UserDraft {
    fn from(user: User) -> Self {
        Self {
            first_name: user.first_name,
            last_name: user.last_name,
            email: user.email,
            department: user.department,
        }
    }
}

/// The text fields of a user, used for sorting, searching and error reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum UserField {
    FirstName,
    LastName,
    Email,
    Department,
}

impl UserField {
    /// All fields, in column order.
    pub const ALL: [Self; 4] = [Self::FirstName, Self::LastName, Self::Email, Self::Department];

    /// Returns the field's wire name.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::FirstName => "firstName",
            Self::LastName => "lastName",
            Self::Email => "email",
            Self::Department => "department",
        }
    }
}

impl fmt::Display for UserField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Raw, unvalidated values of the add/edit form.
///
/// `id` is `None` for a new user and carries the edited user's id otherwise.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserForm {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<UserId>,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub department: String,
}

impl UserForm {
    /// Pre-fills the form for editing an existing user.
    #[must_use]
    pub fn from_user(user: &User) -> Self {
        Self {
            id: Some(user.id.clone()),
            first_name: user.first_name.clone(),
            last_name: user.last_name.clone(),
            email: user.email.clone(),
            department: user.department.clone(),
        }
    }

    /// Returns true if the form edits an existing user.
    #[must_use]
    pub const fn is_edit(&self) -> bool {
        self.id.is_some()
    }

    /// Returns a copy with every text field trimmed; `id` is untouched.
    #[must_use]
    pub fn trimmed(&self) -> Self {
        Self {
            id: self.id.clone(),
            first_name: self.first_name.trim().to_string(),
            last_name: self.last_name.trim().to_string(),
            email: self.email.trim().to_string(),
            department: self.department.trim().to_string(),
        }
    }
}

/// A validated form, ready to be sent to the repository.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submission {
    /// The form had no id: create a new user.
    Create(UserDraft),
    /// The form had an id: replace that user.
    Update(User),
}
