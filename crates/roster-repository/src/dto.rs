//! Wire representation of a user in the remote API.
//!
//! Decoding is lenient: a field that is missing, `null`, or not of the
//! expected JSON type decodes as absent rather than failing the response.
//! Ids are kept exactly as sent, including `0`, `""` and non-integer numbers.

use roster_core::UserId;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// A user as the remote API sends and receives it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExternalUser {
    #[serde(default, deserialize_with = "lenient_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<UserId>,

    /// Space-joined full name with no guaranteed structure.
    #[serde(default, deserialize_with = "lenient_string", skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, deserialize_with = "lenient_string", skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    #[serde(default, deserialize_with = "lenient_company", skip_serializing_if = "Option::is_none")]
    pub company: Option<Company>,
}

/// The company a user belongs to; surfaces as the department.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Company {
    #[serde(default, deserialize_with = "lenient_string", skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::String(s)) => Some(s),
        _ => None,
    })
}

fn lenient_id<'de, D>(deserializer: D) -> Result<Option<UserId>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::Number(n)) => Some(UserId::Number(n)),
        Some(Value::String(s)) => Some(UserId::Text(s)),
        _ => None,
    })
}

fn lenient_company<'de, D>(deserializer: D) -> Result<Option<Company>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::Object(map)) => Some(Company {
            name: map.get("name").and_then(Value::as_str).map(str::to_string),
        }),
        _ => None,
    })
}
