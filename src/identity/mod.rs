//! # Identity Formatter
//!
//! Turns the caller identity handed over by the hosting environment into the
//! display name written to the audit trail and the result summary.
//!
//! The executing-user record is kept as raw JSON. Derivation never fails: any
//! record that does not carry a usable `PreferredUsername` string degrades to
//! [`UNKNOWN_USER`].

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Fallback display name used whenever no name can be derived.
pub const UNKNOWN_USER: &str = "Unknown User";

/// Claim carrying the caller's email-like user name.
pub const PREFERRED_USERNAME: &str = "PreferredUsername";

/// Identity of the caller, as supplied by the hosting environment.
///
/// Only the `PreferredUsername` claim of the executing user is consumed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CallerIdentity {
    #[serde(default)]
    pub executing_user: Option<Value>,
}

impl CallerIdentity {
    /// An identity with no executing-user record at all.
    pub fn anonymous() -> Self {
        Self::default()
    }

    /// An identity whose executing user carries only a `PreferredUsername` claim.
    pub fn from_username(username: impl Into<String>) -> Self {
        let mut claims = Map::new();
        claims.insert(PREFERRED_USERNAME.to_string(), Value::String(username.into()));
        Self {
            executing_user: Some(Value::Object(claims)),
        }
    }

    /// Wraps an arbitrary executing-user record.
    pub fn from_executing_user(record: Value) -> Self {
        Self {
            executing_user: Some(record),
        }
    }

    /// Derives the display name for this identity. See [`display_name`].
    pub fn display_name(&self) -> String {
        display_name(self)
    }

    /// The email-like user name, `""` when the claim is absent.
    ///
    /// `None` means the record has an unexpected structure.
    fn email(&self) -> Option<&str> {
        match self.executing_user.as_ref()? {
            Value::Object(claims) => match claims.get(PREFERRED_USERNAME) {
                None => Some(""),
                Some(Value::String(email)) => Some(email.as_str()),
                Some(_) => None,
            },
            _ => None,
        }
    }
}

/// Derives a display name from a caller identity.
///
/// - `"bob.smith@co.com"` becomes `"Bob Smith"`
/// - `"bsmith@co.com"` stays `"bsmith"`
/// - `"@co.com"` has an empty local part and falls back to the whole string
/// - a missing, empty or malformed claim yields [`UNKNOWN_USER`]
pub fn display_name(identity: &CallerIdentity) -> String {
    let Some(email) = identity.email() else {
        return UNKNOWN_USER.to_string();
    };

    let local_part = email.split_once('@').map_or(email, |(local, _)| local);

    let name = if local_part.contains('.') {
        local_part
            .split(|c: char| c == '.' || c.is_whitespace())
            .filter(|token| !token.is_empty())
            .map(capitalize_first)
            .collect::<Vec<_>>()
            .join(" ")
    } else if local_part.is_empty() {
        email.to_string()
    } else {
        local_part.to_string()
    };

    if name.trim().is_empty() {
        UNKNOWN_USER.to_string()
    } else {
        name
    }
}

/// Upper-cases the first character and leaves the rest untouched.
fn capitalize_first(token: &str) -> String {
    let mut chars = token.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_dotted_local_part_is_title_cased() {
        let identity = CallerIdentity::from_username("bob.smith@co.com");
        assert_eq!(identity.display_name(), "Bob Smith");
    }

    #[test]
    fn test_runs_of_dots_and_whitespace_collapse() {
        let identity = CallerIdentity::from_username("mary..jane  watson.o'neil@co.com");
        assert_eq!(identity.display_name(), "Mary Jane Watson O'neil");
    }

    #[test]
    fn test_rest_of_token_is_unchanged() {
        let identity = CallerIdentity::from_username("jean.McDONALD@co.com");
        assert_eq!(identity.display_name(), "Jean McDONALD");
    }

    #[test]
    fn test_local_part_without_dot_is_verbatim() {
        let identity = CallerIdentity::from_username("bsmith@co.com");
        assert_eq!(identity.display_name(), "bsmith");
    }

    #[test]
    fn test_no_at_sign_uses_whole_string() {
        assert_eq!(CallerIdentity::from_username("svc_account").display_name(), "svc_account");
        assert_eq!(CallerIdentity::from_username("first.last").display_name(), "First Last");
    }

    #[test]
    fn test_empty_local_part_falls_back_to_email() {
        let identity = CallerIdentity::from_username("@co.com");
        assert_eq!(identity.display_name(), "@co.com");
    }

    #[test]
    fn test_missing_or_empty_claim_is_unknown_user() {
        assert_eq!(CallerIdentity::from_username("").display_name(), UNKNOWN_USER);
        assert_eq!(CallerIdentity::anonymous().display_name(), UNKNOWN_USER);
        assert_eq!(
            CallerIdentity::from_executing_user(json!({"ObjectId": "42"})).display_name(),
            UNKNOWN_USER
        );
    }

    #[test]
    fn test_only_separators_is_unknown_user() {
        assert_eq!(CallerIdentity::from_username("..@co.com").display_name(), UNKNOWN_USER);
    }

    #[test]
    fn test_malformed_record_is_unknown_user() {
        for record in [
            json!({"PreferredUsername": null}),
            json!({"PreferredUsername": 7}),
            json!(["bob.smith@co.com"]),
            json!("bob.smith@co.com"),
        ] {
            let identity = CallerIdentity::from_executing_user(record.clone());
            assert_eq!(identity.display_name(), UNKNOWN_USER, "record: {record}");
        }
    }

    #[test]
    fn test_deserialize_from_host_payload() {
        let identity: CallerIdentity = serde_json::from_value(json!({
            "executing_user": {"PreferredUsername": "ann.lee@co.com", "ObjectId": "abc"}
        }))
        .unwrap();
        assert_eq!(identity.display_name(), "Ann Lee");

        let empty: CallerIdentity = serde_json::from_value(json!({})).unwrap();
        assert_eq!(empty, CallerIdentity::anonymous());
    }
}
