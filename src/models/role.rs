use std::fmt;

use serde::{Deserialize, Serialize};

/// Access level attached to an API client credential.
///
/// Persisted in the `scope` column as the kebab-case string.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Role {
    Admin,
    #[default]
    ReadWrite,
    ReadOnly,
    WriteOnly,
}

impl Role {
    pub const ALL: [Self; 4] = [Self::Admin, Self::ReadWrite, Self::ReadOnly, Self::WriteOnly];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::ReadWrite => "read-write",
            Self::ReadOnly => "read-only",
            Self::WriteOnly => "write-only",
        }
    }

    /// Parse a role string from user input. Only the exact four supported
    /// values are accepted.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|role| role.as_str() == value)
    }

    /// Human-readable list of supported role values, for error messages.
    #[must_use]
    pub fn supported_values() -> String {
        Self::ALL.map(Self::as_str).join(", ")
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_all_supported_roles() {
        assert_eq!(Role::parse("admin"), Some(Role::Admin));
        assert_eq!(Role::parse("read-write"), Some(Role::ReadWrite));
        assert_eq!(Role::parse("read-only"), Some(Role::ReadOnly));
        assert_eq!(Role::parse("write-only"), Some(Role::WriteOnly));
    }

    #[test]
    fn rejects_unknown_roles() {
        assert_eq!(Role::parse("superuser"), None);
        assert_eq!(Role::parse("ADMIN"), None);
        assert_eq!(Role::parse(""), None);
    }

    #[test]
    fn rejects_misspelled_role() {
        // The upstream allow-list carried a "read-wrte" typo; the canonical
        // spelling is the contract here.
        assert_eq!(Role::parse("read-wrte"), None);
    }

    #[test]
    fn default_role_is_read_write() {
        assert_eq!(Role::default(), Role::ReadWrite);
    }

    #[test]
    fn serializes_as_kebab_case() {
        assert_eq!(
            serde_json::to_string(&Role::WriteOnly).unwrap(),
            "\"write-only\""
        );
    }
}
