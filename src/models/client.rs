use serde::Serialize;

use crate::models::role::Role;

/// A decoded `username[:role]` token. Immutable once decoded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserRole {
    pub username: String,
    pub role: Role,
}

impl UserRole {
    #[must_use]
    pub const fn new(username: String, role: Role) -> Self {
        Self { username, role }
    }
}

/// A freshly created API client credential, echoed back to the operator
/// after the insert succeeds. This is the only place the plaintext signing
/// key ever surfaces.
#[derive(Debug, Clone, Serialize)]
pub struct ProvisionedClient {
    pub id: String,
    pub username: String,
    pub role: Role,
    pub signing_key: String,
}
