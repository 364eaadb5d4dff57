//! Credential provisioning: token decoding, credential generation, and the
//! concurrent seeding pass against the store.

use base64::prelude::*;
use chrono::{DateTime, Utc};
use futures::future;
use thiserror::Error;
use uuid::Uuid;

use crate::db::Store;
use crate::models::client::{ProvisionedClient, UserRole};
use crate::models::role::Role;

/// Separates username from role in an input token.
pub const DELIMITER: char = ':';

const ID_PREFIX: &str = "api_";
const SIGNING_KEY_BYTES: usize = 32;

#[derive(Debug, Error)]
pub enum ProvisionError {
    #[error("invalid token '{0}': must be of shape username[:role]")]
    InvalidFormat(String),

    #[error("unknown role '{role}'; supported roles are: {supported}")]
    InvalidRole { role: String, supported: String },

    #[error("failed to store credential for '{username}': {source}")]
    StoreWrite {
        username: String,
        #[source]
        source: sea_orm::DbErr,
    },
}

/// Decode a single `username[:role]` token.
///
/// A bare username gets the default role. A second component must be one of
/// the supported role values; anything else, or a token with more than one
/// delimiter, is rejected.
pub fn decode_token(token: &str) -> Result<UserRole, ProvisionError> {
    let parts: Vec<&str> = token.split(DELIMITER).collect();

    match parts.as_slice() {
        [username] => Ok(UserRole::new((*username).to_string(), Role::default())),
        [username, role] => {
            let role = Role::parse(role).ok_or_else(|| ProvisionError::InvalidRole {
                role: (*role).to_string(),
                supported: Role::supported_values(),
            })?;
            Ok(UserRole::new((*username).to_string(), role))
        }
        _ => Err(ProvisionError::InvalidFormat(token.to_string())),
    }
}

/// Decode a whole batch, failing on the first bad token. Nothing is
/// generated or written for a batch containing any malformed token.
pub fn decode_batch(tokens: &[String]) -> Result<Vec<UserRole>, ProvisionError> {
    tokens.iter().map(|token| decode_token(token)).collect()
}

/// Generate a client id: `api_` + 32 random hex chars + `-YYYYMMDD`.
///
/// The random component alone is collision-resistant without coordination;
/// the date suffix just makes provisioning age visible at a glance.
#[must_use]
pub fn generate_client_id(now: DateTime<Utc>) -> String {
    let nonce = Uuid::new_v4().simple();
    format!("{ID_PREFIX}{nonce}-{}", now.format("%Y%m%d"))
}

/// Generate a 32-byte signing key from the thread CSPRNG, base64-encoded.
#[must_use]
pub fn generate_signing_key() -> String {
    use rand::Rng;

    let mut rng = rand::rng();
    let bytes: [u8; SIGNING_KEY_BYTES] = rng.random();

    BASE64_STANDARD.encode(bytes)
}

/// Seed credentials for the decoded batch.
///
/// One insert per user, all dispatched concurrently and awaited together.
/// Inserts are independent: each future owns its own generated credential,
/// and one failure neither cancels nor rolls back the others. The caller
/// gets a result per item, in input order.
pub async fn seed(
    store: &Store,
    users: Vec<UserRole>,
) -> Vec<Result<ProvisionedClient, ProvisionError>> {
    let now = Utc::now();

    let inserts = users.into_iter().map(|user| {
        let store = store.clone();
        async move {
            let client = ProvisionedClient {
                id: generate_client_id(now),
                username: user.username,
                role: user.role,
                signing_key: generate_signing_key(),
            };

            if let Err(source) = store.insert_client(&client).await {
                return Err(ProvisionError::StoreWrite {
                    username: client.username,
                    source,
                });
            }

            Ok(client)
        }
    });

    future::join_all(inserts).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn bare_username_gets_default_role() {
        let decoded = decode_token("alice").unwrap();
        assert_eq!(decoded.username, "alice");
        assert_eq!(decoded.role, Role::ReadWrite);
    }

    #[test]
    fn explicit_role_is_honored() {
        let decoded = decode_token("bob:admin").unwrap();
        assert_eq!(decoded.username, "bob");
        assert_eq!(decoded.role, Role::Admin);

        let decoded = decode_token("carol:write-only").unwrap();
        assert_eq!(decoded.role, Role::WriteOnly);
    }

    #[test]
    fn unknown_role_is_rejected_with_supported_set() {
        let err = decode_token("dave:superuser").unwrap_err();
        match err {
            ProvisionError::InvalidRole { role, supported } => {
                assert_eq!(role, "superuser");
                assert!(supported.contains("read-write"));
                assert!(supported.contains("admin"));
            }
            other => panic!("expected InvalidRole, got {other:?}"),
        }
    }

    #[test]
    fn empty_role_component_is_rejected() {
        assert!(matches!(
            decode_token("alice:"),
            Err(ProvisionError::InvalidRole { .. })
        ));
    }

    #[test]
    fn extra_delimiters_are_rejected() {
        let err = decode_token("eve:a:b").unwrap_err();
        match err {
            ProvisionError::InvalidFormat(token) => assert_eq!(token, "eve:a:b"),
            other => panic!("expected InvalidFormat, got {other:?}"),
        }
    }

    #[test]
    fn batch_fails_on_first_bad_token() {
        let tokens = vec![
            "alice".to_string(),
            "eve:a:b".to_string(),
            "bob:admin".to_string(),
        ];
        assert!(matches!(
            decode_batch(&tokens),
            Err(ProvisionError::InvalidFormat(_))
        ));
    }

    #[test]
    fn empty_batch_decodes_to_nothing() {
        assert!(decode_batch(&[]).unwrap().is_empty());
    }

    #[test]
    fn client_ids_do_not_collide() {
        let now = Utc::now();
        let ids: HashSet<String> = (0..10_000).map(|_| generate_client_id(now)).collect();
        assert_eq!(ids.len(), 10_000);
    }

    #[test]
    fn client_id_has_prefix_and_date_suffix() {
        let now = Utc::now();
        let id = generate_client_id(now);

        assert!(id.starts_with("api_"));
        assert!(id.ends_with(&now.format("%Y%m%d").to_string()));

        // 4 prefix + 32 hex + 1 dash + 8 date
        assert_eq!(id.len(), 45);
    }

    #[test]
    fn signing_key_is_32_random_bytes_as_base64() {
        let key = generate_signing_key();
        assert_eq!(key.len(), 44);

        let decoded = BASE64_STANDARD.decode(&key).unwrap();
        assert_eq!(decoded.len(), SIGNING_KEY_BYTES);
    }

    #[test]
    fn signing_keys_differ() {
        assert_ne!(generate_signing_key(), generate_signing_key());
    }
}
