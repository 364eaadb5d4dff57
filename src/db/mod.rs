use std::path::Path;
use std::time::Duration;

use anyhow::Result;
use sea_orm::{ConnectOptions, Database, DatabaseConnection, DbErr};
use tracing::info;

use crate::models::client::ProvisionedClient;

pub mod migrator;
pub mod repositories;

pub use crate::entities::api_clients::Model as ApiClient;

/// Handle to the credential store. Cheap to clone; constructed once per
/// command and passed explicitly into whatever needs it.
#[derive(Clone)]
pub struct Store {
    pub conn: DatabaseConnection,
}

impl Store {
    pub async fn new(db_url: &str) -> Result<Self> {
        Self::with_pool_options(db_url, 5, 1).await
    }

    pub async fn with_pool_options(
        db_url: &str,
        max_connections: u32,
        min_connections: u32,
    ) -> Result<Self> {
        use sea_orm_migration::MigratorTrait;

        if let Some(path) = sqlite_file_path(db_url) {
            if let Some(parent) = path.parent() {
                tokio::fs::create_dir_all(parent).await.ok();
            }
            if !path.exists() {
                std::fs::File::create(path)?;
            }
        }

        let mut opt = ConnectOptions::new(db_url.to_string());
        opt.max_connections(max_connections)
            .min_connections(min_connections)
            .connect_timeout(Duration::from_secs(10))
            .acquire_timeout(Duration::from_secs(10))
            .idle_timeout(Duration::from_secs(300))
            .sqlx_logging(false);

        let conn = Database::connect(opt).await?;

        migrator::Migrator::up(&conn, None).await?;

        info!("Store connected & migrations applied");

        Ok(Self { conn })
    }

    fn client_repo(&self) -> repositories::client::ClientRepository {
        repositories::client::ClientRepository::new(self.conn.clone())
    }

    /// Insert one credential row. Returns the raw `DbErr` so callers can
    /// attach per-item context.
    pub async fn insert_client(&self, client: &ProvisionedClient) -> Result<(), DbErr> {
        self.client_repo().insert(client).await
    }

    pub async fn list_clients(&self) -> Result<Vec<ApiClient>> {
        self.client_repo().list().await
    }
}

/// Filesystem path backing a sqlite URL, or `None` for in-memory databases,
/// which must never get a literal `:memory:` file created for them.
fn sqlite_file_path(db_url: &str) -> Option<&Path> {
    if db_url.contains(":memory:") {
        return None;
    }
    Some(Path::new(db_url.trim_start_matches("sqlite:")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_urls_have_no_backing_file() {
        assert_eq!(sqlite_file_path("sqlite::memory:"), None);
        assert_eq!(sqlite_file_path(":memory:"), None);
    }

    #[test]
    fn file_urls_strip_the_scheme() {
        assert_eq!(
            sqlite_file_path("sqlite:/var/lib/linkr/linkr.db"),
            Some(Path::new("/var/lib/linkr/linkr.db"))
        );
        assert_eq!(
            sqlite_file_path("relative/clients.db"),
            Some(Path::new("relative/clients.db"))
        );
    }
}
