use anyhow::{Context, Result};
use sea_orm::sea_query::{Keyword, Query, SimpleExpr};
use sea_orm::{ConnectionTrait, DatabaseConnection, DbErr, EntityTrait, QueryOrder};

use crate::entities::api_clients;
use crate::models::client::ProvisionedClient;

pub struct ClientRepository {
    conn: DatabaseConnection,
}

impl ClientRepository {
    #[must_use]
    pub const fn new(conn: DatabaseConnection) -> Self {
        Self { conn }
    }

    /// Insert one credential row. Description is always NULL; creation and
    /// update timestamps are assigned by the database, never by this tool.
    pub async fn insert(&self, client: &ProvisionedClient) -> Result<(), DbErr> {
        let insert = Query::insert()
            .into_table(api_clients::Entity)
            .columns([
                api_clients::Column::Id,
                api_clients::Column::Username,
                api_clients::Column::Description,
                api_clients::Column::Scope,
                api_clients::Column::SigningKey,
                api_clients::Column::CreatedAt,
                api_clients::Column::UpdatedAt,
            ])
            .values_panic([
                client.id.clone().into(),
                client.username.clone().into(),
                SimpleExpr::Keyword(Keyword::Null),
                client.role.as_str().into(),
                client.signing_key.clone().into(),
                SimpleExpr::Keyword(Keyword::CurrentTimestamp),
                SimpleExpr::Keyword(Keyword::CurrentTimestamp),
            ])
            .to_owned();

        let backend = self.conn.get_database_backend();
        self.conn.execute(backend.build(&insert)).await?;

        Ok(())
    }

    /// All provisioned clients, oldest first.
    pub async fn list(&self) -> Result<Vec<api_clients::Model>> {
        api_clients::Entity::find()
            .order_by_asc(api_clients::Column::CreatedAt)
            .all(&self.conn)
            .await
            .context("Failed to query API clients")
    }
}
