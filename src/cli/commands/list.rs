//! List command handler

use std::process::ExitCode;

use serde::Serialize;

use crate::config::Config;
use crate::db::Store;

/// Listing row without the signing key; disclosure is one-time at seeding.
#[derive(Serialize)]
struct ClientRow {
    id: String,
    username: String,
    scope: String,
    created_at: String,
}

pub async fn cmd_list(config: &Config, json: bool) -> anyhow::Result<ExitCode> {
    let store = Store::new(&config.database_url).await?;
    let clients = store.list_clients().await?;

    let rows: Vec<ClientRow> = clients
        .into_iter()
        .map(|c| ClientRow {
            id: c.id,
            username: c.username,
            scope: c.scope,
            created_at: c.created_at,
        })
        .collect();

    if json {
        println!("{}", serde_json::to_string_pretty(&rows)?);
        return Ok(ExitCode::SUCCESS);
    }

    if rows.is_empty() {
        println!("No API clients provisioned.");
        println!();
        println!("Provision users with: credseed seed alice bob:admin");
        return Ok(ExitCode::SUCCESS);
    }

    println!("API clients ({} total)", rows.len());
    println!("{:-<72}", "");

    for row in &rows {
        println!("{} [{}]", row.username, row.scope);
        println!("  id:      {}", row.id);
        println!("  created: {}", row.created_at);
    }

    Ok(ExitCode::SUCCESS)
}
