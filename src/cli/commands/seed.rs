//! Seed command handler

use std::process::ExitCode;

use tracing::error;

use crate::config::Config;
use crate::db::Store;
use crate::services::provision;

pub async fn cmd_seed(config: &Config, tokens: &[String], json: bool) -> anyhow::Result<ExitCode> {
    // Decode the whole batch up front: one bad token rejects the run
    // before anything touches the store.
    let users = provision::decode_batch(tokens)?;

    if users.is_empty() {
        println!("Nothing to seed.");
        println!();
        println!("Provision users with: credseed seed alice bob:admin");
        return Ok(ExitCode::SUCCESS);
    }

    let store = Store::new(&config.database_url).await?;

    let outcomes = provision::seed(&store, users).await;

    let mut created = Vec::new();
    let mut failures = Vec::new();
    for outcome in outcomes {
        match outcome {
            Ok(client) => created.push(client),
            Err(e) => failures.push(e),
        }
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&created)?);
    } else if !created.is_empty() {
        println!("Keys created ({} total)", created.len());
        println!("{:-<72}", "");

        for client in &created {
            println!("{} [{}]", client.username, client.role);
            println!("  id:          {}", client.id);
            println!("  signing key: {}", client.signing_key);
            println!();
        }

        println!("Signing keys are shown once; store them now.");
    }

    for failure in &failures {
        error!("{failure}");
    }

    if failures.is_empty() {
        Ok(ExitCode::SUCCESS)
    } else {
        eprintln!(
            "{} of {} inserts failed",
            failures.len(),
            created.len() + failures.len()
        );
        Ok(ExitCode::FAILURE)
    }
}
