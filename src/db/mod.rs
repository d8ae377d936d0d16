pub mod models;
pub mod queries;

use anyhow::{Context, Result};
use mongodb::{Client, Database, options::ClientOptions};
use std::future::Future;
use tokio::time::timeout;

use crate::config::CONNECT_TIMEOUT;

pub const DATABASE_NAME: &str = "testing";

/// Create MongoDB connection
pub async fn connect(uri: &str) -> Result<Client> {
    let mut options = ClientOptions::parse(uri)
        .await
        .context("failed to connect mongo")?;
    options.connect_timeout = Some(CONNECT_TIMEOUT);
    options.server_selection_timeout = Some(CONNECT_TIMEOUT);

    let client = Client::with_options(options).context("failed to connect mongo")?;

    // Ping to verify connection
    timeout(
        CONNECT_TIMEOUT,
        client
            .database("admin")
            .run_command(mongodb::bson::doc! { "ping": 1 }),
    )
    .await
    .context("failed to connect mongo")?
    .context("failed to connect mongo")?;

    tracing::info!("Successfully connected to MongoDB");
    Ok(client)
}

/// Get database handle
pub fn get_database(client: &Client) -> Database {
    client.database(DATABASE_NAME)
}

/// Run `work`, then run `release`, whether or not `work` succeeded.
/// The release step is never skipped once this function is entered.
pub async fn release_after<T, W, R, RFut>(work: W, release: R) -> T
where
    W: Future<Output = T>,
    R: FnOnce() -> RFut,
    RFut: Future<Output = ()>,
{
    let outcome = work.await;
    release().await;
    outcome
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::anyhow;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicU64, Ordering};

    #[tokio::test]
    async fn test_release_runs_on_success() {
        let released = Arc::new(AtomicU64::new(0));
        let hook = released.clone();

        let outcome: Result<u32> = release_after(async { Ok(7) }, || async move {
            hook.fetch_add(1, Ordering::SeqCst);
        })
        .await;

        assert_eq!(outcome.unwrap(), 7);
        assert_eq!(released.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_release_runs_on_failure() {
        let released = Arc::new(AtomicU64::new(0));
        let hook = released.clone();

        let outcome: Result<u32> = release_after(async { Err(anyhow!("boom")) }, || async move {
            hook.fetch_add(1, Ordering::SeqCst);
        })
        .await;

        assert!(outcome.is_err());
        assert_eq!(released.load(Ordering::SeqCst), 1);
    }
}
