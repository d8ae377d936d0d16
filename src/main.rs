pub mod config;
pub mod db;
pub mod error;

use anyhow::Result;
use mongodb::Client;
use tracing_subscriber::EnvFilter;

use crate::config::Config;
use crate::db::models::RecordValue;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = Config::from_env()?;

    let client = db::connect(&config.conn_string).await?;

    // Release the client on both the success and the failure path.
    let handle = client.clone();
    db::release_after(run(&client), move || async move {
        handle.shutdown().await;
        tracing::info!("MongoDB client shut down");
    })
    .await
}

async fn run(client: &Client) -> Result<()> {
    let db = db::get_database(client);

    let inserted_id = db::queries::insert_record(&db).await?;
    println!("{}", inserted_id);

    match db::queries::find_record(&db).await? {
        Some(found) => println!("{:?}", found),
        None => {
            println!("record does not exist");
            // TODO: confirm with the product owner whether the zero-value
            // line below is wanted after a miss, or a leftover to drop.
            println!("{:?}", RecordValue::default());
        }
    }

    Ok(())
}
