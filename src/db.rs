use crate::config::Config;
use anyhow::{Context, Result};
use mongodb::{Client, Database, bson::doc, options::ClientOptions};
use tracing::info;

/// Open the process-wide client and select the configured database.
///
/// The timeout only bounds connection setup; the `ping` makes an unreachable
/// server fail startup instead of the first request.
pub async fn init_db(config: &Config) -> Result<Database> {
    let mut options = ClientOptions::parse(config.mongo_url.as_str())
        .await
        .context("Invalid MongoDB connection string")?;
    options.connect_timeout = Some(config.connect_timeout);
    options.server_selection_timeout = Some(config.connect_timeout);

    let client = Client::with_options(options).context("Failed to build MongoDB client")?;
    let db = client.database(&config.mongo_database);

    db.run_command(doc! { "ping": 1 })
        .await
        .context("Failed to connect to MongoDB")?;

    info!(database = %config.mongo_database, "Connected to MongoDB");
    Ok(db)
}
