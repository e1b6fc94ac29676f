use dotenvy::dotenv;
use pos_seeder::{
    config::{self, database},
    dataset::Dataset,
    errors::Result,
    export,
};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // 1. Initialize tracing (as early as possible)
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // 2. Load .env file; variables may also be set externally
    dotenv().ok();

    // 3. Resolve configuration (SEEDER_CONFIG, ./config.toml, or defaults)
    let seeder_config = config::load_default_config()
        .inspect_err(|e| error!("Failed to load configuration: {}", e))?;

    // 4. Generate everything in memory before touching any output
    let dataset = Dataset::generate(&seeder_config)
        .inspect_err(|e| error!("Generation failed: {}", e))?;

    // 5. Write files
    export::export_dataset(&seeder_config.output, &dataset)
        .inspect_err(|e| error!("Export failed: {}", e))?;

    // 6. Optionally load into a database
    if let Some(url) = database::get_database_url(&seeder_config.output) {
        let db = database::create_connection(&url)
            .await
            .inspect_err(|e| error!("Failed to connect to database: {}", e))?;
        export::database::load_dataset(&db, &dataset)
            .await
            .inspect_err(|e| error!("Failed to load dataset: {}", e))?;
    }

    info!("{}", dataset.summary.format_summary());
    Ok(())
}
