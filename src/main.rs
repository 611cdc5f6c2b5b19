use mimalloc::MiMalloc;
use stockroom::service::credentials;
use stockroom::{Config, Database, Shell};
use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    let cfg = Config::load()?;

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(cfg.loglevel.clone()));
    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_level(true)
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();

    info!(
        database_url = %cfg.database_url,
        loglevel = %cfg.loglevel,
        users = cfg.users.len(),
        quiet_request_failures = cfg.quiet_request_failures
    );

    let db = Database::open(&cfg).await?;
    let verifier = credentials::from_config(&cfg);

    let mut shell = Shell::new(
        stockroom::ui::stdio(),
        db.clone(),
        verifier,
        cfg.quiet_request_failures,
    );
    let result = shell.run().await;

    db.close().await;
    info!("input closed; exiting");
    Ok(result?)
}
