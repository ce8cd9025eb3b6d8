use anyhow::Context;
use anime_catalog_lib::shared::utils::logger::init_logger;
use anime_catalog_lib::shared::AppConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logger();
    let config = AppConfig::from_env().context("Failed to load configuration")?;

    let app = anime_catalog_lib::build_app(&config).context("Failed to initialize application")?;

    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("Failed to bind {}", config.bind_addr))?;
    log::info!("Anime catalog API listening on {}", config.bind_addr);

    axum::serve(listener, app).await.context("Server error")?;
    Ok(())
}
