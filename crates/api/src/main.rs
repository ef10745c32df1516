use anyhow::Context;

use filmcat_infra::Settings;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    filmcat_observability::init();

    let settings = Settings::from_env();
    tracing::debug!(?settings, "configuration loaded");

    let services = filmcat_api::app::services::build_services(&settings).await?;
    let app = filmcat_api::app::build_app(services);

    let listener = tokio::net::TcpListener::bind(settings.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", settings.bind_addr))?;

    tracing::info!("listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await.context("server error")?;
    Ok(())
}
