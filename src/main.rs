use anyhow::{Context, Result};
use news_enrichment::application::{
    ports::enrichment::ArticleEnricher, services::ApplicationServices,
};
use news_enrichment::config::AppConfig;
use news_enrichment::domain::article::{ArticleReadRepository, ArticleWriteRepository};
use news_enrichment::infrastructure::{
    database, enrichment::OpenAiEnricher, repositories::PostgresArticleRepository,
};
use news_enrichment::presentation::http::{routes::build_router_with_origins, state::HttpState};
use std::{net::SocketAddr, sync::Arc};
use tokio::signal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    if let Err(err) = bootstrap().await {
        tracing::error!(error = %err, "fatal error");
        eprintln!("fatal error: {err:#}");
        std::process::exit(1);
    }
}

async fn bootstrap() -> Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = AppConfig::from_env()?;
    tracing::debug!(?config, "configuration loaded");

    let pool = database::init_pool(
        config.database_url(),
        config.database_max_connections(),
        config.statement_timeout(),
    )
    .await
    .context("unable to connect to the article database")?;
    database::ensure_articles_table(&pool, config.article_table())
        .await
        .context("unable to create the article table")?;

    let repository = Arc::new(PostgresArticleRepository::new(
        pool,
        config.article_table(),
        config.statement_timeout(),
    )?);
    let article_write_repo: Arc<dyn ArticleWriteRepository> = repository.clone();
    let article_read_repo: Arc<dyn ArticleReadRepository> = repository;

    let enricher: Arc<dyn ArticleEnricher> = Arc::new(OpenAiEnricher::new(
        config.openai_api_key(),
        config.openai_base_url(),
        config.openai_model(),
        config.openai_timeout(),
    )?);

    let services = Arc::new(ApplicationServices::new(
        Arc::clone(&article_write_repo),
        Arc::clone(&article_read_repo),
        Arc::clone(&enricher),
    ));

    let state = HttpState {
        services: Arc::clone(&services),
    };

    let app = build_router_with_origins(state, config.allowed_origins());

    let listener = tokio::net::TcpListener::bind(config.listen_addr())
        .await
        .with_context(|| format!("unable to bind {}", config.listen_addr()))?;
    let address: SocketAddr = listener.local_addr()?;
    tracing::info!("listening on {address}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

fn init_tracing() {
    let env_filter = std::env::var("RUST_LOG")
        .ok()
        .unwrap_or_else(|| "info,tower_http=info,sqlx=warn".to_string());

    let subscriber = tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(env_filter))
        .with(tracing_subscriber::fmt::layer());

    if subscriber.try_init().is_err() {
        tracing::warn!("tracing subscriber already initialised");
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = signal::ctrl_c().await {
            tracing::error!(error = %err, "failed to install CTRL+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to install terminate handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {}
        _ = terminate => {}
    }
    tracing::info!("shutdown signal received");
}
