use anyhow::Context;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;
use wimbd_api::app::router::{AppState, build_router};
use wimbd_api::catalog::registry::Catalog;
use wimbd_api::catalog::types::Cluster;
use wimbd_api::config::{AppConfig, EsClusterConfig};
use wimbd_api::domains::memory::MemoryDomainStore;
use wimbd_api::domains::postgres::PostgresDomainStore;
use wimbd_api::domains::service::DomainService;
use wimbd_api::domains::store::DomainStore;
use wimbd_api::phrases::elastic::ElasticCounter;
use wimbd_api::phrases::service::PhraseService;
use wimbd_api::resources::tables::CorpusTables;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args: Vec<String> = std::env::args().collect();
    if args.iter().any(|a| a == "--help" || a == "-h") {
        eprintln!("Usage: {} [--bind <addr:port>] [--config <path>]", args[0]);
        eprintln!("Environment: POSTGRES_URL, WIMBD_DATA_DIR, ES_CONFIG, ES_DOLMA_CONFIG");
        std::process::exit(0);
    }

    let config = AppConfig::load(&args)?;
    tracing::info!("Data directory: {}", config.data_dir.display());

    let catalog = Arc::new(Catalog::builtin());

    // 1. Flat files:
    let tables = {
        let data_dir = config.data_dir.clone();
        let catalog = catalog.clone();
        tokio::task::spawn_blocking(move || CorpusTables::load(&data_dir, &catalog))
            .await
            .context("resource loader panicked")??
    };

    // 2. Domain rankings:
    let store: Arc<dyn DomainStore> = match &config.postgres_url {
        Some(url) => {
            tracing::info!(
                "Using Postgres for domain tables (pool {}..{})",
                config.pool_min,
                config.pool_max
            );
            Arc::new(
                PostgresDomainStore::connect_lazy(url, config.pool_min, config.pool_max)
                    .context("invalid POSTGRES_URL")?,
            )
        }
        None => {
            tracing::warn!("POSTGRES_URL not set, serving domain tables from memory");
            let data_dir = config.data_dir.clone();
            let catalog = catalog.clone();
            Arc::new(
                tokio::task::spawn_blocking(move || MemoryDomainStore::load(&data_dir, &catalog))
                    .await
                    .context("domain loader panicked")??,
            )
        }
    };
    let domains = DomainService::new(store, config.cache_capacity, config.query_timeout());

    // 3. Search clusters:
    tracing::info!("loading ES indices");
    let es_default = EsClusterConfig::from_file(&config.es_config)?;
    let es_dolma = EsClusterConfig::from_file(&config.es_dolma_config)?;
    let phrases = PhraseService::new(config.cache_capacity, config.query_timeout())
        .with_counter(Cluster::Default, Arc::new(ElasticCounter::new(es_default)))
        .with_counter(Cluster::Dolma, Arc::new(ElasticCounter::new(es_dolma)));

    tracing::info!("done loading resources");

    // 4. HTTP Router:
    let app = build_router(AppState {
        catalog,
        tables: Arc::new(tables),
        domains: Arc::new(domains),
        phrases: Arc::new(phrases),
    });

    tracing::info!("HTTP server listening on {}", config.bind);
    tracing::info!("Press Ctrl+C to shutdown");

    let listener = tokio::net::TcpListener::bind(config.bind).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
            tracing::info!("Shutting down");
        })
        .await?;

    Ok(())
}
