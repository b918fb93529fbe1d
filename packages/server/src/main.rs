use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use axum::http::HeaderValue;
use clap::{Parser, Subcommand};
use common::catalog::StaticCatalog;
use common::config::StorageBackend;
use common::storage::ObjectStore;
use common::storage::filesystem::FilesystemObjectStore;
use common::storage::s3::S3ObjectStore;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{Level, info};

use gallery_server::config::{AppConfig, CorsConfig};
use gallery_server::gallery::Gallery;
use gallery_server::state::AppState;
use gallery_server::store::DatabaseRecordStore;
use gallery_server::utils::hash;

#[derive(Parser, Debug)]
#[command(name = "gallery-server")]
#[command(about = "Astrophotography gallery API server", version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print the argon2 hash of a password for `auth.admin_password_hash`.
    HashPassword {
        #[arg(env = "GALLERY_ADMIN_PASSWORD")]
        password: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    if let Some(Command::HashPassword { password }) = cli.command {
        let hashed = hash::hash_password(&password)
            .map_err(|e| anyhow::anyhow!("Failed to hash password: {e}"))?;
        println!("{hashed}");
        return Ok(());
    }

    tracing_subscriber::fmt().with_max_level(Level::INFO).init();

    let config = AppConfig::load().context("Failed to load config")?;

    let db = gallery_server::database::init_db(&config.database.url)
        .await
        .context("Failed to connect to database")?;
    let records = Arc::new(DatabaseRecordStore::new(db));

    let catalog = StaticCatalog::embedded().context("Failed to parse embedded catalog")?;
    info!(
        images = catalog.images().len(),
        travel_photos = catalog.travel_photos().len(),
        "Embedded catalog loaded"
    );
    let gallery = Gallery::new(records.clone(), Arc::new(catalog));

    let objects = init_object_store(&config).await?;

    let cors = cors_layer(&config.server.cors)?;
    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port)
        .parse()
        .context("Invalid server address")?;

    let state = AppState {
        config,
        gallery,
        records,
        objects,
    };

    let app = gallery_server::build_router(state)
        .layer(cors)
        .layer(TraceLayer::new_for_http());

    info!("Server running at http://{}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

async fn init_object_store(config: &AppConfig) -> anyhow::Result<Arc<dyn ObjectStore>> {
    let storage = &config.storage;
    let store: Arc<dyn ObjectStore> = match storage.backend {
        StorageBackend::Filesystem => {
            info!(root = %storage.root.display(), "Using filesystem object storage");
            Arc::new(
                FilesystemObjectStore::new(
                    storage.root.clone(),
                    storage.public_base_url.clone(),
                    storage.max_upload_size,
                )
                .await
                .context("Failed to initialize filesystem storage")?,
            )
        }
        StorageBackend::S3 => {
            let s3 = storage
                .s3
                .as_ref()
                .context("storage.s3 must be set when storage.backend = \"s3\"")?;
            info!(bucket = %s3.bucket, endpoint = %s3.endpoint, "Using S3 object storage");
            Arc::new(
                S3ObjectStore::new(s3, storage.public_base_url.clone(), storage.max_upload_size)
                    .context("Failed to initialize S3 storage")?,
            )
        }
    };
    Ok(store)
}

fn cors_layer(cors: &CorsConfig) -> anyhow::Result<CorsLayer> {
    let origins = cors
        .allow_origins
        .iter()
        .map(|origin| {
            HeaderValue::from_str(origin).with_context(|| format!("Invalid CORS origin '{origin}'"))
        })
        .collect::<anyhow::Result<Vec<_>>>()?;

    Ok(CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods(tower_http::cors::Any)
        .allow_headers(tower_http::cors::Any)
        .max_age(Duration::from_secs(cors.max_age)))
}
