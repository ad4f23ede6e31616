use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use api_rest::AppState;
use emr_core::config::{reload_on_change_from_env_value, resolve_address_hierarchy_file};
use emr_core::{CoreConfig, HierarchyStore, JsonAddressBook, PersonAddressSource};

/// Main entry point for the EMR address service
///
/// Starts the REST server with OpenAPI/Swagger documentation.
///
/// # Environment Variables
/// - `EMR_REST_ADDR`: REST server address (default: "0.0.0.0:3000")
/// - `EMR_APP_DATA_DIR`: Application data directory holding the hierarchy file (default: "app_data")
/// - `EMR_ADDRESS_HIERARCHY_FILE`: Explicit hierarchy file, overriding the data directory
/// - `EMR_PERSON_ADDRESS_FILE`: JSON file of person addresses used for `patientId` pre-fill
/// - `EMR_ADDRESS_RELOAD_ON_CHANGE`: Reload the hierarchy when the file changes (default: false)
/// - `API_KEY`: API key accepted in the `x-api-key` header
///
/// # Errors
/// Returns an error if:
/// - the logging/tracing configuration cannot be initialised,
/// - the configuration is invalid or the person address file cannot be read,
/// - the server address cannot be bound, or
/// - the HTTP server fails while running.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("emr_run=info".parse()?)
                .add_directive("emr_core=info".parse()?)
                .add_directive("api_rest=info".parse()?),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let rest_addr =
        std::env::var("EMR_REST_ADDR").unwrap_or_else(|_| emr_core::DEFAULT_REST_ADDR.into());

    let app_data_dir = std::env::var("EMR_APP_DATA_DIR")
        .unwrap_or_else(|_| emr_core::DEFAULT_APP_DATA_DIR.into());
    let hierarchy_file = resolve_address_hierarchy_file(
        &PathBuf::from(app_data_dir),
        std::env::var("EMR_ADDRESS_HIERARCHY_FILE")
            .ok()
            .map(PathBuf::from),
    );
    let person_address_file = std::env::var("EMR_PERSON_ADDRESS_FILE")
        .ok()
        .filter(|v| !v.trim().is_empty())
        .map(PathBuf::from);
    let reload_on_change =
        reload_on_change_from_env_value(std::env::var("EMR_ADDRESS_RELOAD_ON_CHANGE").ok())?;

    let cfg = CoreConfig::new(hierarchy_file, person_address_file, reload_on_change)?;

    let persons: Arc<dyn PersonAddressSource> = match cfg.person_address_file() {
        Some(path) => Arc::new(JsonAddressBook::load(path)?),
        None => {
            tracing::warn!("EMR_PERSON_ADDRESS_FILE not set; patientId lookups will return 404");
            Arc::new(JsonAddressBook::empty())
        }
    };

    let state = AppState {
        store: Arc::new(HierarchyStore::from_config(&cfg)),
        persons,
        api_key: std::env::var("API_KEY").ok().filter(|k| !k.is_empty()),
    };

    tracing::info!(
        "++ Address hierarchy source: {}",
        cfg.address_hierarchy_file().display()
    );
    tracing::info!("++ Starting EMR REST on {}", rest_addr);

    let app = api_rest::router(state);
    let listener = tokio::net::TcpListener::bind(&rest_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
