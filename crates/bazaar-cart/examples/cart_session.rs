//! A full cart session against the on-device SQLite store.
//!
//! Run it twice to watch the cart survive the "restart":
//!
//! ```text
//! cargo run --example cart_session
//! cargo run --example cart_session
//! ```
//!
//! Set `BAZAAR_DB_PATH` to use a custom database file.

use std::sync::Arc;

use directories::ProjectDirs;
use tracing::info;
use tracing_subscriber::EnvFilter;

use bazaar_cart::{CartProvider, ProductDraft};
use bazaar_storage::{SqliteStorage, Storage, StorageConfig};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();

    let db_path = database_path()?;
    info!(path = %db_path.display(), "Opening cart storage");

    let storage: Arc<dyn Storage> =
        Arc::new(SqliteStorage::new(StorageConfig::new(db_path)).await?);

    // One provider per app session; mount hydrates whatever the last
    // session left behind.
    let provider = CartProvider::mount(storage).await?;
    let cart = provider.context().use_cart()?;

    println!("Cart restored from the previous session:");
    print_cart(&cart.products());

    cart.add_to_cart(ProductDraft::new(
        "tote-canvas",
        "Canvas Tote",
        "https://img.bazaar.example/tote.png",
        24.5,
    ))
    .await?;

    cart.add_to_cart(ProductDraft::new(
        "mug-enamel",
        "Enamel Mug",
        "https://img.bazaar.example/mug.png",
        12.0,
    ))
    .await?;

    cart.increment("mug-enamel").await?;

    println!("\nCart after this session's shopping:");
    print_cart(&cart.products());

    Ok(())
}

fn print_cart(products: &[bazaar_cart::Product]) {
    if products.is_empty() {
        println!("  (empty)");
        return;
    }
    for item in products {
        println!("  {} x{}  @ {}", item.title, item.quantity, item.price);
    }
}

/// Initializes the tracing subscriber for structured logging.
///
/// Default: INFO level; override with `RUST_LOG` (e.g. `RUST_LOG=bazaar=debug`).
fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info,bazaar=debug"));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}

/// Determines the database file path based on the platform.
///
/// ## Development Override
/// Set `BAZAAR_DB_PATH` to use a custom path.
fn database_path() -> Result<std::path::PathBuf, Box<dyn std::error::Error>> {
    if let Ok(path) = std::env::var("BAZAAR_DB_PATH") {
        return Ok(std::path::PathBuf::from(path));
    }

    let proj_dirs = ProjectDirs::from("com", "bazaar", "storefront")
        .ok_or("Could not determine app data directory")?;

    let data_dir = proj_dirs.data_dir();
    std::fs::create_dir_all(data_dir)?;

    Ok(data_dir.join("bazaar.db"))
}
