// src/commands.rs
//! Command implementations for the Pantry CLI

use anyhow::Result;
use pantry::db::{self, models::Ingredient};
use pantry::pagination::{DEFAULT_PAGE_SIZE, Page};
use pantry::store::SqliteStore;
use pantry::workflow::IngredientWorkflow;
use tracing::info;

// =============================================================================
// Command Handlers
// =============================================================================

/// Initialize the Pantry database
pub fn cmd_init(db_path: &str) -> Result<()> {
    info!("Initializing Pantry database at: {}", db_path);
    db::init(db_path)?;
    println!("Database initialized successfully at: {}", db_path);
    Ok(())
}

/// Run the HTTP server until interrupted
#[cfg(feature = "server")]
pub fn cmd_serve(config: Option<&str>, bind: Option<&str>, db_path: Option<&str>) -> Result<()> {
    use anyhow::Context;
    use pantry::server::{PantryConfig, run_server};

    let file_config = match config {
        Some(path) => PantryConfig::load(std::path::Path::new(path))?,
        None => PantryConfig::default(),
    };
    let mut server_config = file_config.to_server_config()?;

    if let Some(bind) = bind {
        server_config.bind_addr = bind
            .parse()
            .with_context(|| format!("Invalid bind address: {}", bind))?;
    }
    if let Some(db_path) = db_path {
        server_config.db_path = db_path.into();
    }

    let runtime = tokio::runtime::Runtime::new().context("Failed to start async runtime")?;
    runtime.block_on(run_server(server_config))
}

#[cfg(not(feature = "server"))]
pub fn cmd_serve(_config: Option<&str>, _bind: Option<&str>, _db_path: Option<&str>) -> Result<()> {
    anyhow::bail!("pantry was built without the `server` feature")
}

/// Insert `count` random ingredients
pub fn cmd_seed(count: usize, db_path: &str) -> Result<()> {
    db::init(db_path)?;
    let mut conn = db::open(db_path)?;

    let ids = db::transaction(&mut conn, |tx| {
        let mut store = SqliteStore::new(tx);
        pantry::seed::seed(&mut store, count)
    })?;

    println!("Inserted {} ingredients into {}", ids.len(), db_path);
    Ok(())
}

/// Print one page of the ingredient list
pub fn cmd_list(page: i64, db_path: &str) -> Result<()> {
    let conn = db::open(db_path)?;
    let mut store = SqliteStore::new(&conn);
    let workflow = IngredientWorkflow::new(&mut store).with_page_size(DEFAULT_PAGE_SIZE);
    let page = workflow.list(Some(page))?;

    print!("{}", render_page(&page));
    Ok(())
}

fn render_page(page: &Page<Ingredient>) -> String {
    if page.total_count == 0 {
        return "No ingredients found.\n".to_string();
    }

    let mut out = format!(
        "Page {}/{} ({} ingredients)\n",
        page.current_page, page.total_pages, page.total_count
    );
    if page.items.is_empty() {
        out.push_str("  (no ingredients on this page)\n");
    }
    for ingredient in &page.items {
        out.push_str(&format!(
            "  #{:<5} {:<50} {:>10.2}  {}\n",
            ingredient.id().unwrap_or_default(),
            ingredient.name.as_deref().unwrap_or(""),
            ingredient.price.unwrap_or_default(),
            ingredient.created_at().format("%Y-%m-%d %H:%M"),
        ));
    }
    out
}
