use anyhow::Result;

use tonguetide::services::progress_engine::ProgressView;
use tonguetide::store::SqliteLogStore;
use tonguetide::utils::config;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let data_dir = config::data_dir();
    std::fs::create_dir_all(&data_dir)?;
    let store = SqliteLogStore::open(&config::db_path())?;

    let mut view = ProgressView::new();
    let snapshot = view.refresh(&store).await;
    println!("{}", serde_json::to_string_pretty(snapshot)?);

    Ok(())
}
