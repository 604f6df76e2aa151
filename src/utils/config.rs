use std::path::PathBuf;

const ENV_DATA_DIR: &str = "TONGUETIDE_DATA_DIR";
const DB_FILE: &str = "tonguetide.db";

pub fn data_dir() -> PathBuf {
    std::env::var(ENV_DATA_DIR)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("."))
}

pub fn db_path() -> PathBuf {
    data_dir().join(DB_FILE)
}
