use serde::Serialize;

use crate::models::{ActivityKind, CompletionRecord, DailyProgress};
use crate::store::{LogStore, StoreError};

/// Read a completion log. An absent key is an empty log.
pub fn read_completions(
    store: &dyn LogStore,
    key: &str,
) -> Result<Vec<CompletionRecord>, StoreError> {
    match store.read_log(key)? {
        Some(blob) => serde_json::from_slice(&blob).map_err(|e| StoreError::Corrupt {
            key: key.to_string(),
            source: e,
        }),
        None => Ok(Vec::new()),
    }
}

/// Read the daily streak record. An absent key is a zero streak.
pub fn read_daily_progress(store: &dyn LogStore) -> Result<DailyProgress, StoreError> {
    let key = ActivityKind::Streak.log_key();
    match store.read_log(key)? {
        Some(blob) => serde_json::from_slice(&blob).map_err(|e| StoreError::Corrupt {
            key: key.to_string(),
            source: e,
        }),
        None => Ok(DailyProgress::default()),
    }
}

/// Append one record to a completion log (read-modify-write of the
/// stored JSON array, last write wins).
pub fn append_completion(
    store: &dyn LogStore,
    key: &str,
    record: CompletionRecord,
) -> Result<(), StoreError> {
    let mut records = read_completions(store, key)?;
    records.push(record);
    write_json(store, key, &records)
}

pub fn write_daily_progress(
    store: &dyn LogStore,
    progress: &DailyProgress,
) -> Result<(), StoreError> {
    write_json(store, ActivityKind::Streak.log_key(), progress)
}

fn write_json<T: Serialize>(store: &dyn LogStore, key: &str, value: &T) -> Result<(), StoreError> {
    let blob = serde_json::to_vec(value).map_err(|e| StoreError::Encode {
        key: key.to_string(),
        source: e,
    })?;
    store.write_log(key, &blob)
}
