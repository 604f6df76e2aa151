use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One completed learning unit in an append-only activity log.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompletionRecord {
    pub id: Uuid,
    pub item: String,
    pub recorded_at: i64,
}

impl CompletionRecord {
    pub fn new(item: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            item: item.into(),
            recorded_at: chrono::Utc::now().timestamp(),
        }
    }
}

/// Streak counter stored under the daily progress key. Every field
/// defaults so partial records from older app versions still load.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct DailyProgress {
    #[serde(default)]
    pub streak: u32,
    #[serde(default)]
    pub last_practiced: Option<String>,
}
