use chrono::NaiveDate;

use crate::models::{ActivityKind, CompletionRecord, DailyProgress};
use crate::store::{queries, LogStore, StoreError};

pub fn record_learned_item(store: &dyn LogStore, item: &str) -> Result<(), StoreError> {
    queries::append_completion(
        store,
        ActivityKind::Vocabulary.log_key(),
        CompletionRecord::new(item),
    )
}

pub fn record_completed_exercise(store: &dyn LogStore, item: &str) -> Result<(), StoreError> {
    queries::append_completion(
        store,
        ActivityKind::Exercises.log_key(),
        CompletionRecord::new(item),
    )
}

pub fn record_speaking_challenge(store: &dyn LogStore, item: &str) -> Result<(), StoreError> {
    queries::append_completion(
        store,
        ActivityKind::Speaking.log_key(),
        CompletionRecord::new(item),
    )
}

/// Update the daily streak for a practice session on `today`.
/// Practicing again the same day changes nothing; the day after the
/// last practice extends the streak; anything else starts over at 1.
pub fn record_practice_day(
    store: &dyn LogStore,
    today: NaiveDate,
) -> Result<DailyProgress, StoreError> {
    let current = queries::read_daily_progress(store)?;
    let last = current
        .last_practiced
        .as_deref()
        .and_then(|s| s.parse::<NaiveDate>().ok());

    let streak = match last {
        Some(day) if day == today => return Ok(current),
        Some(day) if day.succ_opt() == Some(today) => current.streak + 1,
        _ => 1,
    };

    let updated = DailyProgress {
        streak,
        last_practiced: Some(today.to_string()),
    };
    queries::write_daily_progress(store, &updated)?;
    Ok(updated)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::SqliteLogStore;

    fn date(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    #[test]
    fn first_practice_starts_a_streak_of_one() {
        let store = SqliteLogStore::open_in_memory().unwrap();
        let progress = record_practice_day(&store, date("2026-08-25")).unwrap();
        assert_eq!(progress.streak, 1);
        assert_eq!(progress.last_practiced.as_deref(), Some("2026-08-25"));
    }

    #[test]
    fn consecutive_days_extend_the_streak() {
        let store = SqliteLogStore::open_in_memory().unwrap();
        record_practice_day(&store, date("2026-08-25")).unwrap();
        record_practice_day(&store, date("2026-08-26")).unwrap();
        let progress = record_practice_day(&store, date("2026-08-27")).unwrap();
        assert_eq!(progress.streak, 3);
    }

    #[test]
    fn repeating_a_day_leaves_the_streak_alone() {
        let store = SqliteLogStore::open_in_memory().unwrap();
        record_practice_day(&store, date("2026-08-25")).unwrap();
        record_practice_day(&store, date("2026-08-26")).unwrap();
        let progress = record_practice_day(&store, date("2026-08-26")).unwrap();
        assert_eq!(progress.streak, 2);
    }

    #[test]
    fn a_missed_day_resets_the_streak() {
        let store = SqliteLogStore::open_in_memory().unwrap();
        record_practice_day(&store, date("2026-08-25")).unwrap();
        record_practice_day(&store, date("2026-08-26")).unwrap();
        let progress = record_practice_day(&store, date("2026-08-29")).unwrap();
        assert_eq!(progress.streak, 1);
        assert_eq!(progress.last_practiced.as_deref(), Some("2026-08-29"));
    }

    #[test]
    fn recorded_completions_feed_the_logs() {
        let store = SqliteLogStore::open_in_memory().unwrap();
        record_learned_item(&store, "hello").unwrap();
        record_learned_item(&store, "goodbye").unwrap();
        record_completed_exercise(&store, "unit-1").unwrap();
        record_speaking_challenge(&store, "intro").unwrap();

        let learned =
            queries::read_completions(&store, ActivityKind::Vocabulary.log_key()).unwrap();
        assert_eq!(learned.len(), 2);
        let exercises =
            queries::read_completions(&store, ActivityKind::Exercises.log_key()).unwrap();
        assert_eq!(exercises.len(), 1);
        let challenges =
            queries::read_completions(&store, ActivityKind::Speaking.log_key()).unwrap();
        assert_eq!(challenges.len(), 1);
    }
}
