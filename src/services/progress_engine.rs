use serde::{Deserialize, Serialize};

use crate::models::{
    achievement_catalog, Achievement, ActivityKind, CategoryStat, ProgressSnapshot,
};
use crate::store::{queries, LogStore};

/// Raw activity counts for one refresh, one per tracked category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ActivityCounts {
    pub learned: u32,
    pub exercises: u32,
    pub challenges: u32,
    pub streak: u32,
}

impl ActivityCounts {
    pub fn for_kind(&self, kind: ActivityKind) -> u32 {
        match kind {
            ActivityKind::Vocabulary => self.learned,
            ActivityKind::Exercises => self.exercises,
            ActivityKind::Speaking => self.challenges,
            ActivityKind::Streak => self.streak,
        }
    }
}

/// Read all four activity logs from the store. A failed or corrupt read
/// defaults that one log to zero and leaves the other three untouched;
/// the failure goes to the diagnostic log, never to the caller.
pub fn load_activity_counts(store: &dyn LogStore) -> ActivityCounts {
    ActivityCounts {
        learned: completion_count(store, ActivityKind::Vocabulary),
        exercises: completion_count(store, ActivityKind::Exercises),
        challenges: completion_count(store, ActivityKind::Speaking),
        streak: match queries::read_daily_progress(store) {
            Ok(progress) => progress.streak,
            Err(e) => {
                log::error!(
                    "Failed to read {}: {}",
                    ActivityKind::Streak.log_key(),
                    e
                );
                0
            }
        },
    }
}

fn completion_count(store: &dyn LogStore, kind: ActivityKind) -> u32 {
    match queries::read_completions(store, kind.log_key()) {
        Ok(records) => records.len() as u32,
        Err(e) => {
            log::error!("Failed to read {}: {}", kind.log_key(), e);
            0
        }
    }
}

/// Per-category stats in display order, paired with the fixed targets.
/// Counts above a target are reported as-is.
pub fn category_stats(counts: &ActivityCounts) -> Vec<CategoryStat> {
    ActivityKind::ALL
        .iter()
        .map(|&kind| CategoryStat {
            category: kind.label().to_string(),
            icon: kind.icon().to_string(),
            count: counts.for_kind(kind),
            total: kind.target(),
        })
        .collect()
}

/// Mean of the four count/target ratios, as a rounded percentage.
///
/// Every category carries equal weight regardless of target size: 7
/// streak days move the overall number as much as 500 vocabulary items.
/// Ratios are not clamped before averaging, so counts above a target
/// push the result past 100.
pub fn overall_progress(counts: &ActivityCounts) -> u32 {
    let ratio_sum: f64 = ActivityKind::ALL
        .iter()
        .map(|&kind| counts.for_kind(kind) as f64 / kind.target() as f64)
        .sum();
    let mean = ratio_sum / ActivityKind::ALL.len() as f64;
    (mean * 100.0).round() as u32
}

/// Unlock states for the achievement catalog, in catalog order.
/// Thresholds are inclusive.
pub fn evaluate_achievements(counts: &ActivityCounts) -> Vec<Achievement> {
    achievement_catalog()
        .into_iter()
        .map(|spec| Achievement {
            id: spec.id.to_string(),
            title: spec.title.to_string(),
            description: spec.description.to_string(),
            requirement: spec.requirement,
            completed: counts.for_kind(spec.kind) >= spec.requirement,
        })
        .collect()
}

/// One full refresh: read the logs and recompute every derived value
/// from scratch. Nothing is carried over from the previous snapshot.
pub async fn refresh_progress_snapshot(store: &dyn LogStore) -> ProgressSnapshot {
    let counts = load_activity_counts(store);
    ProgressSnapshot {
        stats: category_stats(&counts),
        overall_progress: overall_progress(&counts),
        achievements: evaluate_achievements(&counts),
        updated_at: chrono::Utc::now().timestamp(),
    }
}

/// Snapshot cache owned by the progress screen's lifecycle: created
/// empty on activation, replaced wholesale by each refresh, dropped
/// with the view. Single writer, never re-entrant.
#[derive(Debug, Default)]
pub struct ProgressView {
    snapshot: ProgressSnapshot,
}

impl ProgressView {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn refresh(&mut self, store: &dyn LogStore) -> &ProgressSnapshot {
        self.snapshot = refresh_progress_snapshot(store).await;
        &self.snapshot
    }

    pub fn current(&self) -> &ProgressSnapshot {
        &self.snapshot
    }
}
