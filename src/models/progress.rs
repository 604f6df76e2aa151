use serde::{Deserialize, Serialize};

use crate::models::achievement::Achievement;

/// The four tracked activity categories, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ActivityKind {
    Vocabulary,
    Exercises,
    Speaking,
    Streak,
}

impl ActivityKind {
    pub const ALL: [ActivityKind; 4] = [
        ActivityKind::Vocabulary,
        ActivityKind::Exercises,
        ActivityKind::Speaking,
        ActivityKind::Streak,
    ];

    /// Key of the backing log in the activity log store.
    pub fn log_key(self) -> &'static str {
        match self {
            ActivityKind::Vocabulary => "learnedItems",
            ActivityKind::Exercises => "completedExercises",
            ActivityKind::Speaking => "speakingChallenges",
            ActivityKind::Streak => "dailyProgress",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ActivityKind::Vocabulary => "Vocabulary Learned",
            ActivityKind::Exercises => "Exercises Completed",
            ActivityKind::Speaking => "Speaking Challenges",
            ActivityKind::Streak => "Daily Streaks",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            ActivityKind::Vocabulary => "book-outline",
            ActivityKind::Exercises => "fitness-outline",
            ActivityKind::Speaking => "mic-outline",
            ActivityKind::Streak => "flame-outline",
        }
    }

    /// Completion target shown for the category (e.g. 120/500).
    /// Independent of the achievement thresholds.
    pub fn target(self) -> u32 {
        match self {
            ActivityKind::Vocabulary => 500,
            ActivityKind::Exercises => 100,
            ActivityKind::Speaking => 30,
            ActivityKind::Streak => 7,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryStat {
    pub category: String,
    pub icon: String,
    pub count: u32,
    pub total: u32,
}

impl CategoryStat {
    /// Fill percentage for the category progress bar, capped at 100.
    /// Raw counts are never clamped; only this render-time value is.
    pub fn percent_complete(&self) -> f64 {
        ((self.count as f64 / self.total as f64) * 100.0).min(100.0)
    }
}

/// Everything the progress screen renders, derived from the activity
/// logs in one refresh and held in memory until the next one.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ProgressSnapshot {
    pub stats: Vec<CategoryStat>,
    pub overall_progress: u32,
    pub achievements: Vec<Achievement>,
    pub updated_at: i64,
}
