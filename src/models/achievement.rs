use serde::{Deserialize, Serialize};

use crate::models::progress::ActivityKind;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Achievement {
    pub id: String,
    pub title: String,
    pub description: String,
    pub requirement: u32,
    pub completed: bool,
}

/// Catalog entry for a fixed milestone. Requirements are milestones,
/// not completion targets: vocab100 unlocks at 100 even though the
/// vocabulary category target is 500. Keep the two tables separate.
#[derive(Debug, Clone, Copy)]
pub struct AchievementSpec {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub requirement: u32,
    pub kind: ActivityKind,
}

pub fn achievement_catalog() -> Vec<AchievementSpec> {
    vec![
        AchievementSpec {
            id: "vocab100",
            title: "Vocabulary Master",
            description: "100 words learned",
            requirement: 100,
            kind: ActivityKind::Vocabulary,
        },
        AchievementSpec {
            id: "speaking10",
            title: "Speaking Pro",
            description: "10 speaking challenges completed",
            requirement: 10,
            kind: ActivityKind::Speaking,
        },
        AchievementSpec {
            id: "streak7",
            title: "Perfect Week",
            description: "7 days streak",
            requirement: 7,
            kind: ActivityKind::Streak,
        },
        AchievementSpec {
            id: "exercise50",
            title: "Exercise Expert",
            description: "50 exercises completed",
            requirement: 50,
            kind: ActivityKind::Exercises,
        },
    ]
}
