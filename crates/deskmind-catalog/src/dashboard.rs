//! Dashboard figures: stat tiles and recent activity.

use serde::{Deserialize, Serialize};

/// Direction of a stat's change since the previous period.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Trend {
    Increase,
    Decrease,
}

/// One headline metric tile.
///
/// `label_key` is a translation key resolved by the console, so the tile
/// renders in the active language.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct StatTile {
    pub label_key: String,
    pub value: String,
    pub change: String,
    pub trend: Trend,
}

/// Kind of a recent-activity entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityKind {
    Conversation,
    Document,
    Error,
}

/// Status badge of a recent-activity entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityStatus {
    Active,
    Completed,
    Error,
}

/// One row in the recent-activity feed.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ActivityEntry {
    pub kind: ActivityKind,
    pub message: String,
    pub time: String,
    pub status: ActivityStatus,
}

/// The fixed headline stats.
pub fn stats() -> Vec<StatTile> {
    vec![
        StatTile {
            label_key: "dashboard.totalConversations".to_string(),
            value: "2,847".to_string(),
            change: "+12%".to_string(),
            trend: Trend::Increase,
        },
        StatTile {
            label_key: "dashboard.documentsIndexed".to_string(),
            value: "156".to_string(),
            change: "+8%".to_string(),
            trend: Trend::Increase,
        },
        StatTile {
            label_key: "dashboard.resolutionRate".to_string(),
            value: "94.2%".to_string(),
            change: "+2.1%".to_string(),
            trend: Trend::Increase,
        },
        StatTile {
            label_key: "dashboard.avgResponseTime".to_string(),
            value: "2.3s".to_string(),
            change: "-0.4s".to_string(),
            trend: Trend::Increase,
        },
    ]
}

/// The fixed recent-activity feed.
pub fn recent_activity() -> Vec<ActivityEntry> {
    vec![
        ActivityEntry {
            kind: ActivityKind::Conversation,
            message: "New conversation started: \"API Authentication Issues\"".to_string(),
            time: "2 minutes ago".to_string(),
            status: ActivityStatus::Active,
        },
        ActivityEntry {
            kind: ActivityKind::Document,
            message: "Document indexed: \"Security Best Practices.pdf\"".to_string(),
            time: "15 minutes ago".to_string(),
            status: ActivityStatus::Completed,
        },
        ActivityEntry {
            kind: ActivityKind::Conversation,
            message: "Conversation resolved: \"Database Connection Error\"".to_string(),
            time: "23 minutes ago".to_string(),
            status: ActivityStatus::Completed,
        },
        ActivityEntry {
            kind: ActivityKind::Error,
            message: "Failed to process document: \"legacy-manual.docx\"".to_string(),
            time: "1 hour ago".to_string(),
            status: ActivityStatus::Error,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stats_count_and_keys() {
        let tiles = stats();
        assert_eq!(tiles.len(), 4);
        assert_eq!(tiles[0].label_key, "dashboard.totalConversations");
        assert_eq!(tiles[3].label_key, "dashboard.avgResponseTime");
    }

    #[test]
    fn test_all_stats_trend_upward() {
        // The mock figures all read as improvements, including the response
        // time drop.
        assert!(stats().iter().all(|t| t.trend == Trend::Increase));
    }

    #[test]
    fn test_recent_activity_count_and_kinds() {
        let feed = recent_activity();
        assert_eq!(feed.len(), 4);
        assert_eq!(feed[0].kind, ActivityKind::Conversation);
        assert_eq!(feed[1].kind, ActivityKind::Document);
        assert_eq!(feed[3].kind, ActivityKind::Error);
        assert_eq!(feed[3].status, ActivityStatus::Error);
    }

    #[test]
    fn test_serialization_uses_snake_case() {
        let value = serde_json::to_value(recent_activity()).unwrap();
        assert_eq!(value[0]["kind"], "conversation");
        assert_eq!(value[0]["status"], "active");
        let value = serde_json::to_value(stats()).unwrap();
        assert_eq!(value[0]["trend"], "increase");
    }
}
