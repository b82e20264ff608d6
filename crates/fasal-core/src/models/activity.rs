//! Fixed vocabulary of farming activities offered by the planner.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Known farming activities.
///
/// Planner entries store the activity as free text; this vocabulary only
/// drives suggestions and iconography.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Activity {
    Sowing,
    Irrigation,
    Fertilizing,
    Pesticide,
    Harvesting,
    Weeding,
    Pruning,
    Other,
}

impl Activity {
    /// All activities in menu order.
    pub const ALL: [Activity; 8] = [
        Activity::Sowing,
        Activity::Irrigation,
        Activity::Fertilizing,
        Activity::Pesticide,
        Activity::Harvesting,
        Activity::Weeding,
        Activity::Pruning,
        Activity::Other,
    ];

    /// Lowercase key, e.g. `"pesticide"`.
    pub fn key(&self) -> &'static str {
        match self {
            Activity::Sowing => "sowing",
            Activity::Irrigation => "irrigation",
            Activity::Fertilizing => "fertilizing",
            Activity::Pesticide => "pesticide",
            Activity::Harvesting => "harvesting",
            Activity::Weeding => "weeding",
            Activity::Pruning => "pruning",
            Activity::Other => "other",
        }
    }

    /// Label stored on entries created from the menu, e.g.
    /// `"Pesticide Application"`.
    pub fn label(&self) -> &'static str {
        match self {
            Activity::Sowing => "Sowing",
            Activity::Irrigation => "Irrigation",
            Activity::Fertilizing => "Fertilizing",
            Activity::Pesticide => "Pesticide Application",
            Activity::Harvesting => "Harvesting",
            Activity::Weeding => "Weeding",
            Activity::Pruning => "Pruning",
            Activity::Other => "Other",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Activity::Sowing => "🌱",
            Activity::Irrigation => "💧",
            Activity::Fertilizing => "🧪",
            Activity::Pesticide => "🐛",
            Activity::Harvesting => "🌾",
            Activity::Weeding => "🪴",
            Activity::Pruning => "🍃",
            Activity::Other => "📅",
        }
    }

    /// Classify free activity text, matching key or label case-insensitively
    /// and falling back to [`Activity::Other`].
    ///
    /// ```rust
    /// use fasal_core::models::Activity;
    ///
    /// assert_eq!(Activity::classify("Pesticide Application"), Activity::Pesticide);
    /// assert_eq!(Activity::classify("IRRIGATION"), Activity::Irrigation);
    /// assert_eq!(Activity::classify("Mulching"), Activity::Other);
    /// ```
    pub fn classify(text: &str) -> Self {
        text.parse().unwrap_or(Activity::Other)
    }
}

impl FromStr for Activity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        Activity::ALL
            .into_iter()
            .find(|a| a.key().eq_ignore_ascii_case(needle) || a.label().eq_ignore_ascii_case(needle))
            .ok_or_else(|| format!("Unknown activity: {s}"))
    }
}
