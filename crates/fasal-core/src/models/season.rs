//! Season and crop definitions for the static planting calendar.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::{Locale, LocalizedText, Month};

/// Season buckets of the planting calendar.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum SeasonId {
    /// Monsoon crops, sown with the onset of the rains
    Kharif,

    /// Winter crops, sown after the monsoon
    Rabi,

    /// Summer crops between Rabi and Kharif
    Zaid,

    /// Vegetables grown throughout the year
    Vegetables,
}

impl FromStr for SeasonId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "kharif" => Ok(SeasonId::Kharif),
            "rabi" => Ok(SeasonId::Rabi),
            "zaid" => Ok(SeasonId::Zaid),
            "vegetables" => Ok(SeasonId::Vegetables),
            _ => Err(format!("Invalid season: {s}")),
        }
    }
}

impl SeasonId {
    pub fn as_str(&self) -> &'static str {
        match self {
            SeasonId::Kharif => "kharif",
            SeasonId::Rabi => "rabi",
            SeasonId::Zaid => "zaid",
            SeasonId::Vegetables => "vegetables",
        }
    }
}

/// A crop with its conventional sowing and harvest months.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CropDefinition {
    /// Canonical (English) name plus translations
    pub name: LocalizedText,

    /// Months (1-12) in which the crop is conventionally sown
    pub sowing_months: &'static [u8],

    /// Months (1-12) in which the crop is conventionally harvested
    pub harvest_months: &'static [u8],

    /// Typical time from sowing to harvest, e.g. `"120-150 days"`
    pub duration: &'static str,

    /// Display glyph
    pub icon: &'static str,
}

impl CropDefinition {
    pub fn canonical_name(&self) -> &'static str {
        self.name.canonical
    }

    /// Crop name in `locale`, falling back to the canonical name.
    pub fn localized_name(&self, locale: Locale) -> &'static str {
        self.name.get(locale)
    }

    /// Whether the crop is sown in `month` (membership, not count).
    pub fn is_sown_in(&self, month: u8) -> bool {
        self.sowing_months.contains(&month)
    }

    /// Whether the crop is harvested in `month` (membership, not count).
    pub fn is_harvested_in(&self, month: u8) -> bool {
        self.harvest_months.contains(&month)
    }

    /// Sowing months as validated [`Month`] values.
    pub fn sowing(&self) -> impl Iterator<Item = Month> + '_ {
        self.sowing_months.iter().filter_map(|m| Month::new(*m))
    }

    /// Harvest months as validated [`Month`] values.
    pub fn harvest(&self) -> impl Iterator<Item = Month> + '_ {
        self.harvest_months.iter().filter_map(|m| Month::new(*m))
    }
}

/// A season bucket with its crops in declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeasonDefinition {
    pub id: SeasonId,

    /// Display name plus translations
    pub name: LocalizedText,

    /// Active period label, e.g. `"June - October"`
    pub period: &'static str,

    pub description: &'static str,

    pub crops: &'static [CropDefinition],
}

impl SeasonDefinition {
    /// Season name in `locale`, falling back to the canonical name.
    pub fn localized_name(&self, locale: Locale) -> &'static str {
        self.name.get(locale)
    }
}
