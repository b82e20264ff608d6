//! Month lookups and table projections over the season table.

use std::ops::Deref;

use super::table::SEASONS;
use crate::models::{CropDefinition, Locale, Month, SeasonDefinition, SeasonId};

/// A crop together with the season bucket it was found in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeasonalCrop {
    pub season: SeasonId,
    pub crop: &'static CropDefinition,
}

impl Deref for SeasonalCrop {
    type Target = CropDefinition;

    fn deref(&self) -> &Self::Target {
        self.crop
    }
}

/// Crops conventionally sown and harvested in one month.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthCrops {
    /// Month number as queried (may be out of range)
    pub month: u8,
    pub sowing: Vec<SeasonalCrop>,
    pub harvesting: Vec<SeasonalCrop>,
}

impl MonthCrops {
    pub fn is_empty(&self) -> bool {
        self.sowing.is_empty() && self.harvesting.is_empty()
    }

    /// Canonical names of the crops to sow, in table order.
    pub fn sowing_names(&self) -> Vec<&'static str> {
        self.sowing.iter().map(|c| c.crop.canonical_name()).collect()
    }

    /// Canonical names of the crops to harvest, in table order.
    pub fn harvesting_names(&self) -> Vec<&'static str> {
        self.harvesting
            .iter()
            .map(|c| c.crop.canonical_name())
            .collect()
    }
}

/// Which crops are sown and harvested in `month`.
///
/// Every crop of every season is checked for membership of `month` in its
/// sowing and harvest sets. Months outside 1..=12 yield empty lists.
pub fn crops_for_month(month: u8) -> MonthCrops {
    let mut result = MonthCrops {
        month,
        sowing: Vec::new(),
        harvesting: Vec::new(),
    };

    for season in &SEASONS {
        for crop in season.crops {
            let hit = SeasonalCrop {
                season: season.id,
                crop,
            };
            if crop.is_sown_in(month) {
                result.sowing.push(hit);
            }
            if crop.is_harvested_in(month) {
                result.harvesting.push(hit);
            }
        }
    }

    result
}

/// Crop name in `locale`, falling back to the canonical English name.
pub fn localized_name(crop: &CropDefinition, locale: Locale) -> &'static str {
    crop.localized_name(locale)
}

/// The season definition for `id`.
pub fn season(id: SeasonId) -> &'static SeasonDefinition {
    // Table order: kharif, rabi, zaid, vegetables
    let index = match id {
        SeasonId::Kharif => 0,
        SeasonId::Rabi => 1,
        SeasonId::Zaid => 2,
        SeasonId::Vegetables => 3,
    };
    &SEASONS[index]
}

/// All season cards in declaration order.
pub fn season_overviews() -> &'static [SeasonDefinition] {
    &SEASONS
}

/// First crop whose canonical or localized name matches `name`
/// case-insensitively.
pub fn find_crop(name: &str) -> Option<SeasonalCrop> {
    let needle = name.trim();
    SEASONS.iter().find_map(|season| {
        season
            .crops
            .iter()
            .find(|crop| {
                crop.canonical_name().eq_ignore_ascii_case(needle)
                    || crop.name.translations.iter().any(|(_, t)| *t == needle)
            })
            .map(|crop| SeasonalCrop {
                season: season.id,
                crop,
            })
    })
}

/// Canonical crop names across all seasons, deduplicated in first-seen order.
pub fn crop_names() -> Vec<&'static str> {
    let mut names: Vec<&'static str> = Vec::new();
    for crop in SEASONS.iter().flat_map(|s| s.crops) {
        if !names.contains(&crop.canonical_name()) {
            names.push(crop.canonical_name());
        }
    }
    names
}

/// Sowing/harvest flags for one month of a matrix row.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MonthCell {
    pub sowing: bool,
    pub harvest: bool,
}

/// One crop's row of the annual table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatrixRow {
    pub season: SeasonId,
    pub crop: &'static CropDefinition,
    /// Index 0 is January
    pub cells: [MonthCell; 12],
}

impl MatrixRow {
    fn new(season: SeasonId, crop: &'static CropDefinition) -> Self {
        let mut cells = [MonthCell::default(); 12];
        for month in Month::all() {
            cells[usize::from(month.number() - 1)] = MonthCell {
                sowing: crop.is_sown_in(month.number()),
                harvest: crop.is_harvested_in(month.number()),
            };
        }
        Self {
            season,
            crop,
            cells,
        }
    }

    /// Flags for `month`.
    pub fn cell(&self, month: Month) -> MonthCell {
        self.cells[usize::from(month.number() - 1)]
    }
}

/// Full-year sowing/harvest table, rows in season-then-crop order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnnualMatrix(pub Vec<MatrixRow>);

impl AnnualMatrix {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, MatrixRow> {
        self.0.iter()
    }
}

/// Every crop of every season with its per-month flags.
pub fn annual_matrix() -> AnnualMatrix {
    build_matrix(usize::MAX)
}

/// The compact dashboard table: the first `per_season` crops of each season.
pub fn annual_matrix_condensed(per_season: usize) -> AnnualMatrix {
    build_matrix(per_season)
}

fn build_matrix(per_season: usize) -> AnnualMatrix {
    AnnualMatrix(
        SEASONS
            .iter()
            .flat_map(|season| {
                season
                    .crops
                    .iter()
                    .take(per_season)
                    .map(move |crop| MatrixRow::new(season.id, crop))
            })
            .collect(),
    )
}
