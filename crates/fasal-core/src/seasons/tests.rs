//! Tests for the seasonal calendar engine.

use super::*;
use crate::models::{Locale, Month, SeasonId};

#[test]
fn test_table_invariants() {
    for season in &SEASONS {
        assert!(!season.crops.is_empty(), "{} has no crops", season.id.as_str());
        for crop in season.crops {
            assert!(!crop.sowing_months.is_empty(), "{} has no sowing months", crop.canonical_name());
            assert!(!crop.harvest_months.is_empty(), "{} has no harvest months", crop.canonical_name());
            for m in crop.sowing_months.iter().chain(crop.harvest_months) {
                assert!((1..=12).contains(m), "{} has month {m}", crop.canonical_name());
            }
        }
    }
}

#[test]
fn test_seasons_in_declaration_order() {
    let ids: Vec<SeasonId> = SEASONS.iter().map(|s| s.id).collect();
    assert_eq!(
        ids,
        vec![SeasonId::Kharif, SeasonId::Rabi, SeasonId::Zaid, SeasonId::Vegetables]
    );
    for id in ids {
        assert_eq!(season(id).id, id);
    }
}

#[test]
fn test_sowing_matches_membership_for_every_month() {
    for month in 1..=12u8 {
        let result = crops_for_month(month);

        let expected_sowing: Vec<&str> = SEASONS
            .iter()
            .flat_map(|s| s.crops)
            .filter(|c| c.sowing_months.contains(&month))
            .map(|c| c.canonical_name())
            .collect();
        let expected_harvest: Vec<&str> = SEASONS
            .iter()
            .flat_map(|s| s.crops)
            .filter(|c| c.harvest_months.contains(&month))
            .map(|c| c.canonical_name())
            .collect();

        assert_eq!(result.sowing_names(), expected_sowing, "sowing in month {month}");
        assert_eq!(result.harvesting_names(), expected_harvest, "harvest in month {month}");
    }
}

#[test]
fn test_october_scenario() {
    let october = crops_for_month(10);
    let sowing = october.sowing_names();
    let harvesting = october.harvesting_names();

    assert!(harvesting.contains(&"Rice"));
    assert!(harvesting.contains(&"Cotton"));
    assert!(sowing.contains(&"Wheat"));
    assert!(sowing.contains(&"Mustard"));

    // Rice is sown in June/July only
    assert!(!sowing.contains(&"Rice"));
    // Wheat is harvested in March/April only
    assert!(!harvesting.contains(&"Wheat"));
}

#[test]
fn test_hits_carry_their_season() {
    let october = crops_for_month(10);
    let rice = october
        .harvesting
        .iter()
        .find(|c| c.canonical_name() == "Rice")
        .expect("Rice should be harvested in October");
    assert_eq!(rice.season, SeasonId::Kharif);

    let wheat = october
        .sowing
        .iter()
        .find(|c| c.canonical_name() == "Wheat")
        .expect("Wheat should be sown in October");
    assert_eq!(wheat.season, SeasonId::Rabi);
}

#[test]
fn test_invalid_month_yields_empty_lists() {
    for month in [0u8, 13, 255] {
        let result = crops_for_month(month);
        assert!(result.is_empty());
        assert_eq!(result.month, month);
    }
}

#[test]
fn test_crop_listed_once_per_matching_month() {
    // Sugarcane lists both February and March as sowing months; a single
    // month query still reports it once.
    let march = crops_for_month(3);
    let count = march
        .sowing
        .iter()
        .filter(|c| c.canonical_name() == "Sugarcane")
        .count();
    assert_eq!(count, 1);
}

#[test]
fn test_localized_name_lookup_and_fallback() {
    let rice = find_crop("rice").expect("Rice is in the table");
    assert_eq!(localized_name(&rice, Locale::En), "Rice");
    assert_eq!(localized_name(&rice, Locale::Hi), "चावल");
    assert_eq!(localized_name(&rice, Locale::Gu), "ચોખા");

    let unknown = Locale::from_code("xx");
    for crop in SEASONS.iter().flat_map(|s| s.crops) {
        assert_eq!(
            localized_name(crop, unknown),
            localized_name(crop, Locale::En)
        );
    }
}

#[test]
fn test_find_crop_by_translation() {
    let wheat = find_crop("गेहूं").expect("Hindi name should resolve");
    assert_eq!(wheat.canonical_name(), "Wheat");
    assert_eq!(wheat.season, SeasonId::Rabi);
    assert!(find_crop("Dragonfruit").is_none());
}

#[test]
fn test_crop_names_deduplicated_in_first_seen_order() {
    let names = crop_names();
    assert_eq!(names.first(), Some(&"Rice"));
    assert_eq!(names.last(), Some(&"Spinach"));

    let total: usize = SEASONS.iter().map(|s| s.crops.len()).sum();
    assert_eq!(names.len(), total);

    let mut sorted = names.clone();
    sorted.sort_unstable();
    sorted.dedup();
    assert_eq!(sorted.len(), names.len());
}

#[test]
fn test_annual_matrix_covers_every_crop() {
    let matrix = annual_matrix();
    let total: usize = SEASONS.iter().map(|s| s.crops.len()).sum();
    assert_eq!(matrix.len(), total);
    assert_eq!(matrix.0[0].crop.canonical_name(), "Rice");
    assert_eq!(matrix.0[0].season, SeasonId::Kharif);

    for row in matrix.iter() {
        for month in Month::all() {
            let cell = row.cell(month);
            assert_eq!(cell.sowing, row.crop.is_sown_in(month.number()));
            assert_eq!(cell.harvest, row.crop.is_harvested_in(month.number()));
        }
    }
}

#[test]
fn test_annual_matrix_is_deterministic() {
    assert_eq!(annual_matrix(), annual_matrix());
}

#[test]
fn test_condensed_matrix_takes_first_crops_of_each_season() {
    let matrix = annual_matrix_condensed(4);
    assert_eq!(matrix.len(), 16);

    let kharif: Vec<&str> = matrix
        .iter()
        .filter(|r| r.season == SeasonId::Kharif)
        .map(|r| r.crop.canonical_name())
        .collect();
    assert_eq!(kharif, vec!["Rice", "Maize", "Cotton", "Soybean"]);

    assert!(annual_matrix_condensed(0).is_empty());
}

#[test]
fn test_rice_row_flags() {
    let matrix = annual_matrix();
    let rice = &matrix.0[0];
    let june = Month::new(6).unwrap();
    let october = Month::new(10).unwrap();
    let january = Month::new(1).unwrap();

    assert!(rice.cell(june).sowing);
    assert!(!rice.cell(june).harvest);
    assert!(rice.cell(october).harvest);
    assert_eq!(rice.cell(january), MonthCell::default());
}

#[test]
fn test_season_overviews_are_the_four_cards() {
    let cards = season_overviews();
    assert_eq!(cards.len(), 4);
    assert_eq!(cards[0].name.canonical, "Kharif Season");
    assert_eq!(cards[1].period, "October - March");
    assert!(cards.iter().all(|c| !c.description.is_empty()));
}
