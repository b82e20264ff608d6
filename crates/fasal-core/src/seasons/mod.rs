//! Seasonal calendar engine.
//!
//! A read-only lookup over the bundled season table ([`SEASONS`]) plus pure
//! projections used by the month guide, the season cards and the annual
//! table. Nothing here performs I/O or can fail: an out-of-range month simply
//! matches no crops.
//!
//! Iteration is always season-then-crop in declaration order, and crops that
//! appear in more than one season are reported once per season.
//!
//! # Examples
//!
//! ```rust
//! use fasal_core::seasons::crops_for_month;
//!
//! let october = crops_for_month(10);
//! assert!(october.sowing_names().contains(&"Wheat"));
//! assert!(october.harvesting_names().contains(&"Rice"));
//! ```

mod engine;
mod table;

#[cfg(test)]
mod tests;

pub use engine::{
    annual_matrix, annual_matrix_condensed, crop_names, crops_for_month, find_crop,
    localized_name, season, season_overviews, AnnualMatrix, MatrixRow, MonthCell, MonthCrops, SeasonalCrop,
};
pub use table::SEASONS;
