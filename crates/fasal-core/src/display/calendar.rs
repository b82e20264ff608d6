//! Locale-aware views over the season table.

use std::fmt;

use crate::{
    models::{Activity, Locale, Month},
    seasons::{self, AnnualMatrix, MonthCell, MonthCrops, SeasonalCrop},
};

const SOWING_MARK: &str = "🌱";
const HARVEST_MARK: &str = "🌾";

/// What to sow and harvest in one month.
pub struct MonthGuide {
    pub month: Month,
    pub crops: MonthCrops,
    pub locale: Locale,
}

impl MonthGuide {
    pub fn new(month: Month, locale: Locale) -> Self {
        Self {
            month,
            crops: seasons::crops_for_month(month.number()),
            locale,
        }
    }

    fn fmt_section(
        &self,
        f: &mut fmt::Formatter<'_>,
        heading: &str,
        crops: &[SeasonalCrop],
        empty: &str,
    ) -> fmt::Result {
        writeln!(f, "## {heading}")?;
        writeln!(f)?;
        if crops.is_empty() {
            writeln!(f, "{empty}")?;
        }
        for hit in crops {
            writeln!(
                f,
                "- {} **{}** ({}, {})",
                hit.icon,
                hit.localized_name(self.locale),
                seasons::season(hit.season).localized_name(self.locale),
                hit.duration
            )?;
        }
        writeln!(f)
    }
}

impl fmt::Display for MonthGuide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# {}", self.month.name(self.locale))?;
        writeln!(f)?;
        self.fmt_section(
            f,
            &format!("{SOWING_MARK} Crops to Sow"),
            &self.crops.sowing,
            "Nothing to sow this month.",
        )?;
        self.fmt_section(
            f,
            &format!("{HARVEST_MARK} Crops to Harvest"),
            &self.crops.harvesting,
            "Nothing to harvest this month.",
        )
    }
}

/// One card per season with its crops and their months.
pub struct SeasonCards {
    pub locale: Locale,
}

impl fmt::Display for SeasonCards {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for season in seasons::season_overviews() {
            writeln!(f, "## {} ({})", season.localized_name(self.locale), season.period)?;
            writeln!(f)?;
            writeln!(f, "{}", season.description)?;
            writeln!(f)?;

            for crop in season.crops {
                writeln!(
                    f,
                    "- {} **{}**: sow {}, harvest {} ({})",
                    crop.icon,
                    crop.localized_name(self.locale),
                    month_list(crop.sowing()),
                    month_list(crop.harvest()),
                    crop.duration
                )?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

fn month_list(months: impl Iterator<Item = Month>) -> String {
    months.map(|m| m.short_name()).collect::<Vec<_>>().join(", ")
}

/// The annual sowing/harvest table as a markdown table.
pub struct MatrixTable {
    pub matrix: AnnualMatrix,
    pub locale: Locale,
}

impl MatrixTable {
    fn mark(cell: MonthCell) -> String {
        let mut mark = String::new();
        if cell.sowing {
            mark.push_str(SOWING_MARK);
        }
        if cell.harvest {
            mark.push_str(HARVEST_MARK);
        }
        mark
    }
}

impl fmt::Display for MatrixTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "| Crop |")?;
        for month in Month::all() {
            write!(f, " {} |", month.short_name())?;
        }
        writeln!(f)?;

        write!(f, "|:-|")?;
        for _ in Month::all() {
            write!(f, ":-:|")?;
        }
        writeln!(f)?;

        for row in self.matrix.iter() {
            write!(f, "| {} |", row.crop.localized_name(self.locale))?;
            for cell in row.cells {
                write!(f, " {} |", Self::mark(cell))?;
            }
            writeln!(f)?;
        }

        writeln!(f)?;
        writeln!(f, "{SOWING_MARK} Sowing  {HARVEST_MARK} Harvest")
    }
}

/// The activity vocabulary offered when scheduling.
pub struct Activities;

impl fmt::Display for Activities {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for activity in Activity::ALL {
            writeln!(f, "- {} {} (`{}`)", activity.icon(), activity.label(), activity.key())?;
        }
        Ok(())
    }
}
