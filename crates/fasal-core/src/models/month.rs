//! Calendar month newtype with localized names.

use jiff::civil::Date;
use serde::{Deserialize, Serialize};

use super::{Locale, LocalizedText};
use crate::error::CalendarError;

const MONTH_NAMES: [LocalizedText; 12] = [
    LocalizedText {
        canonical: "January",
        translations: &[(Locale::Hi, "जनवरी"), (Locale::Gu, "જાન્યુઆરી")],
    },
    LocalizedText {
        canonical: "February",
        translations: &[(Locale::Hi, "फरवरी"), (Locale::Gu, "ફેબ્રુઆરી")],
    },
    LocalizedText {
        canonical: "March",
        translations: &[(Locale::Hi, "मार्च"), (Locale::Gu, "માર્ચ")],
    },
    LocalizedText {
        canonical: "April",
        translations: &[(Locale::Hi, "अप्रैल"), (Locale::Gu, "એપ્રિલ")],
    },
    LocalizedText {
        canonical: "May",
        translations: &[(Locale::Hi, "मई"), (Locale::Gu, "મે")],
    },
    LocalizedText {
        canonical: "June",
        translations: &[(Locale::Hi, "जून"), (Locale::Gu, "જૂન")],
    },
    LocalizedText {
        canonical: "July",
        translations: &[(Locale::Hi, "जुलाई"), (Locale::Gu, "જુલાઈ")],
    },
    LocalizedText {
        canonical: "August",
        translations: &[(Locale::Hi, "अगस्त"), (Locale::Gu, "ઓગસ્ટ")],
    },
    LocalizedText {
        canonical: "September",
        translations: &[(Locale::Hi, "सितंबर"), (Locale::Gu, "સપ્ટેમ્બર")],
    },
    LocalizedText {
        canonical: "October",
        translations: &[(Locale::Hi, "अक्टूबर"), (Locale::Gu, "ઓક્ટોબર")],
    },
    LocalizedText {
        canonical: "November",
        translations: &[(Locale::Hi, "नवंबर"), (Locale::Gu, "નવેમ્બર")],
    },
    LocalizedText {
        canonical: "December",
        translations: &[(Locale::Hi, "दिसंबर"), (Locale::Gu, "ડિસેમ્બર")],
    },
];

const SHORT_NAMES: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// A month of the year, always within 1..=12.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(try_from = "u8", into = "u8")]
pub struct Month(u8);

impl Month {
    /// Returns the month for `number`, or `None` outside 1..=12.
    pub const fn new(number: u8) -> Option<Self> {
        if number >= 1 && number <= 12 {
            Some(Self(number))
        } else {
            None
        }
    }

    /// Iterates January through December.
    pub fn all() -> impl Iterator<Item = Month> {
        (1..=12).map(Month)
    }

    /// The month a calendar date falls in.
    pub fn of(date: Date) -> Self {
        // jiff guarantees 1..=12
        Self(date.month() as u8)
    }

    pub fn number(&self) -> u8 {
        self.0
    }

    /// Full month name in `locale`.
    pub fn name(&self, locale: Locale) -> &'static str {
        MONTH_NAMES[usize::from(self.0 - 1)].get(locale)
    }

    /// Three-letter English abbreviation used for table headers.
    pub fn short_name(&self) -> &'static str {
        SHORT_NAMES[usize::from(self.0 - 1)]
    }
}

impl TryFrom<u8> for Month {
    type Error = CalendarError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Month::new(value).ok_or_else(|| {
            CalendarError::invalid_input("month")
                .with_reason(format!("Month {value} is out of range. Must be 1-12"))
        })
    }
}

impl From<Month> for u8 {
    fn from(month: Month) -> Self {
        month.0
    }
}
