//! Bundled seasonal crop table for Indian agriculture.

use crate::models::{CropDefinition, Locale, LocalizedText, SeasonDefinition, SeasonId};

macro_rules! crop {
    ($name:literal, $hi:literal, $gu:literal, [$($sow:literal),+], [$($harvest:literal),+], $duration:literal, $icon:literal) => {
        CropDefinition {
            name: LocalizedText {
                canonical: $name,
                translations: &[(Locale::Hi, $hi), (Locale::Gu, $gu)],
            },
            sowing_months: &[$($sow),+],
            harvest_months: &[$($harvest),+],
            duration: $duration,
            icon: $icon,
        }
    };
}

/// Every season bucket in declaration order.
pub static SEASONS: [SeasonDefinition; 4] = [KHARIF, RABI, ZAID, VEGETABLES];

const KHARIF: SeasonDefinition = SeasonDefinition {
    id: SeasonId::Kharif,
    name: LocalizedText {
        canonical: "Kharif Season",
        translations: &[(Locale::Hi, "खरीफ मौसम"), (Locale::Gu, "ખરીફ સીઝન")],
    },
    period: "June - October",
    description: "Monsoon crops sown with the onset of monsoon",
    crops: &[
        crop!("Rice", "चावल", "ચોખા", [6, 7], [10, 11], "120-150 days", "🌾"),
        crop!("Maize", "मक्का", "મકાઈ", [6, 7], [9, 10], "90-120 days", "🌽"),
        crop!("Cotton", "कपास", "કપાસ", [5, 6], [10, 11, 12], "150-180 days", "🏵️"),
        crop!("Soybean", "सोयाबीन", "સોયાબીન", [6, 7], [9, 10], "90-100 days", "🫘"),
        crop!("Groundnut", "मूंगफली", "મગફળી", [6, 7], [10, 11], "100-130 days", "🥜"),
        crop!("Sugarcane", "गन्ना", "શેરડી", [2, 3, 6, 7], [1, 2, 3], "10-12 months", "🎋"),
        crop!("Jowar", "ज्वार", "જુવાર", [6, 7], [9, 10], "90-120 days", "🌾"),
        crop!("Bajra", "बाजरा", "બાજરી", [6, 7], [9, 10], "80-90 days", "🌾"),
    ],
};

const RABI: SeasonDefinition = SeasonDefinition {
    id: SeasonId::Rabi,
    name: LocalizedText {
        canonical: "Rabi Season",
        translations: &[(Locale::Hi, "रबी मौसम"), (Locale::Gu, "રવી સીઝન")],
    },
    period: "October - March",
    description: "Winter crops sown after monsoon",
    crops: &[
        crop!("Wheat", "गेहूं", "ઘઉં", [10, 11], [3, 4], "120-150 days", "🌾"),
        crop!("Mustard", "सरसों", "સરસવ", [10, 11], [2, 3], "110-140 days", "🌼"),
        crop!("Chickpea", "चना", "ચણા", [10, 11], [2, 3], "90-120 days", "🫘"),
        crop!("Barley", "जौ", "જવ", [10, 11], [3, 4], "120-150 days", "🌾"),
        crop!("Peas", "मटर", "વટાણા", [10, 11], [1, 2], "90-100 days", "🫛"),
        crop!("Lentil", "मसूर", "મસૂર", [10, 11], [2, 3], "100-120 days", "🫘"),
        crop!("Potato", "आलू", "બટાટા", [10, 11], [1, 2, 3], "80-120 days", "🥔"),
        crop!("Onion", "प्याज", "ડુંગળી", [10, 11, 12], [3, 4, 5], "120-150 days", "🧅"),
    ],
};

const ZAID: SeasonDefinition = SeasonDefinition {
    id: SeasonId::Zaid,
    name: LocalizedText {
        canonical: "Zaid Season",
        translations: &[(Locale::Hi, "जायद मौसम"), (Locale::Gu, "ઝૈદ સીઝન")],
    },
    period: "March - June",
    description: "Summer crops grown between Rabi and Kharif",
    crops: &[
        crop!("Watermelon", "तरबूज", "તડબૂચ", [2, 3], [5, 6], "80-110 days", "🍉"),
        crop!("Muskmelon", "खरबूजा", "શક્કરટેટી", [2, 3], [5, 6], "80-100 days", "🍈"),
        crop!("Cucumber", "खीरा", "કાકડી", [2, 3, 4], [4, 5, 6], "45-60 days", "🥒"),
        crop!("Moong", "मूंग", "મગ", [3, 4], [5, 6], "60-75 days", "🫘"),
        crop!("Bitter Gourd", "करेला", "કારેલા", [2, 3], [4, 5, 6], "55-60 days", "🥒"),
        crop!("Pumpkin", "कद्दू", "કોળું", [2, 3], [5, 6], "90-120 days", "🎃"),
    ],
};

const VEGETABLES: SeasonDefinition = SeasonDefinition {
    id: SeasonId::Vegetables,
    name: LocalizedText {
        canonical: "Year-Round Vegetables",
        translations: &[(Locale::Hi, "साल भर की सब्जियां"), (Locale::Gu, "વર્ષભર શાકભાજી")],
    },
    period: "Year-round with proper care",
    description: "Vegetables that can be grown throughout the year",
    crops: &[
        crop!("Tomato", "टमाटर", "ટામેટા", [7, 8, 9, 11, 12, 1], [10, 11, 12, 2, 3, 4], "60-90 days", "🍅"),
        crop!("Brinjal", "बैंगन", "રીંગણ", [6, 7, 8, 11, 12], [9, 10, 11, 2, 3], "70-80 days", "🍆"),
        crop!("Chilli", "मिर्च", "મરચું", [6, 7, 11, 12], [9, 10, 11, 2, 3, 4], "60-90 days", "🌶️"),
        crop!("Cabbage", "पत्ता गोभी", "કોબી", [8, 9, 10], [11, 12, 1, 2], "80-100 days", "🥬"),
        crop!("Cauliflower", "फूल गोभी", "ફુલાવર", [7, 8, 9, 10], [10, 11, 12, 1, 2], "90-120 days", "🥦"),
        crop!("Spinach", "पालक", "પાલક", [9, 10, 11, 2, 3], [10, 11, 12, 1, 3, 4, 5], "30-45 days", "🥬"),
    ],
};
