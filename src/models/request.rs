use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Coarse user-selected trip category. Drives theme naming only; the
/// selection walk never filters on it.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TravelStyle {
    Adventure,
    Cultural,
    Relaxation,
    Luxury,
    Budget,
    Romantic,
    Family,
    Business,
}

impl TravelStyle {
    /// Parses a style key, falling back to `Cultural` for unknown keys.
    pub fn from_key(key: &str) -> Self {
        match key.trim().to_lowercase().as_str() {
            "adventure" => TravelStyle::Adventure,
            "cultural" => TravelStyle::Cultural,
            "relaxation" => TravelStyle::Relaxation,
            "luxury" => TravelStyle::Luxury,
            "budget" => TravelStyle::Budget,
            "romantic" => TravelStyle::Romantic,
            "family" => TravelStyle::Family,
            "business" => TravelStyle::Business,
            _ => TravelStyle::Cultural,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TravelStyle::Adventure => "adventure",
            TravelStyle::Cultural => "cultural",
            TravelStyle::Relaxation => "relaxation",
            TravelStyle::Luxury => "luxury",
            TravelStyle::Budget => "budget",
            TravelStyle::Romantic => "romantic",
            TravelStyle::Family => "family",
            TravelStyle::Business => "business",
        }
    }

    /// Five-entry theme arc for this style, arrival through farewell.
    /// Styles without a dedicated arc share the cultural one.
    pub fn day_themes(&self) -> &'static [&'static str] {
        match self {
            TravelStyle::Adventure => &[
                "Arrival & Base Camp",
                "Trail & Summit Day",
                "Adrenaline Rush",
                "Off the Beaten Path",
                "Last Thrills & Farewell",
            ],
            TravelStyle::Relaxation => &[
                "Arrival & Unwind",
                "Slow Morning & Spa",
                "Beach & Leisure",
                "Gentle Exploration",
                "Farewell at Ease",
            ],
            TravelStyle::Luxury => &[
                "VIP Arrival",
                "Signature Experiences",
                "Gourmet Day",
                "Private Tours & Shopping",
                "Grand Farewell",
            ],
            TravelStyle::Budget => &[
                "Arrival & Free Sights",
                "Markets & Street Food",
                "Walking Tour Day",
                "Parks & Local Life",
                "Farewell on a Shoestring",
            ],
            TravelStyle::Cultural
            | TravelStyle::Romantic
            | TravelStyle::Family
            | TravelStyle::Business => &[
                "Arrival & Old Town Stroll",
                "Museums & Landmarks",
                "Local Traditions",
                "Art & Hidden Corners",
                "Farewell Highlights",
            ],
        }
    }
}

/// Optional trip window. `end_date` is carried through for callers; trip
/// length always comes from `ItineraryRequest::duration`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TripDates {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,
}

/// Input to one generation call.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItineraryRequest {
    pub destination: String,
    pub duration: u32,
    pub budget: f32,
    #[serde(default)]
    pub interests: Vec<String>,
    pub travel_style: TravelStyle,
    #[serde(default)]
    pub dates: TripDates,
}

impl ItineraryRequest {
    /// Per-day slice of the whole-trip budget.
    pub fn daily_budget(&self) -> f32 {
        if self.duration == 0 {
            return 0.0;
        }
        self.budget / self.duration as f32
    }
}
