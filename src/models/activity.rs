use serde::{Deserialize, Deserializer, Serialize};

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ActivityLocation {
    pub address: String,
    pub coordinates: (f32, f32),
}

// Custom deserializer to clamp ratings into the 0-5 scale
fn deserialize_clamped_rating<'de, D>(deserializer: D) -> Result<f32, D::Error>
where
    D: Deserializer<'de>,
{
    let value: serde_json::Value = serde_json::Value::deserialize(deserializer)?;
    match value {
        serde_json::Value::Number(n) => Ok(n.as_f64().unwrap_or(0.0).clamp(0.0, 5.0) as f32),
        _ => Ok(0.0),
    }
}

/// One bookable or visitable catalog entry. Catalog data is static; the
/// planner never mutates an activity.
#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Activity {
    pub id: String,
    pub name: String,
    pub description: String,
    pub category: String,
    pub duration_hours: f32,
    pub cost: f32,
    pub location: ActivityLocation,
    #[serde(deserialize_with = "deserialize_clamped_rating", default)]
    pub rating: f32,
    pub tags: Vec<String>,
}

impl Activity {
    /// True when the interest string case-insensitively appears in the
    /// activity's tags or in its category string.
    pub fn matches_interest(&self, interest: &str) -> bool {
        let needle = interest.to_lowercase();
        self.category.to_lowercase().contains(&needle)
            || self
                .tags
                .iter()
                .any(|tag| tag.to_lowercase().contains(&needle))
    }

    /// True when any of the requested interests matches.
    pub fn matches_interests(&self, interests: &[String]) -> bool {
        interests
            .iter()
            .any(|interest| self.matches_interest(interest))
    }
}
