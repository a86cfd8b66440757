#![allow(dead_code)]

use rand::rngs::StdRng;
use rand::SeedableRng;

use tripweaver::{
    Activity, ActivityLocation, CatalogProvider, ItineraryRequest, TravelStyle, TripDates,
};

/// Catalog that never has anything to offer.
pub struct EmptyCatalog;

impl CatalogProvider for EmptyCatalog {
    fn get_catalog(&self, _destination: &str) -> Vec<Activity> {
        Vec::new()
    }
}

/// Catalog that returns the same fixed list for every destination.
pub struct FixedCatalog {
    pub activities: Vec<Activity>,
}

impl CatalogProvider for FixedCatalog {
    fn get_catalog(&self, _destination: &str) -> Vec<Activity> {
        self.activities.clone()
    }
}

pub fn make_activity(id: &str, cost: f32, duration_hours: f32, tags: &[&str]) -> Activity {
    Activity {
        id: id.to_string(),
        name: id.to_string(),
        description: String::new(),
        category: "sightseeing".to_string(),
        duration_hours,
        cost,
        location: ActivityLocation {
            address: "somewhere".to_string(),
            coordinates: (0.0, 0.0),
        },
        rating: 4.0,
        tags: tags.iter().map(|t| t.to_string()).collect(),
    }
}

/// The reference request used across the generation tests: three days in
/// Tokyo on a 900 budget, chasing food.
pub fn tokyo_request() -> ItineraryRequest {
    ItineraryRequest {
        destination: "tokyo".to_string(),
        duration: 3,
        budget: 900.0,
        interests: vec!["food".to_string()],
        travel_style: TravelStyle::Cultural,
        dates: TripDates::default(),
    }
}

pub fn seeded_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}
