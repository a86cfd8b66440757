//! Destination activity catalogs.
//!
//! The planner reads activities through the [`CatalogProvider`] seam so the
//! built-in data can be swapped for a database- or API-backed source.

use std::collections::HashMap;

use crate::models::activity::Activity;

mod destinations;

/// Source of per-destination activity lists.
pub trait CatalogProvider {
    /// Returns the activity list for a destination key. Implementations
    /// decide how to handle unknown keys; [`StaticCatalog`] falls back to
    /// its default list.
    fn get_catalog(&self, destination: &str) -> Vec<Activity>;
}

/// In-memory catalog keyed by lowercase destination.
#[derive(Debug, Clone)]
pub struct StaticCatalog {
    destinations: HashMap<String, Vec<Activity>>,
    default: Vec<Activity>,
}

impl StaticCatalog {
    /// Catalog preloaded with the built-in destinations.
    pub fn builtin() -> Self {
        StaticCatalog {
            destinations: destinations::builtin_destinations(),
            default: destinations::default_catalog(),
        }
    }

    /// Catalog over caller-supplied data. Keys are normalized to lowercase.
    pub fn new(destinations: HashMap<String, Vec<Activity>>, default: Vec<Activity>) -> Self {
        let destinations = destinations
            .into_iter()
            .map(|(key, activities)| (key.trim().to_lowercase(), activities))
            .collect();
        StaticCatalog {
            destinations,
            default,
        }
    }

    /// Known destination keys, sorted.
    pub fn destination_keys(&self) -> Vec<String> {
        let mut keys: Vec<String> = self.destinations.keys().cloned().collect();
        keys.sort();
        keys
    }
}

impl CatalogProvider for StaticCatalog {
    fn get_catalog(&self, destination: &str) -> Vec<Activity> {
        let key = destination.trim().to_lowercase();
        match self.destinations.get(&key) {
            Some(activities) => activities.clone(),
            None => {
                log::debug!(
                    "No catalog for destination '{}', falling back to the default list",
                    key
                );
                self.default.clone()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::activity::ActivityLocation;

    fn one_activity(id: &str, cost: f32) -> Activity {
        Activity {
            id: id.to_string(),
            name: id.to_string(),
            description: String::new(),
            category: "sightseeing".to_string(),
            duration_hours: 1.0,
            cost,
            location: ActivityLocation {
                address: "somewhere".to_string(),
                coordinates: (0.0, 0.0),
            },
            rating: 4.0,
            tags: vec![],
        }
    }

    #[test]
    fn test_builtin_knows_all_destinations() {
        let catalog = StaticCatalog::builtin();
        assert_eq!(
            catalog.destination_keys(),
            vec!["bali", "denver", "paris", "tokyo"]
        );
    }

    #[test]
    fn test_tokyo_catalog_costs() {
        let catalog = StaticCatalog::builtin();
        let tokyo = catalog.get_catalog("tokyo");
        let costs: Vec<f32> = tokyo.iter().map(|a| a.cost).collect();
        assert_eq!(costs, vec![0.0, 45.0, 0.0, 32.0, 120.0]);
    }

    #[test]
    fn test_lookup_normalizes_key() {
        let catalog = StaticCatalog::builtin();
        let direct = catalog.get_catalog("tokyo");
        let messy = catalog.get_catalog("  Tokyo ");
        assert_eq!(direct.len(), messy.len());
        assert_eq!(direct[0].id, messy[0].id);
    }

    #[test]
    fn test_unknown_destination_returns_default_list() {
        let catalog = StaticCatalog::builtin();
        let fallback = catalog.get_catalog("atlantis");
        assert!(!fallback.is_empty());
        assert_ne!(fallback[0].id, catalog.get_catalog("tokyo")[0].id);
    }

    #[test]
    fn test_new_normalizes_custom_keys() {
        let catalog = StaticCatalog::new(
            HashMap::from([(" Lisbon ".to_string(), vec![one_activity("tram", 3.0)])]),
            vec![one_activity("fallback", 0.0)],
        );
        let lisbon = catalog.get_catalog("lisbon");
        assert_eq!(lisbon.len(), 1);
        assert_eq!(lisbon[0].id, "tram");
    }

    #[test]
    fn test_every_builtin_list_is_nonempty() {
        let catalog = StaticCatalog::builtin();
        for key in catalog.destination_keys() {
            assert!(!catalog.get_catalog(&key).is_empty(), "empty list for {}", key);
        }
        assert!(!catalog.get_catalog("nowhere").is_empty());
    }
}
