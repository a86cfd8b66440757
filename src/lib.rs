//! Trip-planning core: day-by-day itinerary generation over destination
//! activity catalogs, with interest-based activity scoring for
//! recommendations.
//!
//! ```
//! use tripweaver::{ItineraryPlanner, ItineraryRequest, TravelStyle, TripDates};
//!
//! let planner = ItineraryPlanner::builtin();
//! let request = ItineraryRequest {
//!     destination: "tokyo".to_string(),
//!     duration: 3,
//!     budget: 900.0,
//!     interests: vec!["food".to_string()],
//!     travel_style: TravelStyle::Cultural,
//!     dates: TripDates::default(),
//! };
//!
//! let itinerary = planner.generate(&request).expect("valid request");
//! assert_eq!(itinerary.days.len(), 3);
//! ```

pub mod catalog;
pub mod error;
pub mod models;
pub mod services;

pub use catalog::{CatalogProvider, StaticCatalog};
pub use error::PlannerError;
pub use models::activity::{Activity, ActivityLocation};
pub use models::itinerary::{
    DayPlan, DegradedReason, GeneratedItinerary, GenerationMetadata, SelectionOutcome,
    TransportNote,
};
pub use models::request::{ItineraryRequest, TravelStyle, TripDates};
pub use services::activity_scoring::{
    ActivityScorer, ScoreBreakdown, ScoredActivity, ScoringWeights,
};
pub use services::itinerary_generation_service::{ItineraryPlanner, PlannerConfig};
