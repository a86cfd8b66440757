//! Itinerary Generation Service
//!
//! Turns an `ItineraryRequest` into a day-by-day plan drawn from the
//! destination's activity catalog. Selection walks a fresh shuffle of the
//! catalog under soft budget and time caps; themes and dates are derived
//! per day.
//!
//! ## Features
//! - Random activity selection under per-day budget and time soft caps
//! - Theme arcs per travel style, arrival through farewell
//! - Flat transportation costing (arrival transfer, then local transport)
//! - Tagged selection outcomes so callers can spot degraded days
//! - Injectable randomness for reproducible generation

use chrono::{Duration, NaiveDate, Utc};
use rand::seq::SliceRandom;
use rand::Rng;
use uuid::Uuid;

use crate::catalog::{CatalogProvider, StaticCatalog};
use crate::error::PlannerError;
use crate::models::activity::Activity;
use crate::models::itinerary::{
    DayPlan, DegradedReason, GeneratedItinerary, GenerationMetadata, SelectionOutcome,
    TransportNote,
};
use crate::models::request::{ItineraryRequest, TravelStyle};

const MAX_ACTIVITIES_PER_DAY: usize = 3;
const MIN_ACTIVITIES_PER_DAY: usize = 2;
const BUDGET_FLEX_RATIO: f32 = 1.2; // 20% over the daily slice
const MAX_ACTIVITY_HOURS_PER_DAY: f32 = 10.0;
const ARRIVAL_TRANSFER_COST: f32 = 50.0;
const LOCAL_TRANSPORT_COST: f32 = 15.0;
const GENERATION_CONFIDENCE: f32 = 0.85;

#[derive(Debug, Clone)]
pub struct PlannerConfig {
    pub max_activities_per_day: usize,
    pub min_activities_per_day: usize,
    pub budget_flex_ratio: f32,
    pub max_activity_hours_per_day: f32,
    pub arrival_transfer_cost: f32,
    pub local_transport_cost: f32,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            max_activities_per_day: MAX_ACTIVITIES_PER_DAY,
            min_activities_per_day: MIN_ACTIVITIES_PER_DAY,
            budget_flex_ratio: BUDGET_FLEX_RATIO,
            max_activity_hours_per_day: MAX_ACTIVITY_HOURS_PER_DAY,
            arrival_transfer_cost: ARRIVAL_TRANSFER_COST,
            local_transport_cost: LOCAL_TRANSPORT_COST,
        }
    }
}

impl PlannerConfig {
    /// Create a config from environment variables or use defaults
    pub fn from_env() -> Self {
        let defaults = Self::default();

        Self {
            max_activities_per_day: std::env::var("PLANNER_MAX_ACTIVITIES_PER_DAY")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.max_activities_per_day),
            min_activities_per_day: std::env::var("PLANNER_MIN_ACTIVITIES_PER_DAY")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.min_activities_per_day),
            budget_flex_ratio: std::env::var("PLANNER_BUDGET_FLEX_RATIO")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.budget_flex_ratio),
            max_activity_hours_per_day: std::env::var("PLANNER_MAX_ACTIVITY_HOURS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.max_activity_hours_per_day),
            arrival_transfer_cost: std::env::var("PLANNER_ARRIVAL_TRANSFER_COST")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.arrival_transfer_cost),
            local_transport_cost: std::env::var("PLANNER_LOCAL_TRANSPORT_COST")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.local_transport_cost),
        }
    }
}

struct DaySelection {
    activities: Vec<Activity>,
    outcome: SelectionOutcome,
}

pub struct ItineraryPlanner<C: CatalogProvider> {
    catalog: C,
    config: PlannerConfig,
}

impl ItineraryPlanner<StaticCatalog> {
    /// Planner over the built-in destination catalog.
    pub fn builtin() -> Self {
        Self::new(StaticCatalog::builtin())
    }
}

impl<C: CatalogProvider> ItineraryPlanner<C> {
    pub fn new(catalog: C) -> Self {
        Self {
            catalog,
            config: PlannerConfig::default(),
        }
    }

    pub fn with_config(catalog: C, config: PlannerConfig) -> Self {
        Self { catalog, config }
    }

    /// Generate a new itinerary using thread-local randomness.
    pub fn generate(&self, request: &ItineraryRequest) -> Result<GeneratedItinerary, PlannerError> {
        self.generate_with_rng(request, &mut rand::thread_rng())
    }

    /// Generate a new itinerary with caller-supplied randomness. A seeded
    /// RNG makes the selection reproducible.
    pub fn generate_with_rng<R: Rng>(
        &self,
        request: &ItineraryRequest,
        rng: &mut R,
    ) -> Result<GeneratedItinerary, PlannerError> {
        self.validate(request)?;

        let catalog = self.catalog.get_catalog(&request.destination);
        let daily_budget = request.daily_budget();

        let mut days = Vec::with_capacity(request.duration as usize);
        for day in 1..=request.duration {
            let selection = self.select_activities_for_day(&catalog, request, daily_budget, rng);

            let transportation = if day == 1 {
                TransportNote {
                    name: "Arrival transfer".to_string(),
                    cost: self.config.arrival_transfer_cost,
                }
            } else {
                TransportNote {
                    name: "Local transport".to_string(),
                    cost: self.config.local_transport_cost,
                }
            };

            let estimated_cost =
                selection.activities.iter().map(|a| a.cost).sum::<f32>() + transportation.cost;

            days.push(DayPlan {
                day,
                date: self.date_for_day(request.dates.start_date, day),
                theme: self.day_theme(request.travel_style, day),
                activities: selection.activities,
                transportation,
                estimated_cost,
                selection: selection.outcome,
            });
        }

        let total_budget = days.iter().map(|d| d.estimated_cost).sum::<f32>().round();

        Ok(GeneratedItinerary {
            id: Uuid::new_v4(),
            title: self.build_title(request),
            description: self.build_description(request),
            destination: request.destination.clone(),
            duration: request.duration,
            total_budget,
            days,
            metadata: GenerationMetadata {
                travel_style: request.travel_style,
                interests: request.interests.clone(),
                confidence: GENERATION_CONFIDENCE,
            },
            created_at: Utc::now(),
        })
    }

    fn validate(&self, request: &ItineraryRequest) -> Result<(), PlannerError> {
        if request.duration == 0 {
            return Err(PlannerError::InvalidDuration(request.duration));
        }
        if !request.budget.is_finite() || request.budget < 0.0 {
            return Err(PlannerError::InvalidBudget(request.budget));
        }
        Ok(())
    }

    /// Pick up to `max_activities_per_day` activities from a fresh shuffle
    /// of the catalog, skipping anything that would push the day past its
    /// budget or time caps.
    fn select_activities_for_day<R: Rng>(
        &self,
        catalog: &[Activity],
        request: &ItineraryRequest,
        daily_budget: f32,
        rng: &mut R,
    ) -> DaySelection {
        if catalog.is_empty() {
            return DaySelection {
                activities: Vec::new(),
                outcome: SelectionOutcome::Degraded {
                    reason: DegradedReason::EmptyCatalog,
                },
            };
        }

        let mut shuffled = catalog.to_vec();
        shuffled.shuffle(rng);

        let budget_cap = daily_budget * self.config.budget_flex_ratio;

        let mut selected: Vec<Activity> = Vec::new();
        let mut day_cost = 0.0;
        let mut day_hours = 0.0;

        for activity in &shuffled {
            if selected.len() >= self.config.max_activities_per_day {
                break;
            }
            if day_cost + activity.cost > budget_cap {
                continue;
            }
            if day_hours + activity.duration_hours > self.config.max_activity_hours_per_day {
                continue;
            }

            // Accept interest matches; otherwise only while the day is
            // still under its minimum fill.
            if activity.matches_interests(&request.interests)
                || selected.len() < self.config.min_activities_per_day
            {
                day_cost += activity.cost;
                day_hours += activity.duration_hours;
                selected.push(activity.clone());
            }
        }

        if selected.is_empty() {
            log::warn!(
                "No activities fit the caps for '{}' (daily budget {:.2}), bypassing them",
                request.destination,
                daily_budget
            );
            let fallback: Vec<Activity> = shuffled
                .iter()
                .take(self.config.min_activities_per_day)
                .cloned()
                .collect();
            return DaySelection {
                activities: fallback,
                outcome: SelectionOutcome::Degraded {
                    reason: DegradedReason::CapsBypassed,
                },
            };
        }

        DaySelection {
            activities: selected,
            outcome: SelectionOutcome::Satisfied,
        }
    }

    /// Theme for a 1-based day index; indices past the arc reuse the last
    /// entry.
    fn day_theme(&self, style: TravelStyle, day: u32) -> String {
        let themes = style.day_themes();
        let idx = (day as usize).saturating_sub(1).min(themes.len() - 1);
        themes[idx].to_string()
    }

    /// Calendar date for a 1-based day index: the start date plus offset,
    /// or today plus offset when no start date was given.
    fn date_for_day(&self, start_date: Option<NaiveDate>, day: u32) -> NaiveDate {
        let base = start_date.unwrap_or_else(|| Utc::now().date_naive());
        base.checked_add_signed(Duration::days(i64::from(day) - 1))
            .unwrap_or(NaiveDate::MAX)
    }

    fn build_title(&self, request: &ItineraryRequest) -> String {
        format!(
            "{}-Day Trip to {}",
            request.duration,
            self.title_case(&request.destination)
        )
    }

    fn build_description(&self, request: &ItineraryRequest) -> String {
        let mut description_parts = Vec::new();

        description_parts.push(format!(
            "Discover the best of {} with this {}-day {} itinerary",
            self.title_case(&request.destination),
            request.duration,
            request.travel_style.as_str()
        ));

        if !request.interests.is_empty() {
            description_parts.push(format!("built around {}", request.interests.join(", ")));
        }

        description_parts
            .push("Each day balances the highlights with room to wander.".to_string());

        description_parts.join(". ")
    }

    /// Uppercases the first letter of each whitespace-separated word.
    fn title_case(&self, raw: &str) -> String {
        raw.split_whitespace()
            .map(|word| {
                let mut chars = word.chars();
                match chars.next() {
                    Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                    None => String::new(),
                }
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}
