use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::activity::Activity;
use crate::models::request::TravelStyle;

/// Flat per-day transportation line. Day 1 carries the arrival transfer,
/// every later day the local-transport allowance.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct TransportNote {
    pub name: String,
    pub cost: f32,
}

/// Why a day's selection fell back past the soft caps.
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum DegradedReason {
    CapsBypassed,
    EmptyCatalog,
}

#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(tag = "status", rename_all = "snake_case")] // Use the "status" field to determine which variant to use
pub enum SelectionOutcome {
    Satisfied,
    Degraded { reason: DegradedReason },
}

impl SelectionOutcome {
    pub fn is_degraded(&self) -> bool {
        matches!(self, SelectionOutcome::Degraded { .. })
    }
}

/// One day's slice of a generated itinerary.
#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct DayPlan {
    pub day: u32,
    pub date: NaiveDate,
    pub theme: String,
    pub activities: Vec<Activity>,
    pub transportation: TransportNote,
    pub estimated_cost: f32,
    pub selection: SelectionOutcome,
}

impl DayPlan {
    /// Spend across the day's activities, before transportation.
    pub fn activity_cost(&self) -> f32 {
        self.activities.iter().map(|a| a.cost).sum()
    }

    pub fn activity_hours(&self) -> f32 {
        self.activities.iter().map(|a| a.duration_hours).sum()
    }
}

#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct GenerationMetadata {
    pub travel_style: TravelStyle,
    pub interests: Vec<String>,
    pub confidence: f32,
}

/// Aggregate produced by one generation call. Immutable afterwards; saving
/// and sharing belong to the application around this crate.
#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedItinerary {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub destination: String,
    pub duration: u32,
    pub total_budget: f32,
    pub days: Vec<DayPlan>,
    pub metadata: GenerationMetadata,
    pub created_at: DateTime<Utc>,
}
