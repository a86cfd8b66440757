use serde::{Deserialize, Serialize};

use crate::models::activity::Activity;
use crate::models::request::ItineraryRequest;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoringWeights {
    /// Weight for interest matching against tags and category
    pub interest_weight: f32,
    /// Weight for the activity's rating
    pub rating_weight: f32,
    /// Weight for fitting the daily budget
    pub budget_weight: f32,
    /// Flex multiplier over the daily budget for the half-credit tier.
    /// Keep in step with the planner's `budget_flex_ratio` so the scorer
    /// agrees with what selection will admit.
    pub budget_flex_ratio: f32,
    /// Minimum score required to include in results
    pub minimum_score: f32,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            interest_weight: 50.0,
            rating_weight: 30.0,
            budget_weight: 20.0,
            budget_flex_ratio: 1.2,
            minimum_score: 20.0,
        }
    }
}

impl ScoringWeights {
    /// Create weights from environment variables or use defaults
    pub fn from_env() -> Self {
        let defaults = Self::default();

        Self {
            interest_weight: std::env::var("SCORING_INTEREST_WEIGHT")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.interest_weight),
            rating_weight: std::env::var("SCORING_RATING_WEIGHT")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.rating_weight),
            budget_weight: std::env::var("SCORING_BUDGET_WEIGHT")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.budget_weight),
            budget_flex_ratio: std::env::var("SCORING_BUDGET_FLEX_RATIO")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.budget_flex_ratio),
            minimum_score: std::env::var("SCORING_MIN_SCORE")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.minimum_score),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ScoredActivity {
    pub activity: Activity,
    pub total_score: f32,
    pub score_breakdown: ScoreBreakdown,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ScoreBreakdown {
    pub interest_score: f32,
    pub rating_score: f32,
    pub budget_score: f32,
}

#[derive(Default)]
pub struct ActivityScorer {
    pub weights: ScoringWeights,
}

impl ActivityScorer {
    pub fn new() -> Self {
        let weights = ScoringWeights::from_env();
        log::debug!("ActivityScorer initialized with weights: {:?}", weights);
        Self { weights }
    }

    pub fn with_weights(weights: ScoringWeights) -> Self {
        Self { weights }
    }

    /// Score an activity against the request's interests, rating and daily
    /// budget.
    pub fn score_activity(
        &self,
        activity: &Activity,
        request: &ItineraryRequest,
    ) -> ScoredActivity {
        let interest_score = self.score_interests(activity, request);
        let rating_score = self.score_rating(activity);
        let budget_score = self.score_budget(activity, request);

        let total_score = interest_score + rating_score + budget_score;

        ScoredActivity {
            activity: activity.clone(),
            total_score,
            score_breakdown: ScoreBreakdown {
                interest_score,
                rating_score,
                budget_score,
            },
        }
    }

    fn score_interests(&self, activity: &Activity, request: &ItineraryRequest) -> f32 {
        if request.interests.is_empty() {
            return self.weights.interest_weight * 0.5; // 50% when no preference was given
        }

        let matched = request
            .interests
            .iter()
            .filter(|interest| activity.matches_interest(interest))
            .count();

        let match_percentage = matched as f32 / request.interests.len() as f32;
        match_percentage * self.weights.interest_weight
    }

    fn score_rating(&self, activity: &Activity) -> f32 {
        (activity.rating / 5.0) * self.weights.rating_weight
    }

    fn score_budget(&self, activity: &Activity, request: &ItineraryRequest) -> f32 {
        let daily_budget = request.daily_budget();

        if activity.cost <= daily_budget {
            self.weights.budget_weight
        } else if activity.cost <= daily_budget * self.weights.budget_flex_ratio {
            self.weights.budget_weight * 0.5 // Only fits the flexed budget
        } else {
            0.0
        }
    }

    /// Score a whole catalog and return the entries above the minimum
    /// threshold, best first.
    pub fn score_and_rank(
        &self,
        activities: &[Activity],
        request: &ItineraryRequest,
    ) -> Vec<ScoredActivity> {
        let mut scored: Vec<ScoredActivity> = activities
            .iter()
            .map(|activity| self.score_activity(activity, request))
            .filter(|scored| scored.total_score >= self.weights.minimum_score)
            .collect();

        // Sort by score descending
        scored.sort_by(|a, b| {
            b.total_score
                .partial_cmp(&a.total_score)
                .unwrap_or(std::cmp::Ordering::Equal)
        });

        scored
    }
}
