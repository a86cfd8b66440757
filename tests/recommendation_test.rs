mod common;

use common::*;
use tripweaver::{ActivityScorer, CatalogProvider, ScoringWeights, StaticCatalog};

#[test]
fn test_tokyo_food_request_ranks_food_activities_first() {
    let scorer = ActivityScorer::with_weights(ScoringWeights::default());
    let catalog = StaticCatalog::builtin().get_catalog("tokyo");
    let request = tokyo_request();

    let ranked = scorer.score_and_rank(&catalog, &request);

    assert_eq!(ranked.len(), 5);
    assert_eq!(ranked[0].activity.id, "sushi-making-class");
    assert_eq!(ranked[1].activity.id, "tsukiji-market-walk");
    assert!(ranked[1].total_score > ranked[2].total_score);

    for scored in &ranked[..2] {
        assert_eq!(scored.score_breakdown.interest_score, 50.0);
    }
    for scored in &ranked[2..] {
        assert_eq!(scored.score_breakdown.interest_score, 0.0);
    }
}

#[test]
fn test_minimum_score_drops_poor_fits() {
    let weights = ScoringWeights {
        minimum_score: 50.0,
        ..ScoringWeights::default()
    };
    let scorer = ActivityScorer::with_weights(weights);
    let request = tokyo_request(); // 300 per day

    let catalog = vec![
        make_activity("street-food-tour", 40.0, 2.0, &["food"]),
        make_activity("overpriced-dud", 2000.0, 2.0, &[]),
    ];

    let ranked = scorer.score_and_rank(&catalog, &request);

    assert_eq!(ranked.len(), 1);
    assert_eq!(ranked[0].activity.id, "street-food-tour");
}

#[test]
fn test_no_interests_still_produces_a_ranking() {
    let scorer = ActivityScorer::with_weights(ScoringWeights::default());
    let catalog = StaticCatalog::builtin().get_catalog("paris");
    let mut request = tokyo_request();
    request.destination = "paris".to_string();
    request.interests.clear();

    let ranked = scorer.score_and_rank(&catalog, &request);

    assert!(!ranked.is_empty());
    for scored in &ranked {
        assert_eq!(scored.score_breakdown.interest_score, 25.0);
    }
    for pair in ranked.windows(2) {
        assert!(pair[0].total_score >= pair[1].total_score);
    }
}

#[test]
fn test_budget_tier_separates_equal_matches() {
    let scorer = ActivityScorer::with_weights(ScoringWeights::default());
    let request = tokyo_request(); // 300 per day, flexes to 360

    let catalog = vec![
        make_activity("fits-flex-only", 350.0, 2.0, &["food"]),
        make_activity("fits-budget", 100.0, 2.0, &["food"]),
        make_activity("over-everything", 500.0, 2.0, &["food"]),
    ];

    let ranked = scorer.score_and_rank(&catalog, &request);

    assert_eq!(ranked[0].activity.id, "fits-budget");
    assert_eq!(ranked[0].score_breakdown.budget_score, 20.0);
    assert_eq!(ranked[1].activity.id, "fits-flex-only");
    assert_eq!(ranked[1].score_breakdown.budget_score, 10.0);
    assert_eq!(ranked[2].activity.id, "over-everything");
    assert_eq!(ranked[2].score_breakdown.budget_score, 0.0);
}

#[test]
fn test_custom_weights_change_the_ordering() {
    // Rating-dominated weights make the better-rated activity win even
    // without an interest match.
    let weights = ScoringWeights {
        interest_weight: 5.0,
        rating_weight: 90.0,
        budget_weight: 5.0,
        minimum_score: 0.0,
        ..ScoringWeights::default()
    };
    let scorer = ActivityScorer::with_weights(weights);
    let request = tokyo_request();

    let mut highly_rated = make_activity("sleeper-hit", 50.0, 2.0, &[]);
    highly_rated.rating = 5.0;
    let mut on_theme = make_activity("food-cart", 50.0, 2.0, &["food"]);
    on_theme.rating = 3.0;

    let ranked = scorer.score_and_rank(&[highly_rated, on_theme], &request);

    assert_eq!(ranked[0].activity.id, "sleeper-hit");
}
