//! Property-based tests for the geometry accumulator and rule evaluator

use permit_engine::evaluate::{evaluate, NotificationPolicy};
use permit_engine::extractors::extract_from_text;
use permit_engine::geometry::shoelace_area;
use permit_engine::jurisdiction::JurisdictionTable;
use proptest::prelude::*;
use shared_types::{Category, ExtractedFacts, Point};

fn vertex() -> impl Strategy<Value = Point> {
    (-1000.0f64..1000.0, -1000.0f64..1000.0).prop_map(|(x, y)| Point::new(x, y))
}

fn polygon() -> impl Strategy<Value = Vec<Point>> {
    prop::collection::vec(vertex(), 3..12)
}

fn optional_value() -> impl Strategy<Value = Option<f64>> {
    prop_oneof![
        Just(None),
        (0.0f64..10_000.0).prop_map(Some),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    // ============================================================
    // Shoelace invariance
    // ============================================================

    #[test]
    fn shoelace_invariant_under_rotation(points in polygon(), shift in 0usize..12) {
        let area = shoelace_area(&points);
        let mut rotated = points.clone();
        rotated.rotate_left(shift % points.len());
        let rotated_area = shoelace_area(&rotated);
        prop_assert!((area - rotated_area).abs() <= 1e-6 * area.max(1.0));
    }

    #[test]
    fn shoelace_invariant_under_reversal(points in polygon()) {
        let area = shoelace_area(&points);
        let mut reversed = points.clone();
        reversed.reverse();
        let reversed_area = shoelace_area(&reversed);
        prop_assert!((area - reversed_area).abs() <= 1e-6 * area.max(1.0));
    }

    #[test]
    fn shoelace_never_negative(points in prop::collection::vec(vertex(), 0..12)) {
        prop_assert!(shoelace_area(&points) >= 0.0);
    }

    // ============================================================
    // Evaluator totality and the category invariant
    // ============================================================

    #[test]
    fn evaluator_is_total_and_consistent(
        geoname in prop_oneof![Just(None), Just(Some("大牟田市".to_string())), Just(Some("不明な場所".to_string()))],
        area in optional_value(),
        height in optional_value(),
    ) {
        let table = JurisdictionTable::builtin();
        let facts = ExtractedFacts { geoname, area_m2: area, height_m: height };
        let rules = table.resolve(facts.geoname.as_deref());
        let result = evaluate(&facts, rules, NotificationPolicy::AnyPositiveWork);

        // insufficient_info iff any field is missing
        let any_missing = !facts.missing_fields().is_empty();
        prop_assert_eq!(result.category == Category::InsufficientInfo, any_missing);

        if let (Some(area), Some(height)) = (facts.area_m2, facts.height_m) {
            if !any_missing {
                if area >= rules.area_threshold_m2 || height >= rules.height_threshold_m {
                    prop_assert_eq!(result.category, Category::PermitRequired);
                } else if area > 0.0 || height > 0.0 {
                    prop_assert_eq!(result.category, Category::NotificationRequired);
                } else {
                    prop_assert_eq!(result.category, Category::NoPermitRequired);
                }
            }
        }
    }

    #[test]
    fn permit_over_area_always_suggests_area_reduction(
        area in 500.0f64..100_000.0,
        height in 0.0f64..1.9,
    ) {
        let table = JurisdictionTable::builtin();
        let facts = ExtractedFacts {
            geoname: Some("大牟田市".to_string()),
            area_m2: Some(area),
            height_m: Some(height),
        };
        let rules = table.resolve(facts.geoname.as_deref());
        let result = evaluate(&facts, rules, NotificationPolicy::AnyPositiveWork);

        prop_assert_eq!(result.category, Category::PermitRequired);
        prop_assert!(result.improvements.iter().any(|s| s.contains("造成面積")));
    }

    // ============================================================
    // Extractor totality
    // ============================================================

    #[test]
    fn text_extraction_never_panics(text in "\\PC{0,200}") {
        let _ = extract_from_text(&text);
    }

    #[test]
    fn extracted_measurements_are_non_negative(text in "\\PC{0,200}") {
        let facts = extract_from_text(&text);
        if let Some(area) = facts.area_m2 {
            prop_assert!(area >= 0.0);
        }
        if let Some(height) = facts.height_m {
            prop_assert!(height >= 0.0);
        }
    }
}
