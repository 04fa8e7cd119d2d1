//! Filter engine behavior tests
//!
//! Covers category membership, the distinguished passthrough labels,
//! inclusive price bounds, clamp invariants, and conjunctive stage
//! composition under permuted evaluation order.

use proptest::prelude::*;
use rstest::rstest;

use whattaplace::filtering::{
    self, FilterSelection, passes_activity, passes_category, passes_location, passes_price,
};
use whattaplace::models::{PriceBounds, Space};

fn space(id: &str, price: f64, categories: &[&str], location: &str, activities: &[&str]) -> Space {
    Space {
        id: id.to_string(),
        title: format!("Space {id}"),
        subtitle: String::new(),
        price_per_hour: price,
        rating: 4.5,
        review_count: None,
        features: Vec::new(),
        image: String::new(),
        gallery: None,
        categories: categories.iter().map(|s| s.to_string()).collect(),
        location: location.to_string(),
        activities: activities.iter().map(|s| s.to_string()).collect(),
    }
}

fn sample_spaces() -> Vec<Space> {
    vec![
        space("a", 500.0, &["Photoshoot"], "North", &["Portrait"]),
        space("b", 1500.0, &["Workshops"], "South", &["Talk"]),
        space("c", 900.0, &["Photoshoot", "Events"], "North", &["Portrait", "Launch"]),
        space("d", 2400.0, &["Events"], "East", &["Launch"]),
    ]
}

fn selection(category: &str, location: &str, activity: &str, min: f64, max: f64) -> FilterSelection {
    FilterSelection {
        category: category.to_string(),
        location: location.to_string(),
        activity: activity.to_string(),
        price_min: min,
        price_max: max,
    }
}

fn selected_ids(spaces: &[Space], sel: &FilterSelection) -> Vec<String> {
    filtering::select(spaces, sel)
        .into_iter()
        .map(|s| s.id.clone())
        .collect()
}

#[rstest]
#[case("Photoshoot", vec!["a", "c"])]
#[case("Events", vec!["c", "d"])]
#[case("Workshops", vec!["b"])]
#[case("Podcast", vec![])]
fn category_filter_matches_membership(#[case] category: &str, #[case] expected: Vec<&str>) {
    let spaces = sample_spaces();
    let sel = selection(category, "All Areas", "All Activities", 0.0, 10_000.0);
    assert_eq!(selected_ids(&spaces, &sel), expected);
}

#[test]
fn all_spaces_admits_everything() {
    let spaces = sample_spaces();
    let sel = selection("All Spaces", "All Areas", "All Activities", 0.0, 10_000.0);
    assert_eq!(selected_ids(&spaces, &sel), vec!["a", "b", "c", "d"]);
}

#[rstest]
#[case(500.0, 1500.0, vec!["a", "b", "c"])] // both boundary prices included
#[case(501.0, 1500.0, vec!["b", "c"])] // one unit above min excludes a
#[case(500.0, 1499.0, vec!["a", "c"])] // one unit below max excludes b
fn price_range_is_inclusive_on_both_ends(
    #[case] min: f64,
    #[case] max: f64,
    #[case] expected: Vec<&str>,
) {
    let spaces = sample_spaces();
    let sel = selection("All Spaces", "All Areas", "All Activities", min, max);
    assert_eq!(selected_ids(&spaces, &sel), expected);
}

#[test]
fn end_to_end_two_space_example() {
    let spaces = vec![
        space("A", 500.0, &["Photoshoot"], "North", &["Portrait"]),
        space("B", 1500.0, &["Workshops"], "South", &["Talk"]),
    ];
    let sel = selection("Photoshoot", "All Areas", "All Activities", 0.0, 1000.0);
    assert_eq!(selected_ids(&spaces, &sel), vec!["A"]);
}

/// Stage order must not matter: compare `select` against every permutation
/// of independent stage applications.
#[test]
fn conjunctive_composition_is_order_independent() {
    let spaces = sample_spaces();
    let sel = selection("Photoshoot", "North", "Portrait", 600.0, 2000.0);

    let stages: Vec<Box<dyn Fn(&Space) -> bool>> = vec![
        Box::new(|s: &Space| passes_category(s, "Photoshoot")),
        Box::new(|s: &Space| passes_price(s, 600.0, 2000.0)),
        Box::new(|s: &Space| passes_location(s, "North")),
        Box::new(|s: &Space| passes_activity(s, "Portrait")),
    ];

    let reference = selected_ids(&spaces, &sel);

    // all 24 orderings of the four stages
    let orders: Vec<[usize; 4]> = {
        let mut orders = Vec::new();
        for a in 0..4 {
            for b in 0..4 {
                for c in 0..4 {
                    for d in 0..4 {
                        let order = [a, b, c, d];
                        let mut seen = [false; 4];
                        for i in order {
                            seen[i] = true;
                        }
                        if seen.iter().all(|&s| s) {
                            orders.push(order);
                        }
                    }
                }
            }
        }
        orders
    };
    assert_eq!(orders.len(), 24);

    for order in orders {
        let mut remaining: Vec<&Space> = spaces.iter().collect();
        for stage_index in order {
            remaining.retain(|s| stages[stage_index](s));
        }
        let ids: Vec<String> = remaining.into_iter().map(|s| s.id.clone()).collect();
        assert_eq!(ids, reference, "stage order {order:?} changed the result");
    }
}

proptest! {
    /// After any sequence of min/max edits, `price_min <= price_max` holds
    /// and both bounds stay within the catalog bounds.
    #[test]
    fn clamp_invariant_holds_under_arbitrary_edits(
        edits in prop::collection::vec((any::<bool>(), -5_000.0f64..25_000.0), 0..40)
    ) {
        let bounds = PriceBounds { min: 100.0, max: 2_000.0 };
        let mut sel = selection("All Spaces", "All Areas", "All Activities", bounds.min, bounds.max);

        for (edit_min, value) in edits {
            sel = if edit_min {
                sel.with_price_min(value, bounds)
            } else {
                sel.with_price_max(value, bounds)
            };
            prop_assert!(sel.price_min <= sel.price_max);
            prop_assert!(sel.price_min >= bounds.min);
            prop_assert!(sel.price_max <= bounds.max);
        }
    }

    /// Selection output is always a subsequence of the input (stable filter).
    #[test]
    fn select_preserves_relative_order(
        prices in prop::collection::vec(0.0f64..3_000.0, 0..30),
        min in 0.0f64..3_000.0,
        max in 0.0f64..3_000.0,
    ) {
        let spaces: Vec<Space> = prices
            .iter()
            .enumerate()
            .map(|(i, &p)| space(&format!("s{i}"), p, &["Photoshoot"], "North", &["Portrait"]))
            .collect();
        let sel = selection("All Spaces", "All Areas", "All Activities", min, max);

        let result = filtering::select(&spaces, &sel);
        let positions: Vec<usize> = result
            .iter()
            .map(|s| spaces.iter().position(|x| x.id == s.id).unwrap())
            .collect();
        prop_assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }
}
