//! Integration tests for weighted sampling
//!
//! Tests declaration-order cumulative selection and its error cases.

use rand::rngs::mock::StepRng;
use regimen_engine::{WeightedChoice, parse_weight, rng};
use regimen_foundation::ErrorKind;
use regimen_language::parse_item;

fn choice_of(source: &str) -> Vec<(String, f64)> {
    let item = parse_item(source).unwrap();
    let choice = WeightedChoice::from_weights(item.as_choice().unwrap()).unwrap();
    choice
        .options()
        .iter()
        .map(|(name, weight)| ((*name).to_string(), *weight))
        .collect()
}

// =============================================================================
// Distribution
// =============================================================================

#[test]
fn two_to_one_converges() {
    let item = parse_item("{ a : 2 | b : 1 }").unwrap();
    let choice = WeightedChoice::from_weights(item.as_choice().unwrap()).unwrap();
    let mut generator = rng::seeded(2024);

    let n: u32 = 30_000;
    let mut a = 0u32;
    for _ in 0..n {
        if choice.sample(&mut generator).unwrap() == "a" {
            a += 1;
        }
    }
    let freq = f64::from(a) / f64::from(n);
    assert!((freq - 2.0 / 3.0).abs() < 0.015, "frequency was {freq}");
}

#[test]
fn sole_option_always_wins() {
    let item = parse_item("{ a : 1 }").unwrap();
    let choice = WeightedChoice::from_weights(item.as_choice().unwrap()).unwrap();
    for seed in 0..50 {
        assert_eq!(choice.sample(&mut rng::seeded(seed)).unwrap(), "a");
    }
    assert_eq!(choice.sample(&mut StepRng::new(0, 0)).unwrap(), "a");
    assert_eq!(choice.sample(&mut StepRng::new(u64::MAX, 0)).unwrap(), "a");
}

#[test]
fn declaration_order_is_kept() {
    assert_eq!(
        choice_of("{ zebra : 1 | apple : 2 | mango : 3 }"),
        vec![
            ("zebra".to_string(), 1.0),
            ("apple".to_string(), 2.0),
            ("mango".to_string(), 3.0),
        ]
    );
}

#[test]
fn boundary_draw_goes_to_earlier_option() {
    let choice = WeightedChoice::new(vec![("a", 1.0), ("b", 1.0)]).unwrap();
    assert_eq!(choice.pick(1.0), Some("a"));
    assert_eq!(choice.pick(1.0 + f64::EPSILON * 4.0), Some("b"));
}

#[test]
fn decimal_weights() {
    assert_eq!(
        choice_of("{ easy : 0.5 | hard : 1.5 }"),
        vec![("easy".to_string(), 0.5), ("hard".to_string(), 1.5)]
    );
}

// =============================================================================
// Errors
// =============================================================================

#[test]
fn zero_sum_is_sampling_error() {
    let item = parse_item("{ a : 0 | b : 0 }").unwrap();
    let choice = WeightedChoice::from_weights(item.as_choice().unwrap()).unwrap();
    let err = choice.sample(&mut rng::seeded(0)).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::NoPositiveWeight));
    assert_eq!(err.to_string(), "no positive weight to sample from");
}

#[test]
fn non_numeric_weight_names_literal() {
    let item = parse_item("{ a : 1 | b : twice }").unwrap();
    let err = WeightedChoice::from_weights(item.as_choice().unwrap()).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::InvalidWeight(ref lit) if lit == "twice"));
}

#[test]
fn negative_weight_is_rejected() {
    let item = parse_item("{ a : -1 }").unwrap();
    assert!(WeightedChoice::from_weights(item.as_choice().unwrap()).is_err());
    assert!(parse_weight("-0.5").is_err());
}
