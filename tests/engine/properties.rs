//! Property tests for sampling and resolution
//!
//! Tests invariants that hold for any seed or weight list.

use proptest::prelude::*;
use regimen_engine::{RenderEvent, Resolver, ResolverConfig, Root, WeightedChoice, rng};
use regimen_language::parse;

const WORKOUT: &str = "\
workout { run : 2 | swim : 1 }
run { tempo : 2 | LSD : 1 | interval: 5 }
interval [ (lap), (rest) ]
lap { 1/4 mile : 1 | 1/2 mile : 1 }
rest { 2 minutes : 2 | 3 minutes : 2 | 4 minutes : 1 }
";

fn weights() -> impl Strategy<Value = Vec<f64>> {
    prop::collection::vec(prop_oneof![Just(0.0), 0.001f64..1000.0], 1..12)
}

proptest! {
    #[test]
    fn pick_is_first_running_sum_reaching_draw(ws in weights(), u in 0.0f64..1.0) {
        let names: Vec<String> = (0..ws.len()).map(|i| format!("o{i}")).collect();
        let options: Vec<(&str, f64)> = names.iter().map(String::as_str).zip(ws.iter().copied()).collect();
        let choice = WeightedChoice::new(options).unwrap();
        prop_assume!(choice.total() > 0.0);

        let sums: Vec<f64> = ws
            .iter()
            .scan(0.0, |sum, w| {
                *sum += w;
                Some(*sum)
            })
            .collect();
        for r in [0.0, u * choice.total()] {
            let picked = choice.pick(r).unwrap();
            let index = names.iter().position(|n| n == picked).unwrap();
            prop_assert!(sums[index] >= r);
            prop_assert!(index == 0 || sums[index - 1] < r);
        }
    }

    #[test]
    fn samples_declared_options(ws in weights(), seed in any::<u64>()) {
        let names: Vec<String> = (0..ws.len()).map(|i| format!("o{i}")).collect();
        let options: Vec<(&str, f64)> = names.iter().map(String::as_str).zip(ws.iter().copied()).collect();
        let choice = WeightedChoice::new(options).unwrap();
        let mut generator = rng::seeded(seed);

        if choice.total() > 0.0 {
            for _ in 0..16 {
                let picked = choice.sample(&mut generator).unwrap();
                prop_assert!(names.iter().any(|n| n == picked));
            }
        } else {
            prop_assert!(choice.sample(&mut generator).is_err());
        }
    }

    #[test]
    fn pick_is_monotonic(ws in weights(), a in 0.0f64..1.0, b in 0.0f64..1.0) {
        let names: Vec<String> = (0..ws.len()).map(|i| format!("o{i}")).collect();
        let options: Vec<(&str, f64)> = names.iter().map(String::as_str).zip(ws.iter().copied()).collect();
        let choice = WeightedChoice::new(options).unwrap();
        prop_assume!(choice.total() > 0.0);

        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        let position = |r: f64| {
            let picked = choice.pick(r * choice.total()).unwrap();
            names.iter().position(|n| n == picked).unwrap()
        };
        prop_assert!(position(lo) <= position(hi));
    }

    #[test]
    fn resolution_is_well_formed(seed in any::<u64>()) {
        let plan = parse(WORKOUT).unwrap();
        let events = Resolver::new(&plan)
            .with_config(ResolverConfig::new())
            .resolve(Root::First, &mut rng::seeded(seed))
            .unwrap();

        prop_assert_eq!(events[0].as_pair(), ("workout", 0));
        for pair in events.windows(2) {
            prop_assert!(pair[1].depth <= pair[0].depth + 1);
            prop_assert!(pair[1].depth >= 1);
        }
        prop_assert!(events.iter().all(|e: &RenderEvent| e.text == e.text.trim()));
    }

    #[test]
    fn same_seed_same_events(seed in any::<u64>()) {
        let plan = parse(WORKOUT).unwrap();
        let first = Resolver::new(&plan).resolve(Root::First, &mut rng::seeded(seed)).unwrap();
        let second = Resolver::new(&plan).resolve(Root::First, &mut rng::seeded(seed)).unwrap();
        prop_assert_eq!(first, second);
    }
}
