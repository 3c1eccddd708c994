use std::collections::BTreeMap;

use rungs_core::engine::{BlockOutcome, IntersectionMode};
use rungs_core::scan::ranges_intersect;
use rungs_core::scorer::ScorerName;
use rungs_core::symbol::parse_sequence;
use rungs_core::{Engine, EngineParams, Symbol, Transform, TransformRegistry};

const ABABACAB: &str = "L3O R3E L3O R3E L3O L4E L3O R3E";

fn seq(s: &str) -> Vec<Symbol> {
    parse_sequence(s).unwrap()
}

fn sym(s: &str) -> Symbol {
    s.parse().unwrap()
}

fn long_history() -> Vec<Symbol> {
    let pattern = ["L3O", "R3E", "L4E", "R4O", "L3O", "L3O", "R3E", "L4E", "R3E", "L3O", "R4O"];
    (0..120).map(|i| sym(pattern[(i * 7 + i / 5) % pattern.len()])).collect()
}

#[test]
fn identity_scenario_through_engine() {
    let params = EngineParams {
        window_sizes: vec![2],
        transforms: TransformRegistry::from_transforms([Transform::IDENTITY]),
        top_k: 1,
        ..EngineParams::default()
    };
    let engine = Engine::new(params).unwrap();
    let p = engine.predict(&seq(ABABACAB));

    let report = p.block(2).unwrap().report().unwrap();
    assert_eq!(report.query, seq("L3O R3E"));
    let t = &report.transforms[0];
    assert_eq!(t.transform, Transform::IDENTITY);
    assert_eq!(t.matches, 1);
    assert_eq!(t.total, 1);
    assert_eq!(t.top.len(), 1);
    assert_eq!(t.top[0].symbol, sym("R3E"));
    assert_eq!(report.merged_top[0].symbol, sym("R3E"));
}

#[test]
fn insufficient_data_is_an_outcome() {
    let engine = Engine::new(EngineParams {
        window_sizes: vec![4, 2],
        ..EngineParams::default()
    })
    .unwrap();
    let p = engine.predict(&seq("L3O R3E L3O"));

    let b4 = p.block(4).unwrap();
    assert!(b4.is_insufficient());
    assert_eq!(
        b4.outcome,
        BlockOutcome::Insufficient {
            needed: 5,
            available: 3
        }
    );
    assert!(!p.block(2).unwrap().is_insufficient());
    // blocks keep request order
    let sizes: Vec<usize> = p.blocks.iter().map(|b| b.size).collect();
    assert_eq!(sizes, vec![4, 2]);
}

#[test]
fn merged_equals_sum_of_transforms() {
    let engine = Engine::new(EngineParams {
        transforms: TransformRegistry::standard().with_reversed(),
        ..EngineParams::default()
    })
    .unwrap();
    let h = long_history();
    let p = engine.predict(&h);

    for b in &p.blocks {
        let r = b.report().unwrap();
        for (s, c) in r.merged.iter() {
            let sum: u64 = r.transforms.iter().map(|t| t.counts.get(&s)).sum();
            assert_eq!(c, sum);
        }
        let total: u64 = r.transforms.iter().map(|t| t.total).sum();
        assert_eq!(r.merged.total(), total);
    }
}

#[test]
fn overlap_resolution_gives_larger_windows_priority() {
    let engine = Engine::new(EngineParams {
        window_sizes: vec![2, 3, 4],
        transforms: TransformRegistry::standard().with_reversed(),
        overlap_resolution: true,
        ..EngineParams::default()
    })
    .unwrap();
    let h = long_history();
    let scans = engine.scan(&h);

    for (&small, small_matches) in &scans {
        for (&large, large_matches) in &scans {
            if large <= small {
                continue;
            }
            for s in small_matches {
                for l in large_matches {
                    assert!(
                        !ranges_intersect(s.start, s.size, l.start, l.size),
                        "size {small} match at {} overlaps size {large} match at {}",
                        s.start,
                        l.start
                    );
                }
            }
        }
    }

    // Without resolution the small size sees at least as many matches.
    let free = Engine::new(EngineParams {
        overlap_resolution: false,
        ..engine.params.clone()
    })
    .unwrap()
    .scan(&h);
    assert!(free[&2].len() >= scans[&2].len());
    assert_eq!(free[&4], scans[&4]);
}

#[test]
fn output_is_deterministic() {
    let mut weights = BTreeMap::new();
    weights.insert(ScorerName::BlockMatch, 1.0);
    weights.insert(ScorerName::Dedup, 0.5);
    weights.insert(ScorerName::Volatility, 0.25);

    let params = EngineParams {
        transforms: TransformRegistry::standard().with_reversed(),
        intersection: IntersectionMode::ForwardVsReversed,
        overlap_resolution: true,
        weights,
        ..EngineParams::default()
    };
    let h = long_history();
    let a = Engine::new(params.clone()).unwrap().predict(&h);
    let b = Engine::new(params).unwrap().predict(&h);

    assert_eq!(a, b);
    assert_eq!(
        serde_json::to_string(&a).unwrap(),
        serde_json::to_string(&b).unwrap()
    );
    assert!(a.combined.as_ref().is_some_and(|c| !c.is_empty()));
}

#[test]
fn intersection_modes() {
    let h = long_history();
    let all = Engine::new(EngineParams {
        intersection: IntersectionMode::AllTransforms,
        ..EngineParams::default()
    })
    .unwrap()
    .predict(&h);

    for b in &all.blocks {
        let r = b.report().unwrap();
        let inter = r.intersection.as_ref().unwrap();
        for row in inter {
            assert!(r.transforms.iter().all(|t| t.counts.get(&row.symbol) > 0));
            let sum: u64 = r.transforms.iter().map(|t| t.counts.get(&row.symbol)).sum();
            assert_eq!(row.count, sum);
        }
    }

    let none = Engine::new(EngineParams::default()).unwrap().predict(&h);
    assert!(none.blocks.iter().all(|b| b.report().unwrap().intersection.is_none()));
}

#[test]
fn scorers_run_without_weights_and_combined_is_absent() {
    let p = Engine::new(EngineParams::default()).unwrap().predict(&long_history());
    assert!(p.combined.is_none());
    assert_eq!(p.scorers.len(), 3);
    assert!(p.scorer(ScorerName::PeriodicLag).unwrap().top.is_some());
}

#[test]
fn combined_with_single_weight_follows_that_source() {
    let h = long_history();
    let mut weights = BTreeMap::new();
    weights.insert(ScorerName::Dedup, 1.0);
    let p = Engine::new(EngineParams {
        weights,
        ..EngineParams::default()
    })
    .unwrap()
    .predict(&h);

    let combined = p.combined.as_ref().unwrap();
    assert_eq!(Some(combined[0].symbol), p.scorer(ScorerName::Dedup).unwrap().top);
}

#[test]
fn invalid_params_are_rejected() {
    let bad = [
        EngineParams { window_sizes: vec![], ..EngineParams::default() },
        EngineParams { window_sizes: vec![3, 3], ..EngineParams::default() },
        EngineParams { window_sizes: vec![0], ..EngineParams::default() },
        EngineParams { top_k: 0, ..EngineParams::default() },
        EngineParams {
            transforms: TransformRegistry::from_transforms(Vec::<Transform>::new()),
            ..EngineParams::default()
        },
        EngineParams { scorers: vec![ScorerName::BlockMatch], ..EngineParams::default() },
        EngineParams {
            weights: [(ScorerName::Dedup, 1.0)].into_iter().collect(),
            scorers: vec![ScorerName::Volatility],
            ..EngineParams::default()
        },
        EngineParams {
            weights: [(ScorerName::BlockMatch, f64::NAN)].into_iter().collect(),
            ..EngineParams::default()
        },
        // standard registry has no reversed transforms
        EngineParams {
            intersection: IntersectionMode::ForwardVsReversed,
            ..EngineParams::default()
        },
    ];
    for p in bad {
        assert!(Engine::new(p).is_err());
    }
}
