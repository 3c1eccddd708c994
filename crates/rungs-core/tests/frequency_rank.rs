use std::collections::BTreeMap;

use rungs_core::tally::{combine, rank_scores, FrequencyTable, ScoreTable};
use rungs_core::Symbol;

fn sym(s: &str) -> Symbol {
    s.parse().unwrap()
}

fn table(rows: &[(&str, u64)]) -> FrequencyTable {
    let mut t = FrequencyTable::new();
    for (s, n) in rows {
        t.add_n(sym(s), *n);
    }
    t
}

#[test]
fn ties_break_on_canonical_string() {
    let t = table(&[("R4E", 2), ("L3O", 2), ("L12E", 2), ("R3O", 5)]);
    let order: Vec<String> = t.ranked().iter().map(|r| r.symbol.canonical()).collect();
    assert_eq!(order, vec!["R3O", "L12E", "L3O", "R4E"]);
    assert_eq!(t.top_k(2).len(), 2);
    assert_eq!(t.top_k(10).len(), 4);
}

#[test]
fn merged_counts_are_sums() {
    let a = table(&[("L3O", 2), ("R3E", 1)]);
    let b = table(&[("R3E", 4), ("L4E", 1)]);
    let c = FrequencyTable::new();
    let m = FrequencyTable::merged([&a, &b, &c]);

    for s in ["L3O", "R3E", "L4E", "R4O"] {
        let s = sym(s);
        assert_eq!(m.get(&s), a.get(&s) + b.get(&s) + c.get(&s));
    }
    assert_eq!(m.total(), a.total() + b.total());
}

#[test]
fn intersection_keeps_common_candidates_only() {
    let a = table(&[("L3O", 2), ("R3E", 1)]);
    let b = table(&[("R3E", 4), ("L4E", 1)]);
    let i = FrequencyTable::intersection(&[&a, &b]);
    assert_eq!(i.len(), 1);
    assert_eq!(i.get(&sym("R3E")), 5);

    assert!(FrequencyTable::intersection(&[]).is_empty());
    assert!(FrequencyTable::intersection(&[&a, &FrequencyTable::new()]).is_empty());
}

#[test]
fn zero_counts_are_not_stored() {
    let mut t = FrequencyTable::new();
    t.add_n(sym("L3O"), 0);
    assert!(t.is_empty());
}

#[test]
fn combine_weights_normalised_tables() {
    let mut x: ScoreTable = BTreeMap::new();
    x.insert(sym("L3O"), 10.0);
    x.insert(sym("R3E"), 5.0);

    let mut y: ScoreTable = BTreeMap::new();
    y.insert(sym("R3E"), 0.4);
    y.insert(sym("L4E"), 0.2);

    // x -> L3O 1.0, R3E 0.5 ; y -> R3E 1.0, L4E 0.5
    let ranked = combine(&[(1.0, &x), (2.0, &y)]);
    let got: Vec<(String, f64)> = ranked.iter().map(|r| (r.symbol.canonical(), r.score)).collect();
    assert_eq!(
        got,
        vec![
            ("R3E".to_string(), 2.5),
            ("L3O".to_string(), 1.0),
            ("L4E".to_string(), 1.0),
        ]
    );
}

#[test]
fn all_zero_table_is_neutral() {
    let mut z: ScoreTable = BTreeMap::new();
    z.insert(sym("L3O"), 0.0);
    let ranked = combine(&[(3.0, &z)]);
    assert_eq!(ranked[0].score, 0.0);
    assert!(rank_scores(&BTreeMap::new()).is_empty());
}
