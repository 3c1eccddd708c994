use proptest::prelude::*;
use rungs_core::scan::{find_matches, query_window, ranges_intersect, OverlapResolver};
use rungs_core::symbol::parse_sequence;
use rungs_core::tally::FrequencyTable;
use rungs_core::{Symbol, Transform, TransformRegistry};

// A = L3O, B = R3E (full-flip of A), C = L4E
const ABABACAB: &str = "L3O R3E L3O R3E L3O L4E L3O R3E";

fn seq(s: &str) -> Vec<Symbol> {
    parse_sequence(s).unwrap()
}

fn sym(s: &str) -> Symbol {
    s.parse().unwrap()
}

#[test]
fn identity_scenario_counts_predecessor() {
    let s = seq(ABABACAB);
    let m = find_matches(&s, 2, Transform::IDENTITY);

    // index 0 matches but has no predecessor; index 6 is the query itself.
    let starts: Vec<usize> = m.iter().map(|m| m.start).collect();
    assert_eq!(starts, vec![2]);

    let t = FrequencyTable::from_matches(&s, &m);
    assert_eq!(t.get(&sym("R3E")), 1);
    assert_eq!(t.total(), 1);
    assert_eq!(t.top_k(1)[0].symbol, sym("R3E"));
}

#[test]
fn full_flip_scenario() {
    let s = seq(ABABACAB);
    // flipped query (A,B) -> (B,A), found at 1 and 3; predecessors are both A.
    let m = find_matches(&s, 2, Transform::FULL_FLIP);
    let starts: Vec<usize> = m.iter().map(|m| m.start).collect();
    assert_eq!(starts, vec![1, 3]);
    let t = FrequencyTable::from_matches(&s, &m);
    assert_eq!(t.get(&sym("L3O")), 2);
}

#[test]
fn no_equal_window_is_empty_not_error() {
    let s = seq("L3O L3O L4E L3O R3E");
    let m = find_matches(&s, 2, Transform::FULL_FLIP);
    assert!(m.is_empty());
    let t = FrequencyTable::from_matches(&s, &m);
    assert!(t.is_empty());
    assert!(t.top_k(3).is_empty());
}

#[test]
fn insufficient_history_has_no_query() {
    let s = seq("L3O R3E L3O");
    assert!(query_window(&s, 4).is_none());
    assert!(query_window(&s, 3).is_none());
    assert_eq!(query_window(&s, 2).unwrap().len(), 2);
    assert!(find_matches(&s, 4, Transform::IDENTITY).is_empty());
}

#[test]
fn rotate180_reads_successor() {
    // rotate180 reads the element after a match, which may sit inside the query.
    let s = seq("R3E L3O R3E L3O");
    // query (R3E, L3O) -> rotate180 -> reverse (L3O, R3E) -> flip (R3E, L3O)
    let m = find_matches(&s, 2, Transform::rotate180());
    let starts: Vec<usize> = m.iter().map(|m| m.start).collect();
    assert_eq!(starts, vec![0]);
    assert_eq!(m[0].candidate(&s), Some(sym("R3E")));
}

#[test]
fn overlap_resolver_drops_intersecting_smaller_ranges() {
    assert!(ranges_intersect(0, 4, 3, 3));
    assert!(!ranges_intersect(0, 4, 4, 3));
    assert!(ranges_intersect(5, 2, 4, 4));

    let t = Transform::IDENTITY;
    let mk = |start, size| rungs_core::scan::Match { transform: t, start, size };

    let mut r = OverlapResolver::new();
    let big = r.admit(vec![mk(2, 4), mk(10, 4)]);
    assert_eq!(big.len(), 2);

    let small = r.admit(vec![mk(0, 3), mk(6, 3), mk(13, 3), mk(7, 3)]);
    let starts: Vec<usize> = small.iter().map(|m| m.start).collect();
    // 0..3 hits 2..6, 13..16 hits 10..14; 6..9 and 7..10 survive together.
    assert_eq!(starts, vec![6, 7]);
}

fn small_symbol() -> impl Strategy<Value = Symbol> {
    prop::sample::select(vec![sym("L3O"), sym("R3E"), sym("L4E"), sym("R4O")])
}

proptest! {
    #[test]
    fn matches_are_exact_complete_and_in_bounds(
        s in prop::collection::vec(small_symbol(), 0..40),
        size in 1usize..5,
    ) {
        for t in TransformRegistry::standard().with_reversed().iter() {
            let found = find_matches(&s, size, t);
            let Some(query) = query_window(&s, size) else {
                prop_assert!(found.is_empty());
                continue;
            };
            let target = t.apply(query);
            let last = s.len() - size;

            for m in &found {
                prop_assert!(m.start < last, "self window reported");
                prop_assert_eq!(&s[m.range()], &target[..]);
                let ci = m.candidate_index(s.len());
                prop_assert!(ci.map_or(false, |i| i < s.len()));
            }

            // brute force: every equal window with an in-range candidate is found
            let expected = (0..last)
                .filter(|&i| s[i..i + size] == target[..])
                .filter(|&i| match t.candidate_side() {
                    rungs_core::CandidateSide::Predecessor => i > 0,
                    rungs_core::CandidateSide::Successor => i + size < s.len(),
                })
                .count();
            prop_assert_eq!(found.len(), expected);
        }
    }
}
