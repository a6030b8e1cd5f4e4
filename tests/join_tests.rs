//! Left / right / full outer join tests.

mod test_data_gen;

use std::cell::Cell;

use colext_operators::prelude::*;
use colext_operators::{full_join, left_join, right_join};
use test_data_gen::{named, valued, Named, Valued};

fn sample() -> (Vec<Named>, Vec<Valued>) {
    (
        vec![named(1, "x"), named(2, "y")],
        vec![valued(2, "p"), valued(3, "q")],
    )
}

#[test]
fn test_left_join_worked_example() {
    let (a, b) = sample();
    let rows: Vec<(i32, Option<Valued>)> = left_join(a, b, |n| n.id, |v| v.id, |n, v| (n.id, v)).collect();

    assert_eq!(rows, vec![(1, None), (2, Some(valued(2, "p")))]);
}

#[test]
fn test_full_join_worked_example() {
    let (a, b) = sample();
    let rows: Vec<(Option<i32>, Option<Valued>)> =
        full_join(a, b, |n| n.id, |v| v.id, |n, v| (n.map(|n| n.id), v)).collect();

    assert_eq!(
        rows,
        vec![
            (Some(1), None),
            (Some(2), Some(valued(2, "p"))),
            (None, Some(valued(3, "q"))),
        ]
    );
}

#[test]
fn test_left_join_one_row_per_match_in_inner_order() {
    let outer = vec![named(1, "a"), named(2, "b"), named(3, "c")];
    let inner = vec![valued(3, "r"), valued(1, "p"), valued(3, "s"), valued(1, "q")];

    let rows: Vec<(&str, Option<&str>)> = outer
        .into_iter()
        .left_join(inner, |n| n.id, |v| v.id, |n, v| (n.name, v.map(|v| v.val)))
        .collect();

    assert_eq!(
        rows,
        vec![
            ("a", Some("p")),
            ("a", Some("q")),
            ("b", None),
            ("c", Some("r")),
            ("c", Some("s")),
        ]
    );
}

#[test]
fn test_left_join_row_count_matches_definition() {
    let inner: Vec<i32> = vec![1, 1, 2, 5, 5, 5, 9];
    let outers: Vec<Vec<i32>> = vec![
        vec![],
        vec![0],
        vec![1, 2, 3],
        vec![5, 5, 1, 7],
        vec![9, 9, 9, 9],
    ];

    for outer in outers {
        let expected: usize = outer
            .iter()
            .map(|o| inner.iter().filter(|i| *i == o).count().max(1))
            .sum();
        let rows: Vec<_> = left_join(outer.clone(), inner.clone(), |o| *o, |i| *i, |o, i| (o, i)).collect();

        assert_eq!(rows.len(), expected, "outer = {:?}", outer);
        assert!(rows.len() >= outer.len());
        for (o, i) in rows {
            if let Some(i) = i {
                assert_eq!(o, i);
            } else {
                assert!(!inner.contains(&o));
            }
        }
    }
}

#[test]
fn test_left_join_empty_inner_yields_absent_rows() {
    let rows: Vec<_> = left_join(vec![1, 2], Vec::<i32>::new(), |o| *o, |i| *i, |o, i| (o, i)).collect();
    assert_eq!(rows, vec![(1, None), (2, None)]);
}

#[test]
fn test_left_join_streams_outer() {
    let pulled = Cell::new(0);
    let outer = (1..=100).inspect(|_| pulled.set(pulled.get() + 1));

    let first: Vec<_> = outer
        .left_join(vec![1, 2], |o| *o, |i| *i, |o, i| (o, i))
        .take(2)
        .collect();

    assert_eq!(first, vec![(1, Some(1)), (2, Some(2))]);
    assert_eq!(pulled.get(), 2);
}

#[test]
fn test_right_join_equals_swapped_left_join() {
    let outer = vec![named(1, "a"), named(2, "b"), named(2, "c")];
    let inner = vec![valued(2, "p"), valued(3, "q"), valued(1, "r")];

    let combine = |n: Option<Named>, v: Valued| (n.map(|n| n.name), v.val);

    let right: Vec<_> = right_join(outer.clone(), inner.clone(), |n| n.id, |v| v.id, combine).collect();
    let left: Vec<_> = left_join(inner, outer, |v| v.id, |n| n.id, |v, n| combine(n, v)).collect();

    assert_eq!(right, left);
    assert_eq!(
        right,
        vec![
            (Some("b"), "p"),
            (Some("c"), "p"),
            (None, "q"),
            (Some("a"), "r"),
        ]
    );
}

#[test]
fn test_right_join_via_extension_trait() {
    let rows: Vec<_> = vec![10, 20]
        .into_iter()
        .right_join(vec![20, 30], |o| *o, |i| *i, |o, i| (o, i))
        .collect();
    assert_eq!(rows, vec![(Some(20), 20), (None, 30)]);
}

#[test]
fn test_full_join_covers_both_sides() {
    let outer = vec![1, 2, 2, 4, 6];
    let inner = vec![2, 3, 4, 4, 5];

    let rows: Vec<(Option<i32>, Option<i32>)> =
        full_join(outer.clone(), inner.clone(), |o| *o, |i| *i, |o, i| (o, i)).collect();

    for o in &outer {
        assert!(rows.iter().any(|(ro, _)| ro == &Some(*o)));
    }
    for i in &inner {
        assert!(rows.iter().any(|(_, ri)| ri == &Some(*i)));
    }

    // Matched inner rows never reappear in the trailing section.
    let tail: Vec<i32> = rows
        .iter()
        .filter(|(o, _)| o.is_none())
        .filter_map(|(_, i)| *i)
        .collect();
    assert_eq!(tail, vec![3, 5]);

    // Tail rows come after every outer-derived row.
    let first_tail = rows.iter().position(|(o, _)| o.is_none()).unwrap();
    assert!(rows[first_tail..].iter().all(|(o, _)| o.is_none()));
}

#[test]
fn test_full_join_tail_is_per_key_with_duplicates() {
    let outer = vec![named(1, "a")];
    let inner = vec![
        valued(4, "r"),
        valued(1, "p"),
        valued(4, "s"),
        valued(1, "q"),
        valued(7, "t"),
    ];

    let rows: Vec<(Option<&str>, Option<&str>)> = outer
        .into_iter()
        .full_join(inner, |n| n.id, |v| v.id, |n, v| (n.map(|n| n.name), v.map(|v| v.val)))
        .collect();

    assert_eq!(
        rows,
        vec![
            (Some("a"), Some("p")),
            (Some("a"), Some("q")),
            (None, Some("r")),
            (None, Some("s")),
            (None, Some("t")),
        ]
    );
}

#[test]
fn test_full_join_duplicate_outer_keys() {
    let rows: Vec<_> = full_join(vec![1, 1], vec![1], |o| *o, |i| *i, |o, i| (o, i)).collect();
    assert_eq!(rows, vec![(Some(1), Some(1)), (Some(1), Some(1))]);
}

#[test]
fn test_full_join_both_empty() {
    let rows: Vec<(Option<i32>, Option<i32>)> =
        full_join(Vec::<i32>::new(), Vec::<i32>::new(), |o| *o, |i| *i, |o, i| (o, i)).collect();
    assert!(rows.is_empty());
}

#[test]
fn test_full_join_materializes_inputs_up_front() {
    let pulled = Cell::new(0);
    let outer = (1..=3).inspect(|_| pulled.set(pulled.get() + 1));

    let join = full_join(outer, vec![9], |o| *o, |i| *i, |o, i| (o, i));
    assert_eq!(pulled.get(), 3);
    assert_eq!(join.count(), 4);
}

#[test]
#[should_panic(expected = "bad key")]
fn test_key_selector_panic_propagates() {
    let _rows: Vec<_> = left_join(
        vec![1, 2],
        vec![1],
        |o: &i32| {
            if *o == 2 {
                panic!("bad key");
            }
            *o
        },
        |i| *i,
        |o, i| (o, i),
    )
    .collect();
}

#[test]
#[should_panic(expected = "bad combine")]
fn test_combine_panic_propagates_from_full_join_tail() {
    let _rows: Vec<i32> = full_join(vec![1], vec![2], |o| *o, |i| *i, |o, i| match o {
        Some(o) => o,
        None => panic!("bad combine {:?}", i),
    })
    .collect();
}

#[test]
fn test_left_join_over_unbounded_outer() {
    let rows: Vec<(i32, Option<i32>)> = std::iter::repeat(1)
        .left_join(vec![1, 1], |o| *o, |i| *i, |o, i| (o, i))
        .take(3)
        .collect();
    assert_eq!(rows, vec![(1, Some(1)), (1, Some(1)), (1, Some(1))]);
}

#[test]
fn test_right_join_over_unbounded_inner() {
    let rows: Vec<(Option<i32>, i32)> = vec![1, 1]
        .into_iter()
        .right_join(std::iter::repeat(1), |o| *o, |i| *i, |o, i| (o, i))
        .take(3)
        .collect();
    assert_eq!(rows, vec![(Some(1), 1), (Some(1), 1), (Some(1), 1)]);
}
