//! Property tests for the filtering decorator
//!
//! Uses `Iterator::filter` as the oracle: a decorated cursor must always
//! produce the same order-preserving subsequence.

use cursorkit::{Cursor, FilterCursor, Stack};
use proptest::prelude::*;

fn collect<C: Cursor<Item = i32>>(cursor: &mut C) -> Vec<i32> {
    let mut out = Vec::new();
    cursor.reset();
    while !cursor.is_exhausted() {
        out.push(*cursor.current());
        cursor.advance();
    }
    out
}

fn stack_of(values: &[i32]) -> Stack<i32> {
    let mut stack = Stack::new();
    for v in values {
        stack.push(*v);
    }
    stack
}

proptest! {
    #[test]
    fn filter_matches_the_iterator_oracle(
        values in proptest::collection::vec(-100i32..100, 0..200),
        threshold in -100i32..100,
    ) {
        let stack = stack_of(&values);
        let mut cursor = FilterCursor::new(stack.cursor(), move |n: &i32| *n >= threshold);

        let expected: Vec<i32> = values.iter().copied().filter(|n| *n >= threshold).collect();
        prop_assert_eq!(collect(&mut cursor), expected);
    }

    #[test]
    fn nested_filters_equal_single_conjunction(
        values in proptest::collection::vec(-100i32..100, 0..200),
        lo in -100i32..0,
        hi in 0i32..100,
    ) {
        let stack = stack_of(&values);

        let above = move |n: &i32| *n >= lo;
        let below = move |n: &i32| *n <= hi;

        let mut nested = FilterCursor::new(
            FilterCursor::new(stack.cursor(), above),
            below,
        );
        let mut flat = FilterCursor::new(stack.cursor(), move |n: &i32| above(n) && below(n));

        prop_assert_eq!(collect(&mut nested), collect(&mut flat));
    }

    #[test]
    fn reset_is_idempotent_under_filtering(
        values in proptest::collection::vec(-100i32..100, 1..100),
        threshold in -100i32..100,
    ) {
        let stack = stack_of(&values);
        let mut cursor = FilterCursor::new(stack.cursor(), move |n: &i32| *n < threshold);

        cursor.reset();
        let once = (!cursor.is_exhausted()).then(|| *cursor.current());
        cursor.reset();
        cursor.reset();
        let thrice = (!cursor.is_exhausted()).then(|| *cursor.current());
        prop_assert_eq!(once, thrice);
    }

    #[test]
    fn decorator_invariant_holds_after_every_operation(
        values in proptest::collection::vec(-50i32..50, 0..100),
        threshold in -50i32..50,
    ) {
        let stack = stack_of(&values);
        let pred = move |n: &i32| *n % 2 == 0 && *n >= threshold;
        let mut cursor = FilterCursor::new(stack.cursor(), pred);

        cursor.reset();
        while !cursor.is_exhausted() {
            prop_assert!(pred(cursor.current()), "positioned on a non-matching element");
            cursor.advance();
        }
    }
}
