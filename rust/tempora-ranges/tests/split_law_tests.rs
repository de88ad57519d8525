use tempora_ranges::{
    Direction, FixedStepSequence, SplitSequence, range, range_closed,
};

/// Splits `seq` recursively at random depths and drains the pieces in
/// traversal order.
fn drain_with_random_splits(mut seq: FixedStepSequence<i32>, depth: u32, out: &mut Vec<i32>) {
    if depth == 0 || fastrand::u8(0..4) == 0 {
        seq.for_each_remaining(|v| out.push(v));
        return;
    }
    if fastrand::bool() {
        if let Some(v) = seq.next_value() {
            out.push(v);
        }
    }
    match seq.split() {
        Some(right) => {
            drain_with_random_splits(seq, depth - 1, out);
            drain_with_random_splits(right, depth - 1, out);
        }
        None => seq.for_each_remaining(|v| out.push(v)),
    }
}

#[test]
fn test_recursive_splits_preserve_sequence() {
    fastrand::seed(20161004);
    for _ in 0..500 {
        let start = fastrand::i32(-10_000..10_000);
        let count = fastrand::u64(0..2_000);
        let direction = if fastrand::bool() {
            Direction::Ascending
        } else {
            Direction::Descending
        };
        let expected: Vec<i32> = FixedStepSequence::new(start, count, direction)
            .into_iter()
            .collect();
        assert_eq!(expected.len() as u64, count);

        let mut actual = Vec::new();
        drain_with_random_splits(FixedStepSequence::new(start, count, direction), 8, &mut actual);
        assert_eq!(actual, expected, "start={start} count={count} {direction:?}");
    }
}

#[test]
fn test_split_sizes_sum_to_original() {
    fastrand::seed(42);
    for _ in 0..500 {
        let n = fastrand::u64(0..100_000);
        let mut left = FixedStepSequence::ascending(0i32, n);
        match left.split() {
            Some(right) => {
                assert_eq!(left.remaining() + right.remaining(), n);
                assert!(left.remaining() >= right.remaining());
                assert!(left.remaining() - right.remaining() <= 1);
            }
            None => assert!(n < 2),
        }
    }
}

#[test]
fn test_order_is_strict() {
    fastrand::seed(3);
    for _ in 0..100 {
        let a = fastrand::i32(-500..500);
        let b = fastrand::i32(-500..500);
        let values: Vec<i32> = range_closed(a, b).collect();
        let step = if a <= b { 1 } else { -1 };
        for pair in values.windows(2) {
            assert_eq!(pair[1] - pair[0], step);
        }
        assert_eq!(values.first(), Some(&a));
        assert_eq!(values.last(), Some(&b));
    }
}

#[test]
fn test_skip_matches_stepwise_consumption() {
    fastrand::seed(11);
    for _ in 0..200 {
        let a = fastrand::i32(-300..300);
        let b = fastrand::i32(-300..300);
        let n = fastrand::usize(0..700);
        let skipped: Vec<i32> = range(a, b).skip(n).collect();
        let mut stepwise = range(a, b);
        for _ in 0..n {
            if stepwise.next().is_none() {
                break;
            }
        }
        assert_eq!(skipped, stepwise.collect::<Vec<_>>(), "a={a} b={b} n={n}");
    }
}
