use misere::{Configuration, Indexer, NimError, PileLimits};

fn indexer(limits: &[u8]) -> Indexer {
    let limits = PileLimits::new(limits.to_vec()).expect("valid limits");
    Indexer::new(limits).expect("indexer")
}

#[test]
fn total_states_is_product_of_radices() {
    let ix = indexer(&[1, 2, 3]);
    assert_eq!(ix.total_states(), 2 * 3 * 4);

    let ix = indexer(&[255]);
    assert_eq!(ix.total_states(), 256);
}

#[test]
fn encode_is_most_significant_first() {
    let ix = indexer(&[1, 2, 3]);
    // radices 2,3,4 -> weights 12,4,1
    assert_eq!(ix.encode(&Configuration::new(vec![0, 0, 0])).unwrap(), 0);
    assert_eq!(ix.encode(&Configuration::new(vec![0, 0, 1])).unwrap(), 1);
    assert_eq!(ix.encode(&Configuration::new(vec![0, 1, 0])).unwrap(), 4);
    assert_eq!(ix.encode(&Configuration::new(vec![1, 0, 0])).unwrap(), 12);
    assert_eq!(ix.encode(&Configuration::new(vec![1, 2, 3])).unwrap(), 23);
}

#[test]
fn decode_inverts_encode_over_whole_space() {
    for limits in [vec![1u8, 2, 3], vec![2, 2, 2, 1], vec![4], vec![1, 1, 1, 1, 1]] {
        let ix = indexer(&limits);
        for i in 0..ix.total_states() {
            let c = ix.decode(i).expect("in-range decode");
            assert_eq!(ix.encode(&c).unwrap(), i, "round trip failed for {i} under {limits:?}");
        }
    }
}

#[test]
fn decode_digits_respect_limits() {
    let ix = indexer(&[1, 2, 3]);
    for i in 0..ix.total_states() {
        let c = ix.decode(i).unwrap();
        for (&v, &l) in c.piles().iter().zip(ix.limits().as_slice()) {
            assert!(v <= l, "digit {v} above limit {l} at index {i}");
        }
    }
}

#[test]
fn encode_rejects_wrong_arity() {
    let ix = indexer(&[1, 2, 3]);
    let err = ix.encode(&Configuration::new(vec![1, 2])).unwrap_err();
    assert!(matches!(err, NimError::InvalidLength { expected: 3, got: 2 }), "got {err:?}");
}

#[test]
fn encode_rejects_value_above_limit() {
    let ix = indexer(&[1, 2, 3]);
    let err = ix.encode(&Configuration::new(vec![2, 0, 0])).unwrap_err();
    assert!(
        matches!(err, NimError::PileOutOfRange { pile: 0, value: 2, limit: 1 }),
        "got {err:?}"
    );
}

#[test]
fn decode_rejects_index_past_end() {
    let ix = indexer(&[1, 2, 3]);
    let err = ix.decode(24).unwrap_err();
    assert!(matches!(err, NimError::IndexOutOfRange { index: 24, total: 24 }), "got {err:?}");
}

#[test]
fn limits_are_validated_and_sorted() {
    assert!(matches!(PileLimits::new(vec![]), Err(NimError::InvalidBounds { .. })));
    assert!(matches!(PileLimits::new(vec![1, 0, 2]), Err(NimError::InvalidBounds { .. })));

    let limits = PileLimits::new(vec![3, 1, 2]).unwrap();
    assert_eq!(limits.as_slice(), &[1, 2, 3]);
    assert_eq!(limits.start().piles(), &[1, 2, 3]);
}

#[test]
fn overflowing_state_space_is_too_large() {
    // 256^9 raw encodings does not fit a 64-bit index.
    let limits = PileLimits::new(vec![255; 9]).unwrap();
    assert!(matches!(Indexer::new(limits), Err(NimError::TooLarge { .. })));
}
