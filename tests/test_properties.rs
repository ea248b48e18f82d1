//! Property-based tests for indexing, canonicalisation and moves.

use proptest::prelude::*;

use misere::{apply_move, canonicalize, is_canonical, legal_moves, Configuration, Indexer, PileLimits};

/// Strategy: 1..=4 piles, each limit 1..=6.
fn limits_strategy() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(1u8..=6, 1..=4)
}

/// Strategy: a configuration of up to 5 piles with up to 9 tokens each.
fn config_strategy() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(0u8..=9, 0..=5)
}

proptest! {
    // 1. encode(decode(i)) == i for every index
    #[test]
    fn bijection_over_full_space(limits in limits_strategy()) {
        let ix = Indexer::new(PileLimits::new(limits).unwrap()).unwrap();
        for i in 0..ix.total_states() {
            let c = ix.decode(i).unwrap();
            prop_assert_eq!(ix.encode(&c).unwrap(), i);
        }
    }

    // 2. canonicalize is idempotent
    #[test]
    fn canonicalize_idempotent(piles in config_strategy()) {
        let once = canonicalize(&Configuration::new(piles));
        let twice = canonicalize(&once);
        prop_assert!(is_canonical(&once));
        prop_assert_eq!(once, twice);
    }

    // 3. canonicalize preserves the multiset
    #[test]
    fn canonicalize_is_permutation(piles in config_strategy()) {
        let canon = canonicalize(&Configuration::new(piles.clone()));
        let mut sorted = piles;
        sorted.sort_unstable();
        prop_assert_eq!(canon.piles(), sorted.as_slice());
    }

    // 4. every generated move is legal and strictly lowers the token total
    #[test]
    fn moves_are_legal_and_decreasing(piles in config_strategy()) {
        let c = Configuration::new(piles);
        let moves = legal_moves(&c);
        prop_assert_eq!(moves.len(), c.total_tokens() as usize);
        for mv in moves {
            prop_assert!(mv.amount >= 1 && mv.amount <= c.piles()[mv.pile]);
            let next = apply_move(&c, mv).unwrap();
            prop_assert_eq!(next.total_tokens() + u32::from(mv.amount), c.total_tokens());
        }
    }

    // 5. sorted limits keep every canonical configuration encodable
    #[test]
    fn canonical_forms_stay_in_bounds(limits in limits_strategy()) {
        let ix = Indexer::new(PileLimits::new(limits).unwrap()).unwrap();
        for i in 0..ix.total_states() {
            let canon = canonicalize(&ix.decode(i).unwrap());
            prop_assert!(ix.encode(&canon).is_ok());
        }
    }
}

#[test]
fn apply_move_rejects_illegal_moves() {
    let c = Configuration::new(vec![0, 2]);
    assert!(apply_move(&c, misere::Move { pile: 0, amount: 1 }).is_err());
    assert!(apply_move(&c, misere::Move { pile: 1, amount: 0 }).is_err());
    assert!(apply_move(&c, misere::Move { pile: 1, amount: 3 }).is_err());
    assert!(apply_move(&c, misere::Move { pile: 2, amount: 1 }).is_err());
    assert_eq!(
        apply_move(&c, misere::Move { pile: 1, amount: 2 }).unwrap().piles(),
        &[0, 0]
    );
}
