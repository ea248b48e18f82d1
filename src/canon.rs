use crate::state::Configuration;

/// Symmetry representative: piles are interchangeable, so only the multiset of
/// sizes matters and the ascending sort stands for every permutation.
#[inline]
pub fn canonicalize(config: &Configuration) -> Configuration {
    let mut out = config.clone();
    out.sort_ascending();
    out
}

#[inline]
pub fn is_canonical(config: &Configuration) -> bool {
    config.piles().windows(2).all(|w| w[0] <= w[1])
}
