// colentropy-math/src/entropy/mod.rs
use libm::{log, log2};

use crate::EntropyScore;

/// Unit the entropy is reported in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogBase {
    /// Base-2 logarithm, result in bits.
    #[default]
    Bits,
    /// Natural logarithm, result in nats.
    Nats,
}

impl LogBase {
    #[inline]
    fn apply(self, x: f64) -> f64 {
        match self {
            LogBase::Bits => log2(x),
            LogBase::Nats => log(x),
        }
    }
}

/// Calculates the Shannon entropy, in bits, of a distribution given by its raw counts.
///
/// Counts of zero are ignored. A distribution whose total is zero has entropy 0.0.
pub fn shannon_entropy<I>(counts: I) -> EntropyScore
where
    I: IntoIterator<Item = u64>,
    I::IntoIter: Clone,
{
    entropy_with_base(counts, LogBase::Bits)
}

/// Same as [`shannon_entropy`] but with a selectable logarithm base.
pub fn entropy_with_base<I>(counts: I, base: LogBase) -> EntropyScore
where
    I: IntoIterator<Item = u64>,
    I::IntoIter: Clone,
{
    let counts = counts.into_iter();
    let total: u64 = counts.clone().sum();
    if total == 0 {
        return 0.0;
    }

    let total = total as f64;
    let mut entropy = 0.0;

    for count in counts {
        if count > 0 {
            let p = count as f64 / total;
            entropy -= p * base.apply(p);
        }
    }

    entropy
}

/// Upper bound of the entropy for `distinct` equally likely values.
pub fn max_entropy(distinct: usize, base: LogBase) -> EntropyScore {
    if distinct <= 1 {
        return 0.0;
    }
    base.apply(distinct as f64)
}
