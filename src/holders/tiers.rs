use serde::Serialize;

use super::HolderSet;

/// Inclusive lower bound of the top tier, 10 trillion base units.
pub const TIER_HIGH_MIN: f64 = 10e12;
/// Inclusive lower bound of the middle tier, 1 trillion base units.
pub const TIER_MID_MIN: f64 = 1e12;

/// Holder counts bucketed by balance. `tier_high + tier_mid + tier_low` always
/// equals `total`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct TierCounts {
    pub total: usize,
    pub tier_high: usize,
    pub tier_mid: usize,
    pub tier_low: usize,
}

/// Buckets every holder by balance, first matching tier wins. Balances that
/// fail to parse count as zero and land in the low tier.
pub fn count_tiers(holders: &HolderSet) -> TierCounts {
    let mut counts = TierCounts {
        total: holders.len(),
        ..TierCounts::default()
    };

    for holder in holders.iter() {
        let balance = holder.balance.parse::<f64>().unwrap_or(0.0);
        if balance >= TIER_HIGH_MIN {
            counts.tier_high += 1;
        } else if balance >= TIER_MID_MIN {
            counts.tier_mid += 1;
        } else {
            counts.tier_low += 1;
        }
    }

    counts
}
