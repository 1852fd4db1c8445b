mod api;
mod export;
mod snapshot;
mod tiers;

use std::collections::HashSet;

use serde::Deserialize;

pub use api::collect_holders;
pub use api::CollectError;
pub use api::HoldersApi;
pub use api::HoldersApiHttp;
pub use api::MockHoldersApi;
pub use api::PAGE_SIZE;

pub use export::holders_csv;
pub use export::write_holders_csv;
pub use export::CSV_FILENAME;

pub use snapshot::snapshot_holders;
pub use snapshot::Snapshot;
pub use snapshot::SnapshotOutcome;

pub use tiers::count_tiers;
pub use tiers::TierCounts;
pub use tiers::TIER_HIGH_MIN;
pub use tiers::TIER_MID_MIN;

/// One row from the holders API. The balance stays the upstream numeric
/// string, it may exceed what fits losslessly in an f64.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct HolderRecord {
    pub address: String,
    pub balance: String,
}

/// Holder records in first-seen order, unique by address.
#[derive(Debug, Default)]
pub struct HolderSet {
    records: Vec<HolderRecord>,
    seen: HashSet<String>,
}

impl HolderSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a record unless its address was seen before. First occurrence
    /// wins, later duplicates are dropped.
    pub fn insert(&mut self, record: HolderRecord) -> bool {
        if self.seen.contains(&record.address) {
            return false;
        }
        self.seen.insert(record.address.clone());
        self.records.push(record);
        true
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &HolderRecord> {
        self.records.iter()
    }

    pub fn records(&self) -> &[HolderRecord] {
        &self.records
    }
}

impl FromIterator<HolderRecord> for HolderSet {
    fn from_iter<I: IntoIterator<Item = HolderRecord>>(iter: I) -> Self {
        let mut set = Self::new();
        for record in iter {
            set.insert(record);
        }
        set
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn holder(address: &str, balance: &str) -> HolderRecord {
        HolderRecord {
            address: address.to_string(),
            balance: balance.to_string(),
        }
    }

    #[test]
    fn insert_keeps_first_occurrence_test() {
        let mut set = HolderSet::new();
        assert!(set.insert(holder("SP1AAA", "100")));
        assert!(!set.insert(holder("SP1AAA", "200")));
        assert_eq!(set.len(), 1);
        assert_eq!(set.records()[0].balance, "100");
    }

    #[test]
    fn insert_preserves_encounter_order_test() {
        let set: HolderSet = [
            holder("SP1CCC", "3"),
            holder("SP1AAA", "1"),
            holder("SP1BBB", "2"),
            holder("SP1AAA", "9"),
        ]
        .into_iter()
        .collect();

        let addresses: Vec<&str> = set.iter().map(|h| h.address.as_str()).collect();
        assert_eq!(addresses, vec!["SP1CCC", "SP1AAA", "SP1BBB"]);
    }

    #[test]
    fn empty_set_test() {
        let set = HolderSet::new();
        assert!(set.is_empty());
        assert_eq!(set.len(), 0);
    }
}
