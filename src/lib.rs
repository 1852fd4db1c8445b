mod env;
mod holders;
pub mod log;

pub use holders::collect_holders;
pub use holders::count_tiers;
pub use holders::holders_csv;
pub use holders::snapshot_holders;
pub use holders::write_holders_csv;
pub use holders::CollectError;
pub use holders::HolderRecord;
pub use holders::HolderSet;
pub use holders::HoldersApi;
pub use holders::HoldersApiHttp;
pub use holders::MockHoldersApi;
pub use holders::Snapshot;
pub use holders::SnapshotOutcome;
pub use holders::TierCounts;
pub use holders::CSV_FILENAME;
pub use holders::PAGE_SIZE;
