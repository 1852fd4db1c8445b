use std::path::{Path, PathBuf};

use anyhow::Result;
use tracing::debug;

use super::{
    collect_holders, count_tiers, write_holders_csv, HolderSet, HoldersApi, TierCounts,
};

/// A completed fetch: the deduplicated holders, their tier counts, and where
/// the CSV landed.
#[derive(Debug)]
pub struct Snapshot {
    pub holders: HolderSet,
    pub counts: TierCounts,
    pub csv_path: PathBuf,
}

#[derive(Debug)]
pub enum SnapshotOutcome {
    /// Collection succeeded but the token has no holders. Nothing is written.
    NoHolders,
    Exported(Snapshot),
}

/// Collects all holders for a token, buckets them into tiers, and writes the
/// CSV. One fetch owns the whole pipeline, there is nothing shared between
/// invocations.
pub async fn snapshot_holders(
    api: &(impl HoldersApi + Sync),
    token: &str,
    csv_path: &Path,
) -> Result<SnapshotOutcome> {
    let holders = collect_holders(api, token).await?;

    if holders.is_empty() {
        return Ok(SnapshotOutcome::NoHolders);
    }

    let counts = count_tiers(&holders);

    write_holders_csv(&holders, csv_path)?;
    debug!(total = counts.total, path = %csv_path.display(), "exported holders snapshot");

    Ok(SnapshotOutcome::Exported(Snapshot {
        holders,
        counts,
        csv_path: csv_path.to_path_buf(),
    }))
}
