use std::{path::Path, process::ExitCode};

use clap::Parser;
use tracing::{error, info};

use ft_holders::{
    log, snapshot_holders, CollectError, HoldersApiHttp, SnapshotOutcome, CSV_FILENAME,
};

#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Cli {
    /// Fully qualified fungible token identifier, e.g.
    /// SP000000000000000000002Q6VF78.token-abc::abc
    token: String,

    /// Output file path.
    #[clap(long, default_value = CSV_FILENAME)]
    output: String,
}

#[tokio::main]
async fn main() -> ExitCode {
    log::init();

    let cli = Cli::parse();

    let api = HoldersApiHttp::new_from_env();

    match snapshot_holders(&api, &cli.token, Path::new(&cli.output)).await {
        Ok(SnapshotOutcome::NoHolders) => {
            info!("no token holders found");
            ExitCode::SUCCESS
        }
        Ok(SnapshotOutcome::Exported(snapshot)) => {
            let counts = &snapshot.counts;
            info!(
                total = counts.total,
                tier_high = counts.tier_high,
                tier_mid = counts.tier_mid,
                tier_low = counts.tier_low,
                path = %snapshot.csv_path.display(),
                "wrote token holders csv"
            );
            ExitCode::SUCCESS
        }
        Err(err) => {
            let status = match err.downcast_ref::<CollectError>() {
                Some(CollectError::EmptyInput) => "please enter a token identifier",
                Some(CollectError::Fetch(_)) => "error fetching token holders",
                None => "error writing token holders csv",
            };
            error!(%err, "{status}");
            ExitCode::FAILURE
        }
    }
}
