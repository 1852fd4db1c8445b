//! Full pipeline against a mock HTTP server: paginate, dedup, tier, export.

use serde_json::json;

use ft_holders::{snapshot_holders, HoldersApiHttp, SnapshotOutcome, CSV_FILENAME};

const TOKEN: &str = "SP000.token-abc::abc";

#[tokio::test]
async fn snapshot_over_http_test() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock(
            "GET",
            "/extended/v1/tokens/ft/SP000.token-abc::abc/holders?limit=200&offset=0",
        )
        .with_body(
            json!({ "results": [
                { "address": "SP1AAA", "balance": "5000000000000" },
                { "address": "SP1BBB", "balance": "20000000000000" }
            ]})
            .to_string(),
        )
        .create_async()
        .await;
    server
        .mock(
            "GET",
            "/extended/v1/tokens/ft/SP000.token-abc::abc/holders?limit=200&offset=200",
        )
        .with_body(
            json!({ "results": [
                { "address": "SP1AAA", "balance": "5000000000000" },
                { "address": "SP1CCC", "balance": "500" }
            ]})
            .to_string(),
        )
        .create_async()
        .await;
    server
        .mock(
            "GET",
            "/extended/v1/tokens/ft/SP000.token-abc::abc/holders?limit=200&offset=400",
        )
        .with_body(json!({ "results": [] }).to_string())
        .create_async()
        .await;

    let api = HoldersApiHttp::new_with_url(&server.url());

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(CSV_FILENAME);

    let outcome = snapshot_holders(&api, TOKEN, &path).await.unwrap();

    let snapshot = match outcome {
        SnapshotOutcome::Exported(snapshot) => snapshot,
        SnapshotOutcome::NoHolders => panic!("expected an exported snapshot"),
    };

    assert_eq!(snapshot.counts.total, 3);
    assert_eq!(snapshot.counts.tier_high, 1);
    assert_eq!(snapshot.counts.tier_mid, 1);
    assert_eq!(snapshot.counts.tier_low, 1);

    let written = std::fs::read_to_string(&path).unwrap();
    assert_eq!(
        written,
        "Address,Balance\nSP1AAA,5000000000000\nSP1BBB,20000000000000\nSP1CCC,500\n"
    );
}
