use async_trait::async_trait;
use mockall::{automock, predicate::*};
use serde::{de, Deserialize, Deserializer};
use thiserror::Error;
use tracing::debug;

use crate::env::ENV_CONFIG;

use super::{HolderRecord, HolderSet};

const HOLDERS_API: &str = "https://api.hiro.so";

/// Fixed page size the upstream is queried with.
pub const PAGE_SIZE: usize = 200;

#[derive(Debug, Error)]
pub enum CollectError {
    #[error("token identifier is blank")]
    EmptyInput,
    #[error("failed to fetch token holders: {0}")]
    Fetch(#[from] reqwest::Error),
}

#[derive(Deserialize)]
struct HoldersPage {
    #[serde(default, deserialize_with = "results_or_end")]
    results: Vec<HolderRecord>,
}

// Past the end of the data the upstream omits `results` or hands back a
// non-array. Both decode as an empty page, which ends pagination. A real array
// with malformed rows is still a decode error.
fn results_or_end<'de, D>(deserializer: D) -> Result<Vec<HolderRecord>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    if value.is_array() {
        serde_json::from_value(value).map_err(de::Error::custom)
    } else {
        Ok(Vec::new())
    }
}

#[automock]
#[async_trait]
pub trait HoldersApi {
    async fn fetch_holders_page(
        &self,
        token: &str,
        limit: usize,
        offset: usize,
    ) -> Result<Vec<HolderRecord>, CollectError>;
}

pub struct HoldersApiHttp {
    server_url: String,
    client: reqwest::Client,
}

impl HoldersApiHttp {
    pub fn new() -> Self {
        Self::new_with_url(HOLDERS_API)
    }

    /// Like `new`, but honors a `HOLDERS_API` base URL override from the env.
    pub fn new_from_env() -> Self {
        match ENV_CONFIG.holders_api {
            Some(ref url) => Self::new_with_url(url),
            None => Self::new(),
        }
    }

    pub fn new_with_url(server_url: &str) -> Self {
        Self {
            server_url: server_url.into(),
            client: reqwest::Client::new(),
        }
    }
}

impl Default for HoldersApiHttp {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl HoldersApi for HoldersApiHttp {
    async fn fetch_holders_page(
        &self,
        token: &str,
        limit: usize,
        offset: usize,
    ) -> Result<Vec<HolderRecord>, CollectError> {
        let url = format!(
            "{}/extended/v1/tokens/ft/{}/holders?limit={}&offset={}",
            self.server_url, token, limit, offset
        );

        debug!(%url, "requesting holders page");

        let page = self
            .client
            .get(url)
            .send()
            .await?
            .error_for_status()?
            .json::<HoldersPage>()
            .await?;

        Ok(page.results)
    }
}

/// Walks the holders pages for a token until the upstream reports an empty
/// page, deduplicating addresses across pages as it goes. Any failed page
/// aborts the whole run, partial results are discarded.
pub async fn collect_holders(
    api: &(impl HoldersApi + Sync),
    token: &str,
) -> Result<HolderSet, CollectError> {
    if token.trim().is_empty() {
        return Err(CollectError::EmptyInput);
    }

    let mut holders = HolderSet::new();
    let mut offset = 0;

    loop {
        let page = api.fetch_holders_page(token, PAGE_SIZE, offset).await?;

        // A short page does not end the walk, only a truly empty one does.
        if page.is_empty() {
            break;
        }

        let fetched = page.len();
        for record in page {
            holders.insert(record);
        }

        debug!(offset, fetched, unique = holders.len(), "collected holders page");

        offset += PAGE_SIZE;
    }

    Ok(holders)
}
