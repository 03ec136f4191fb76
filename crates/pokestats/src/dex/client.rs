use log::debug;
use pokestats_core::pokemon::{ListResponse, PokemonRef};
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::Error;

pub const POKEAPI_BASE: &str = "https://pokeapi.co/api/v2";

/// The two endpoint families the pipeline reads from
pub trait PokeApi {
    /// One page of `limit` references, in upstream order
    async fn fetch_list(&self, limit: usize) -> Result<Vec<PokemonRef>, Error>;

    /// The full raw record behind a locator
    async fn fetch_detail(&self, locator: &str) -> Result<Value, Error>;
}

/// HTTP client for PokeAPI
#[derive(Debug, Clone)]
pub struct DexClient {
    client: reqwest::Client,
    base_url: String,
}

impl DexClient {
    pub fn new(base_url: &str) -> Result<Self, Error> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("pokestats/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| Error::Transport {
                url: base_url.to_string(),
                message: format!("Failed to build HTTP client: {e}"),
            })?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Locator for a Pokémon given its name or national dex number
    pub fn detail_locator(&self, name_or_id: &str) -> String {
        format!(
            "{}/pokemon/{}/",
            self.base_url,
            name_or_id.trim().to_lowercase()
        )
    }

    /// GET `url`, check the status, then decode the body.
    ///
    /// `locator` is recorded in status errors for detail requests.
    async fn get_json<T: DeserializeOwned>(
        &self,
        url: &str,
        query: &[(&str, String)],
        locator: Option<&str>,
    ) -> Result<T, Error> {
        debug!("GET {url} {query:?}");

        let response = self
            .client
            .get(url)
            .query(query)
            .send()
            .await
            .map_err(|e| Error::Transport {
                url: url.to_string(),
                message: e.to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::UpstreamStatus {
                status: status.as_u16(),
                locator: locator.map(str::to_string),
            });
        }

        let body = response.text().await.map_err(|e| Error::Transport {
            url: url.to_string(),
            message: format!("Failed to read response body: {e}"),
        })?;

        serde_json::from_str(&body).map_err(|e| Error::Decode {
            url: url.to_string(),
            message: e.to_string(),
        })
    }
}

impl PokeApi for DexClient {
    async fn fetch_list(&self, limit: usize) -> Result<Vec<PokemonRef>, Error> {
        let url = format!("{}/pokemon", self.base_url);
        let list: ListResponse = self
            .get_json(&url, &[("limit", limit.to_string())], None)
            .await?;

        debug!(
            "Listed {} of {:?} Pokémon",
            list.results.len(),
            list.count
        );

        Ok(list.results)
    }

    async fn fetch_detail(&self, locator: &str) -> Result<Value, Error> {
        self.get_json(locator, &[], Some(locator)).await
    }
}
