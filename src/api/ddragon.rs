use crate::config::Config;
use crate::error::AppError;
use serde::de::DeserializeOwned;
use tracing::debug;

use super::client::{build_agent, read_response};
use super::endpoints;
use super::models::{ChampionFullDto, RealmDto};

/// Blocking client for the Data Dragon CDN. Cheap to clone, the agent is shared.
#[derive(Clone)]
pub struct DataDragonClient {
    agent: ureq::Agent,
    locale: String,
}

impl DataDragonClient {
    pub fn new(config: &Config) -> Self {
        DataDragonClient {
            agent: build_agent(config.request_timeout),
            locale: config.locale.clone(),
        }
    }

    fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, AppError> {
        debug!("GET {}", url);
        let body = read_response(url, self.agent.get(url).call())?;
        serde_json::from_str(&body).map_err(|e| AppError::JsonError(format!("{}: {}", url, e)))
    }

    pub fn get_realm(&self, region_code: &str) -> Result<RealmDto, AppError> {
        self.get_json(&endpoints::realm(region_code))
    }

    pub fn get_champion_full(&self, version: &str) -> Result<ChampionFullDto, AppError> {
        self.get_json(&endpoints::champion_full(version, &self.locale))
    }
}
