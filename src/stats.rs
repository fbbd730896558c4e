use std::collections::HashMap;
use std::future::Future;
use std::sync::Arc;

use tracing::debug;

use crate::api::client::RiotApiClient;
use crate::api::models::{ChampionMasteryDto, SummonerDto};
use crate::config::Config;
use crate::error::AppError;
use crate::region::Region;

/// Player lookups against the Riot stats API.
///
/// `summoner_by_name` must fail with [`AppError::PlayerNotFound`] when the
/// player does not exist, callers rely on that to tell a typo from an outage.
pub trait StatsApi: Send + Sync {
    fn summoner_by_name(
        &self,
        region: Region,
        name: &str,
    ) -> impl Future<Output = Result<SummonerDto, AppError>> + Send;

    fn champion_masteries(
        &self,
        region: Region,
        summoner_id: &str,
    ) -> impl Future<Output = Result<Vec<ChampionMasteryDto>, AppError>> + Send;
}

/// One API client per region, built once at startup and read-only afterwards.
pub struct StatsPool {
    clients: HashMap<&'static str, Arc<RiotApiClient>>,
}

impl StatsPool {
    pub fn new(config: &Config) -> Self {
        let clients = Region::all()
            .map(|region| {
                (
                    region.code,
                    Arc::new(RiotApiClient::new(config, region.platform)),
                )
            })
            .collect::<HashMap<_, _>>();

        debug!("Built {} Riot API clients", clients.len());
        StatsPool { clients }
    }

    fn client(&self, region: Region) -> Result<Arc<RiotApiClient>, AppError> {
        self.clients.get(region.code).cloned().ok_or_else(|| {
            AppError::ConfigError(format!("no API client for region {}", region.code))
        })
    }
}

impl StatsApi for StatsPool {
    async fn summoner_by_name(&self, region: Region, name: &str) -> Result<SummonerDto, AppError> {
        let client = self.client(region)?;
        let name = name.to_string();

        tokio::task::spawn_blocking(move || client.get_summoner_by_name(&name)).await?
    }

    async fn champion_masteries(
        &self,
        region: Region,
        summoner_id: &str,
    ) -> Result<Vec<ChampionMasteryDto>, AppError> {
        let client = self.client(region)?;
        let summoner_id = summoner_id.to_string();

        tokio::task::spawn_blocking(move || client.get_champion_masteries(&summoner_id)).await?
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pool_has_a_client_per_region() {
        let config = Config::from_vars(|key| (key == "RIOT_API_KEY").then(|| "k".to_string())).unwrap();
        let pool = StatsPool::new(&config);

        assert_eq!(pool.clients.len(), Region::all().count());
        for region in Region::all() {
            assert_eq!(pool.client(region).unwrap().platform(), region.platform);
        }
    }
}
